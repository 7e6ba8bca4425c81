//! Test data builders
//!
//! Builders let tests state only the fields they care about and take
//! defaults for the rest.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_catalog::{DiscountType, Program, PromoOffer};

/// Builder for catalog programs.
pub struct ProgramBuilder {
    name: String,
    base_price: Option<Decimal>,
    promo_offers: Vec<PromoOffer>,
}

impl Default for ProgramBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self {
            name: "ДМС Стандарт".to_string(),
            base_price: Some(dec!(15000.00)),
            promo_offers: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_base_price(mut self, price: Decimal) -> Self {
        self.base_price = Some(price);
        self
    }

    pub fn without_base_price(mut self) -> Self {
        self.base_price = None;
        self
    }

    pub fn with_offer(mut self, offer: PromoOffer) -> Self {
        self.promo_offers.push(offer);
        self
    }

    pub fn build(self) -> Program {
        let mut program = Program::new(self.name, self.base_price);
        program.promo_offers = self.promo_offers;
        program
    }
}

/// Builder for promo offers.
pub struct PromoOfferBuilder {
    name: String,
    description: Option<String>,
    discount_type: DiscountType,
    discount_amount: Decimal,
    valid_from: Option<NaiveDate>,
    valid_to: Option<NaiveDate>,
    active: bool,
}

impl Default for PromoOfferBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromoOfferBuilder {
    pub fn new() -> Self {
        Self {
            name: "Акция".to_string(),
            description: None,
            discount_type: DiscountType::Percent,
            discount_amount: dec!(10),
            valid_from: None,
            valid_to: None,
            active: true,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn percent(mut self, percent: Decimal) -> Self {
        self.discount_type = DiscountType::Percent;
        self.discount_amount = percent;
        self
    }

    pub fn fixed(mut self, amount: Decimal) -> Self {
        self.discount_type = DiscountType::Fixed;
        self.discount_amount = amount;
        self
    }

    pub fn valid_between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.valid_from = Some(from);
        self.valid_to = Some(to);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn build(self) -> PromoOffer {
        let mut offer = PromoOffer::new(self.name, self.discount_type, self.discount_amount);
        offer.description = self.description;
        offer.valid_from = self.valid_from;
        offer.valid_to = self.valid_to;
        offer.active = self.active;
        offer
    }
}
