//! DMS insurance programs
//!
//! A program owns its promotional offers outright and references its
//! applicable regions by id. The original system modeled program↔offer as a
//! bidirectional many-to-many; here the program side is authoritative and
//! traversal only ever goes program → offers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ProgramId, RegionId};

use crate::promo::PromoOffer;

/// An insurance product with a base price and attached promotional offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: ProgramId,
    pub name: String,
    /// Base annual price for one insured person. May be absent for programs
    /// still being set up; pricing treats individual-path absence as zero
    /// and corporate-path absence as a validation failure.
    pub base_price: Option<Decimal>,
    /// Owned, unidirectional collection of offers.
    pub promo_offers: Vec<PromoOffer>,
    /// Regions the program is sold in.
    pub region_ids: Vec<RegionId>,
}

impl Program {
    pub fn new(name: impl Into<String>, base_price: Option<Decimal>) -> Self {
        Self {
            id: ProgramId::new_v7(),
            name: name.into(),
            base_price,
            promo_offers: Vec::new(),
            region_ids: Vec::new(),
        }
    }

    /// Attaches a promo offer to this program.
    pub fn add_promo_offer(&mut self, offer: PromoOffer) {
        self.promo_offers.push(offer);
    }

    /// The base price with absence collapsed to zero, as the individual
    /// pricing path and the display snapshot treat it.
    pub fn base_price_or_zero(&self) -> Decimal {
        self.base_price.unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_base_price_or_zero() {
        let priced = Program::new("ДМС Стандарт", Some(dec!(15000.00)));
        assert_eq!(priced.base_price_or_zero(), dec!(15000.00));

        let unpriced = Program::new("ДМС Черновик", None);
        assert_eq!(unpriced.base_price_or_zero(), Decimal::ZERO);
    }
}
