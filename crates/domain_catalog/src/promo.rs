//! Promotional offers
//!
//! A promo offer is a time-bounded discount attached to a program, either a
//! percentage of the premium or a fixed amount. Eligibility on a date is the
//! conjunction of the active flag and the validity window; an absent bound
//! means unbounded on that side.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::PromoOfferId;

/// How a promo offer's discount amount is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiscountType {
    /// `discount_amount` is a percentage of the pre-discount premium
    Percent,
    /// `discount_amount` is subtracted verbatim
    Fixed,
}

/// A time-bounded discount applicable to a program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoOffer {
    pub id: PromoOfferId,
    pub name: String,
    pub description: Option<String>,
    pub discount_type: DiscountType,
    /// Percentage points for [`DiscountType::Percent`], a monetary amount
    /// for [`DiscountType::Fixed`]. Never negative in well-formed data.
    pub discount_amount: Decimal,
    pub valid_from: Option<NaiveDate>,
    pub valid_to: Option<NaiveDate>,
    pub active: bool,
}

impl PromoOffer {
    pub fn new(
        name: impl Into<String>,
        discount_type: DiscountType,
        discount_amount: Decimal,
    ) -> Self {
        Self {
            id: PromoOfferId::new_v7(),
            name: name.into(),
            description: None,
            discount_type,
            discount_amount,
            valid_from: None,
            valid_to: None,
            active: true,
        }
    }

    /// Whether the offer may be applied on the given date.
    ///
    /// Eligible iff active and the date falls inside the validity window;
    /// either bound may be absent, meaning unbounded on that side.
    pub fn is_eligible_on(&self, date: NaiveDate) -> bool {
        if !self.active {
            return false;
        }
        if let Some(from) = self.valid_from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.valid_to {
            if date > to {
                return false;
            }
        }
        true
    }
}
