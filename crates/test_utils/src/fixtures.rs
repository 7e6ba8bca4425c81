//! Canonical catalog fixtures
//!
//! Mirrors the reference data the system ships with: the standard and
//! premium DMS programs, a handful of service regions, and the seeded promo
//! offers, including the corporate-flavored headcount discount whose name is
//! load-bearing for the individual-path exclusion heuristic.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

use domain_catalog::{DiscountType, Program, PromoOffer, Region};

/// The date most scenario tests pin their clock to.
pub static FIXED_TODAY: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"));

/// Program fixtures
pub struct ProgramFixtures;

impl ProgramFixtures {
    /// Standard DMS program, base price 15000.00, no offers.
    pub fn standard() -> Program {
        Program::new("ДМС Стандарт", Some(dec!(15000.00)))
    }

    /// Premium DMS program, base price 35000.00, no offers.
    pub fn premium() -> Program {
        Program::new("ДМС Премиум", Some(dec!(35000.00)))
    }

    /// A program still being set up: no base price.
    pub fn unpriced() -> Program {
        Program::new("ДМС Черновик", None)
    }
}

/// Region fixtures
pub struct RegionFixtures;

impl RegionFixtures {
    /// Base region with coefficient 1.0.
    pub fn moscow() -> Region {
        Region::new("Москва", dec!(1.0))
    }

    /// A region with a 1.2 premium multiplier.
    pub fn north() -> Region {
        Region::new("Крайний Север", dec!(1.2))
    }
}

/// Promo offer fixtures
pub struct PromoFixtures;

impl PromoFixtures {
    /// Active 10% discount, unbounded validity.
    pub fn ten_percent() -> PromoOffer {
        PromoOffer::new("Весенняя акция", DiscountType::Percent, dec!(10))
    }

    /// Active fixed discount of the given amount.
    pub fn fixed(amount: rust_decimal::Decimal) -> PromoOffer {
        PromoOffer::new("Фиксированная скидка", DiscountType::Fixed, amount)
    }

    /// The seeded corporate 15% discount. Its name contains "5" and
    /// "сотруд", which the selector uses to exclude it from individual
    /// pricing.
    pub fn corporate_headcount() -> PromoOffer {
        let mut offer = PromoOffer::new(
            "Скидка 15% от 5 сотрудников",
            DiscountType::Percent,
            dec!(15),
        );
        offer.description = Some("Для организаций от 5 сотрудников".to_string());
        offer
    }
}

/// Returns a birth date that makes the applicant exactly `age` years old
/// on `today`.
pub fn birth_date_for_age(age: u32, today: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(today.year() - age as i32, today.month(), today.day())
        .expect("valid date")
}
