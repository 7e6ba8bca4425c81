//! Premium calculation
//!
//! Both rating paths start from the program's base price, apply tiered
//! coefficients, and subtract the single best discount. The stored snapshot
//! is always the raw program base price: a display value, never an input to
//! further math.
//!
//! The top age tier deliberately differs between the paths (1.8 individual,
//! 2.0 corporate); group contracts price the 60+ band higher.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{age_in_years, clamp_non_negative, round_money, round_rate};
use domain_catalog::{Program, Region};

use crate::error::PricingError;
use crate::selector::PromoOfferSelector;

/// Headcount at which the corporate volume discount kicks in.
const VOLUME_DISCOUNT_MIN_HEADCOUNT: u32 = 5;

/// Volume discount rate, in percent.
const VOLUME_DISCOUNT_PERCENT: Decimal = dec!(15);

/// Applicant attributes for the individual rating path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndividualRiskProfile {
    /// Absent birth date rates as age 30.
    pub birth_date: Option<NaiveDate>,
    pub chronic_diseases: bool,
    /// Accepted on the application but not part of the formula; the premium
    /// is per application, not per person.
    pub insured_persons: u32,
}

/// Organization attributes for the corporate rating path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorporateRiskProfile {
    /// Exact average employee age, when supplied.
    pub average_age: Option<u32>,
    /// Textual age-range label, used when no exact average is given.
    /// Recognized prefixes: "18" → 25, "30" → 37, "45" → 50, "60" → 62.
    pub age_band: Option<String>,
    pub headcount: u32,
}

/// A priced premium with its intermediate figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumQuote {
    /// The program's raw base price, recorded for display.
    pub base_price_snapshot: Decimal,
    /// Premium after coefficients, before discounting.
    pub raw_premium: Decimal,
    /// The single best discount that was subtracted.
    pub discount: Decimal,
    /// Final premium, never negative.
    pub premium: Decimal,
}

/// Rates individual applicants and corporate headcounts against a program.
#[derive(Debug, Clone, Copy, Default)]
pub struct PremiumCalculator {
    selector: PromoOfferSelector,
}

impl PremiumCalculator {
    pub fn new() -> Self {
        Self {
            selector: PromoOfferSelector::new(),
        }
    }

    /// Prices an individual application.
    ///
    /// `base_price × age coefficient × chronic coefficient × region
    /// coefficient`, rounded half-up to 2 decimal places, less the best
    /// non-corporate promo discount, floored at zero. A program without a
    /// base price rates as zero.
    pub fn rate_individual(
        &self,
        program: &Program,
        profile: &IndividualRiskProfile,
        region: Option<&Region>,
        today: NaiveDate,
    ) -> PremiumQuote {
        let age = profile
            .birth_date
            .map(|birth| age_in_years(birth, today))
            .unwrap_or(30);

        let age_coef = individual_age_coefficient(age);
        let chronic_coef = if profile.chronic_diseases {
            dec!(1.3)
        } else {
            Decimal::ONE
        };
        let region_coef = region.map(|r| r.coefficient).unwrap_or(Decimal::ONE);

        let base = program.base_price_or_zero();
        let raw_premium = round_money(base * age_coef * chronic_coef * region_coef);

        let discount = self
            .selector
            .best_discount(program, raw_premium, today, false);
        let premium = round_money(clamp_non_negative(raw_premium - discount));

        debug!(program = %program.id, age, %raw_premium, %discount, %premium, "rated individual application");

        PremiumQuote {
            base_price_snapshot: base,
            raw_premium,
            discount,
            premium,
        }
    }

    /// Prices a corporate application.
    ///
    /// Per-employee base (base price × age coefficient, rounded) is
    /// multiplied by headcount and then by the service-region coefficient,
    /// rounding half-up after each step. The discount is the larger of the
    /// best promo offer and the 15% volume discount for headcounts of 5 or
    /// more.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the program has no base price or the
    /// headcount is zero.
    pub fn rate_corporate(
        &self,
        program: &Program,
        profile: &CorporateRiskProfile,
        service_region: &Region,
        today: NaiveDate,
    ) -> Result<PremiumQuote, PricingError> {
        let base = program
            .base_price
            .ok_or_else(|| PricingError::validation("program has no base price"))?;

        if profile.headcount == 0 {
            return Err(PricingError::validation("headcount must be greater than 0"));
        }

        let age = corporate_working_age(profile);
        let age_coef = corporate_age_coefficient(age);

        let per_employee_base = round_money(base * age_coef);
        let mut raw_total = round_money(per_employee_base * Decimal::from(profile.headcount));
        raw_total = round_money(raw_total * service_region.coefficient);

        let promo_discount = self.selector.best_discount(program, raw_total, today, true);
        let volume_discount = if profile.headcount >= VOLUME_DISCOUNT_MIN_HEADCOUNT {
            round_rate(raw_total * VOLUME_DISCOUNT_PERCENT / dec!(100))
        } else {
            Decimal::ZERO
        };
        let discount = promo_discount.max(volume_discount);

        let premium = round_money(clamp_non_negative(raw_total - discount));

        debug!(
            program = %program.id,
            age,
            headcount = profile.headcount,
            %raw_total,
            %discount,
            %premium,
            "rated corporate application"
        );

        Ok(PremiumQuote {
            base_price_snapshot: base,
            raw_premium: raw_total,
            discount,
            premium,
        })
    }
}

/// Age tiers for the individual path.
fn individual_age_coefficient(age: u32) -> Decimal {
    if age < 30 {
        dec!(1.0)
    } else if age < 45 {
        dec!(1.2)
    } else if age < 60 {
        dec!(1.5)
    } else {
        dec!(1.8)
    }
}

/// Age tiers for the corporate path. The top tier is 2.0, not 1.8.
fn corporate_age_coefficient(age: u32) -> Decimal {
    if age < 30 {
        dec!(1.0)
    } else if age < 45 {
        dec!(1.2)
    } else if age < 60 {
        dec!(1.5)
    } else {
        dec!(2.0)
    }
}

/// Resolves the working age for a corporate profile: exact average age if
/// present, else the age-band prefix mapping, else 35.
fn corporate_working_age(profile: &CorporateRiskProfile) -> u32 {
    if let Some(age) = profile.average_age {
        return age;
    }
    if let Some(band) = profile.age_band.as_deref() {
        let band = band.trim();
        if band.starts_with("18") {
            return 25;
        } else if band.starts_with("30") {
            return 37;
        } else if band.starts_with("45") {
            return 50;
        } else if band.starts_with("60") {
            return 62;
        }
    }
    35
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_individual_age_tiers() {
        assert_eq!(individual_age_coefficient(0), dec!(1.0));
        assert_eq!(individual_age_coefficient(29), dec!(1.0));
        assert_eq!(individual_age_coefficient(30), dec!(1.2));
        assert_eq!(individual_age_coefficient(44), dec!(1.2));
        assert_eq!(individual_age_coefficient(45), dec!(1.5));
        assert_eq!(individual_age_coefficient(59), dec!(1.5));
        assert_eq!(individual_age_coefficient(60), dec!(1.8));
        assert_eq!(individual_age_coefficient(85), dec!(1.8));
    }

    #[test]
    fn test_corporate_top_tier_differs() {
        assert_eq!(corporate_age_coefficient(59), dec!(1.5));
        assert_eq!(corporate_age_coefficient(60), dec!(2.0));
    }

    #[test]
    fn test_age_band_prefix_mapping() {
        let profile = |band: &str| CorporateRiskProfile {
            average_age: None,
            age_band: Some(band.to_string()),
            headcount: 10,
        };
        assert_eq!(corporate_working_age(&profile("18-29")), 25);
        assert_eq!(corporate_working_age(&profile("30-44")), 37);
        assert_eq!(corporate_working_age(&profile("45-59")), 50);
        assert_eq!(corporate_working_age(&profile("60+")), 62);
        assert_eq!(corporate_working_age(&profile("прочее")), 35);
    }

    #[test]
    fn test_average_age_beats_band() {
        let profile = CorporateRiskProfile {
            average_age: Some(52),
            age_band: Some("18-29".to_string()),
            headcount: 10,
        };
        assert_eq!(corporate_working_age(&profile), 52);
    }

    #[test]
    fn test_no_age_data_defaults_to_35() {
        assert_eq!(corporate_working_age(&CorporateRiskProfile::default()), 35);
    }
}
