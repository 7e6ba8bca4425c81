//! Promo-offer selection
//!
//! Given a program's offers, a pre-discount premium and a date, picks the
//! single largest applicable discount. Discounts are never summed: only the
//! best offer applies, and a program with no eligible offers yields zero.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use core_kernel::round_rate;
use domain_catalog::{DiscountType, Program, PromoOffer};

/// Selects the best applicable promotional discount for a premium.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromoOfferSelector;

impl PromoOfferSelector {
    pub fn new() -> Self {
        Self
    }

    /// Returns the largest single discount applicable to `premium` on
    /// `as_of`, or zero when no offer qualifies.
    ///
    /// In non-corporate context, offers whose name or description marks them
    /// as corporate-oriented are skipped (see `is_corporate_flavored`).
    /// Percentage discounts are computed at 4 decimal places, half-up;
    /// fixed discounts apply verbatim.
    pub fn best_discount(
        &self,
        program: &Program,
        premium: Decimal,
        as_of: NaiveDate,
        corporate_context: bool,
    ) -> Decimal {
        let mut best = Decimal::ZERO;

        for offer in &program.promo_offers {
            if !offer.is_eligible_on(as_of) {
                continue;
            }
            if !corporate_context && is_corporate_flavored(offer) {
                continue;
            }

            let candidate = match offer.discount_type {
                DiscountType::Percent => {
                    round_rate(premium * offer.discount_amount / dec!(100))
                }
                DiscountType::Fixed => offer.discount_amount,
            };

            if candidate > best {
                best = candidate;
            }
        }

        if best > Decimal::ZERO {
            debug!(program = %program.id, %best, "selected promo discount");
        }
        best
    }
}

/// Heuristic marking an offer as intended for corporate clients, excluded
/// from individual pricing.
///
/// The seed data's corporate discount carries "5" and "сотруд" (employee
/// stem) in its name/description, and that literal substring match is what
/// the business relies on. Preserved as-is; do not generalize without
/// product clarification.
fn is_corporate_flavored(offer: &PromoOffer) -> bool {
    let name = offer.name.to_lowercase();
    let desc = offer
        .description
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();

    name.contains('5') || name.contains("сотруд") || desc.contains('5') || desc.contains("сотруд")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The selected discount never exceeds the largest single candidate,
        /// i.e. offers are never combined.
        #[test]
        fn discount_bounded_by_best_single_offer(
            premium_units in 0i64..100_000_000i64,
            percents in proptest::collection::vec(0u32..100u32, 0..8)
        ) {
            let premium = Decimal::new(premium_units, 2);
            let mut program = Program::new("p", Some(premium));
            for (i, p) in percents.iter().enumerate() {
                program.promo_offers.push(PromoOffer::new(
                    format!("offer-{i}"),
                    DiscountType::Percent,
                    Decimal::from(*p),
                ));
            }

            let selector = PromoOfferSelector::new();
            let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
            let discount = selector.best_discount(&program, premium, today, true);

            let max_percent = percents.iter().copied().max().unwrap_or(0);
            let bound = core_kernel::round_rate(
                premium * Decimal::from(max_percent) / Decimal::from(100u32),
            );
            prop_assert!(discount >= Decimal::ZERO);
            prop_assert!(discount <= bound);
        }
    }
}
