//! Decimal rounding helpers for monetary amounts
//!
//! All premiums and discounts in the system are single-currency fixed-point
//! decimals. Stored monetary amounts carry 2 decimal places; intermediate
//! percentage-discount computations carry 4. Rounding is half-up at every
//! stated step, matching how the amounts are persisted.

use rust_decimal::{Decimal, RoundingStrategy};

/// Scale for stored monetary amounts.
pub const MONEY_SCALE: u32 = 2;

/// Scale for intermediate percentage-discount computation.
pub const RATE_SCALE: u32 = 4;

/// Rounds a monetary amount half-up to 2 decimal places.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds an intermediate discount value half-up to 4 decimal places.
pub fn round_rate(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(RATE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps a decimal at zero. Premiums never go negative after discounting.
pub fn clamp_non_negative(amount: Decimal) -> Decimal {
    if amount.is_sign_negative() {
        Decimal::ZERO
    } else {
        amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(dec!(10.005)), dec!(10.01));
        assert_eq!(round_money(dec!(10.004)), dec!(10.00));
        assert_eq!(round_money(dec!(19500)), dec!(19500.00));
    }

    #[test]
    fn test_round_rate_half_up() {
        assert_eq!(round_rate(dec!(0.00005)), dec!(0.0001));
        assert_eq!(round_rate(dec!(1500.00004)), dec!(1500.0000));
    }

    #[test]
    fn test_clamp_non_negative() {
        assert_eq!(clamp_non_negative(dec!(-0.01)), Decimal::ZERO);
        assert_eq!(clamp_non_negative(dec!(0)), Decimal::ZERO);
        assert_eq!(clamp_non_negative(dec!(12.34)), dec!(12.34));
    }
}
