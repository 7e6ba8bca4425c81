//! Service regions and their pricing coefficients

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::RegionId;

/// A service region with a premium multiplier.
///
/// The coefficient scales premiums for policies served in the region. It is
/// never zero or negative in well-formed data; reference-data maintenance is
/// expected to enforce that upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub name: String,
    pub coefficient: Decimal,
}

impl Region {
    /// Creates a region with the given coefficient.
    pub fn new(name: impl Into<String>, coefficient: Decimal) -> Self {
        Self {
            id: RegionId::new_v7(),
            name: name.into(),
            coefficient,
        }
    }

    /// Creates a region with the default coefficient of 1.0.
    pub fn with_default_coefficient(name: impl Into<String>) -> Self {
        Self::new(name, Decimal::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_coefficient_is_one() {
        let region = Region::with_default_coefficient("Москва");
        assert_eq!(region.coefficient, dec!(1));
    }
}
