//! Rating scenarios for the premium calculator
//!
//! Exercises the documented pricing formulas end to end with the canonical
//! catalog fixtures: the standard 15000.00 program, the 1.2-coefficient
//! region, and the seeded promo offers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_pricing::{CorporateRiskProfile, IndividualRiskProfile, PremiumCalculator};
use test_utils::{
    birth_date_for_age, ProgramBuilder, PromoFixtures, PromoOfferBuilder, RegionFixtures,
    FIXED_TODAY,
};

fn calculator() -> PremiumCalculator {
    PremiumCalculator::new()
}

#[test]
fn young_applicant_pays_base_price() {
    // Age 25, no chronic conditions, no region, no promo: all coefficients 1.0.
    let program = ProgramBuilder::new().build();
    let profile = IndividualRiskProfile {
        birth_date: Some(birth_date_for_age(25, *FIXED_TODAY)),
        chronic_diseases: false,
        insured_persons: 1,
    };

    let quote = calculator().rate_individual(&program, &profile, None, *FIXED_TODAY);

    assert_eq!(quote.premium, dec!(15000.00));
    assert_eq!(quote.base_price_snapshot, dec!(15000.00));
    assert_eq!(quote.discount, Decimal::ZERO);
}

#[test]
fn chronic_diseases_apply_thirty_percent_loading() {
    let program = ProgramBuilder::new().build();
    let profile = IndividualRiskProfile {
        birth_date: Some(birth_date_for_age(25, *FIXED_TODAY)),
        chronic_diseases: true,
        insured_persons: 1,
    };

    let quote = calculator().rate_individual(&program, &profile, None, *FIXED_TODAY);

    assert_eq!(quote.premium, dec!(19500.00));
}

#[test]
fn age_and_region_coefficients_multiply() {
    // Age 50 (1.5) in a 1.2 region: 15000 * 1.5 * 1.2 = 27000.
    let program = ProgramBuilder::new().build();
    let region = RegionFixtures::north();
    let profile = IndividualRiskProfile {
        birth_date: Some(birth_date_for_age(50, *FIXED_TODAY)),
        chronic_diseases: false,
        insured_persons: 1,
    };

    let quote = calculator().rate_individual(&program, &profile, Some(&region), *FIXED_TODAY);

    assert_eq!(quote.premium, dec!(27000.00));
}

#[test]
fn missing_birth_date_rates_as_age_thirty() {
    // Default age 30 lands in the 1.2 tier.
    let program = ProgramBuilder::new().build();
    let profile = IndividualRiskProfile::default();

    let quote = calculator().rate_individual(&program, &profile, None, *FIXED_TODAY);

    assert_eq!(quote.premium, dec!(18000.00));
}

#[test]
fn insured_persons_does_not_change_the_premium() {
    let program = ProgramBuilder::new().build();
    let base_profile = IndividualRiskProfile {
        birth_date: Some(birth_date_for_age(25, *FIXED_TODAY)),
        chronic_diseases: false,
        insured_persons: 1,
    };
    let family_profile = IndividualRiskProfile {
        insured_persons: 4,
        ..base_profile.clone()
    };

    let single = calculator().rate_individual(&program, &base_profile, None, *FIXED_TODAY);
    let family = calculator().rate_individual(&program, &family_profile, None, *FIXED_TODAY);

    assert_eq!(single.premium, family.premium);
}

#[test]
fn program_without_base_price_rates_as_zero_for_individuals() {
    let program = ProgramBuilder::new().without_base_price().build();
    let profile = IndividualRiskProfile::default();

    let quote = calculator().rate_individual(&program, &profile, None, *FIXED_TODAY);

    assert_eq!(quote.premium, Decimal::ZERO);
    assert_eq!(quote.base_price_snapshot, Decimal::ZERO);
}

#[test]
fn active_percent_offer_discounts_individual_premium() {
    // 10% of 15000 = 1500 discount.
    let program = ProgramBuilder::new()
        .with_offer(PromoFixtures::ten_percent())
        .build();
    let profile = IndividualRiskProfile {
        birth_date: Some(birth_date_for_age(25, *FIXED_TODAY)),
        chronic_diseases: false,
        insured_persons: 1,
    };

    let quote = calculator().rate_individual(&program, &profile, None, *FIXED_TODAY);

    assert_eq!(quote.discount, dec!(1500.0000));
    assert_eq!(quote.premium, dec!(13500.00));
}

#[test]
fn oversized_fixed_discount_floors_premium_at_zero() {
    let program = ProgramBuilder::new()
        .with_offer(
            PromoOfferBuilder::new()
                .with_name("Подарочная акция")
                .fixed(dec!(99999.00))
                .build(),
        )
        .build();
    let profile = IndividualRiskProfile {
        birth_date: Some(birth_date_for_age(25, *FIXED_TODAY)),
        chronic_diseases: false,
        insured_persons: 1,
    };

    let quote = calculator().rate_individual(&program, &profile, None, *FIXED_TODAY);

    assert_eq!(quote.premium, Decimal::ZERO);
}

#[test]
fn corporate_headcount_triggers_volume_discount() {
    // Average age 34 (1.2): per-employee 18000, x25 = 450000, region 1.0.
    // Volume discount 15% = 67500; no promo beats it.
    let program = ProgramBuilder::new().build();
    let region = RegionFixtures::moscow();
    let profile = CorporateRiskProfile {
        average_age: Some(34),
        age_band: None,
        headcount: 25,
    };

    let quote = calculator()
        .rate_corporate(&program, &profile, &region, *FIXED_TODAY)
        .unwrap();

    assert_eq!(quote.raw_premium, dec!(450000.00));
    assert_eq!(quote.discount, dec!(67500.0000));
    assert_eq!(quote.premium, dec!(382500.00));
}

#[test]
fn small_headcount_gets_no_volume_discount() {
    let program = ProgramBuilder::new().build();
    let region = RegionFixtures::moscow();
    let profile = CorporateRiskProfile {
        average_age: Some(34),
        age_band: None,
        headcount: 4,
    };

    let quote = calculator()
        .rate_corporate(&program, &profile, &region, *FIXED_TODAY)
        .unwrap();

    assert_eq!(quote.discount, Decimal::ZERO);
    assert_eq!(quote.premium, dec!(72000.00));
}

#[test]
fn corporate_offer_competes_with_volume_discount() {
    // 20% promo (eligible in corporate context) beats the 15% volume cut.
    let program = ProgramBuilder::new()
        .with_offer(
            PromoOfferBuilder::new()
                .with_name("Скидка для 5 сотрудников")
                .percent(dec!(20))
                .build(),
        )
        .build();
    let region = RegionFixtures::moscow();
    let profile = CorporateRiskProfile {
        average_age: Some(34),
        age_band: None,
        headcount: 25,
    };

    let quote = calculator()
        .rate_corporate(&program, &profile, &region, *FIXED_TODAY)
        .unwrap();

    assert_eq!(quote.discount, dec!(90000.0000));
    assert_eq!(quote.premium, dec!(360000.00));
}

#[test]
fn corporate_region_coefficient_applies_after_headcount() {
    // 15000 * 1.2 = 18000; x10 = 180000; x1.2 region = 216000.
    let program = ProgramBuilder::new().build();
    let region = RegionFixtures::north();
    let profile = CorporateRiskProfile {
        average_age: Some(34),
        age_band: None,
        headcount: 10,
    };

    let quote = calculator()
        .rate_corporate(&program, &profile, &region, *FIXED_TODAY)
        .unwrap();

    assert_eq!(quote.raw_premium, dec!(216000.00));
    // Headcount 10 still earns the volume discount.
    assert_eq!(quote.premium, dec!(183600.00));
}

#[test]
fn corporate_rating_requires_base_price() {
    let program = ProgramBuilder::new().without_base_price().build();
    let region = RegionFixtures::moscow();
    let profile = CorporateRiskProfile {
        average_age: Some(34),
        age_band: None,
        headcount: 10,
    };

    let result = calculator().rate_corporate(&program, &profile, &region, *FIXED_TODAY);
    assert!(result.is_err());
}

#[test]
fn corporate_rating_rejects_zero_headcount() {
    let program = ProgramBuilder::new().build();
    let region = RegionFixtures::moscow();
    let profile = CorporateRiskProfile {
        average_age: Some(34),
        age_band: None,
        headcount: 0,
    };

    let result = calculator().rate_corporate(&program, &profile, &region, *FIXED_TODAY);
    assert!(result.is_err());
}

#[test]
fn individual_pricing_ignores_corporate_flavored_offers() {
    let program = ProgramBuilder::new()
        .with_offer(PromoFixtures::corporate_headcount())
        .build();
    let profile = IndividualRiskProfile {
        birth_date: Some(birth_date_for_age(25, *FIXED_TODAY)),
        chronic_diseases: false,
        insured_persons: 1,
    };

    let quote = calculator().rate_individual(&program, &profile, None, *FIXED_TODAY);

    assert_eq!(quote.discount, Decimal::ZERO);
    assert_eq!(quote.premium, dec!(15000.00));
}
