//! Pricing Domain
//!
//! Turns a program choice plus applicant or organization attributes into a
//! priced premium. Two rating paths exist: individual (age, chronic-disease
//! and region coefficients) and corporate (average-age tiers, headcount,
//! service-region coefficient, volume discount). Both subtract at most one
//! promotional discount, chosen by [`PromoOfferSelector`].

pub mod calculator;
pub mod selector;
pub mod error;

pub use calculator::{
    PremiumCalculator, PremiumQuote, IndividualRiskProfile, CorporateRiskProfile,
};
pub use selector::PromoOfferSelector;
pub use error::PricingError;
