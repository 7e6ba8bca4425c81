//! Core Kernel - Foundational types and utilities for the DMS administration system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Decimal rounding helpers for monetary amounts
//! - Clock abstraction so "today" is always an explicit input
//! - Strongly-typed identifiers
//! - Port plumbing and the shared port error taxonomy

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod ports;

pub use money::{round_money, round_rate, clamp_non_negative, MONEY_SCALE, RATE_SCALE};
pub use temporal::{Clock, SystemClock, FixedClock, age_in_years};
pub use identifiers::{
    ProgramId, RegionId, PromoOfferId, ApplicationId, CorporateApplicationId,
    PolicyId, ClientId, CorporateClientId,
};
pub use ports::{PortError, DomainPort};
