//! Test Utilities Crate
//!
//! Shared fixtures and builders for the DMS administration test suite.
//!
//! # Modules
//!
//! - `fixtures`: canonical catalog data (programs, regions, promo offers)
//! - `builders`: builder patterns for test data construction
//! - `generators`: random-but-plausible contact data

pub mod fixtures;
pub mod builders;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use generators::*;
