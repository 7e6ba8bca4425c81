//! Policy Domain
//!
//! Issued DMS policies and the issuance service that creates them from
//! approved applications. Issuance resolves the billing client through the
//! party registry, allocates a unique policy number, and persists the
//! one-year policy record.

pub mod policy;
pub mod issuer;
pub mod ports;
pub mod error;

pub use policy::{Policy, PolicyStatus};
pub use issuer::{CorporatePolicyRequest, IndividualPolicyRequest, PolicyIssuer};
pub use ports::PolicyStore;
pub use error::PolicyError;
