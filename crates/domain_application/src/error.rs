//! Application domain errors

use thiserror::Error;

use core_kernel::PortError;
use domain_policy::PolicyError;
use domain_pricing::PricingError;

/// Errors that can occur in the application lifecycle
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Submission fails field validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Operation is not allowed in the application's current status
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Premium calculation failure
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Policy issuance failure
    #[error(transparent)]
    Policy(#[from] PolicyError),

    /// Storage or directory failure
    #[error(transparent)]
    Port(#[from] PortError),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}

impl From<validator::ValidationErrors> for ApplicationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}
