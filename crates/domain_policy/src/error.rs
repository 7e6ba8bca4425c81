//! Policy domain errors

use thiserror::Error;

use core_kernel::PortError;
use domain_party::PartyError;

/// Errors that can occur during policy issuance
#[derive(Debug, Error)]
pub enum PolicyError {
    /// Policy record fails an invariant
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Operation is not allowed in the policy's current status
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// No unique policy number could be allocated
    #[error("Could not allocate a unique policy number after {0} attempts")]
    NumberAllocation(u32),

    /// Client resolution failure
    #[error(transparent)]
    Party(#[from] PartyError),

    /// Storage failure
    #[error(transparent)]
    Port(#[from] PortError),
}

impl PolicyError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}
