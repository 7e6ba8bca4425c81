//! Party domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the party domain
#[derive(Debug, Error)]
pub enum PartyError {
    /// Required field is missing
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// Storage failure
    #[error(transparent)]
    Port(#[from] PortError),
}
