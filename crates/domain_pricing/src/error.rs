//! Pricing domain errors

use thiserror::Error;

/// Errors that can occur while rating an application
#[derive(Debug, Error)]
pub enum PricingError {
    /// Required input is missing or out of range
    #[error("Validation error: {0}")]
    Validation(String),
}

impl PricingError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PricingError::Validation(message.into())
    }
}
