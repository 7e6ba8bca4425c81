//! Application status state machine
//!
//! `REJECTED` and `CONVERTED_TO_POLICY` are terminal. Re-approving an
//! already approved application is the one idempotent exception; a
//! rejected application can be rejected again without effect beyond a
//! fresh processing stamp.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    New,
    Approved,
    Rejected,
    ConvertedToPolicy,
}

impl ApplicationStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::ConvertedToPolicy)
    }

    /// Approval is allowed from `NEW` and, idempotently, from `APPROVED`.
    pub fn can_approve(self) -> bool {
        matches!(self, Self::New | Self::Approved)
    }

    /// Rejection is allowed from anything but `CONVERTED_TO_POLICY`.
    pub fn can_reject(self) -> bool {
        self != Self::ConvertedToPolicy
    }

    /// Conversion is allowed from `NEW` (approval is implied) and
    /// `APPROVED`.
    pub fn can_convert(self) -> bool {
        matches!(self, Self::New | Self::Approved)
    }
}
