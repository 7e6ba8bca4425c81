//! Policy records
//!
//! A [`Policy`] is the issued contract: a unique number, the billing
//! client, the program, a coverage period, and the final premium. Records
//! are immutable after issuance except for status transitions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ApplicationId, ClientId, PolicyId, ProgramId};

use crate::error::PolicyError;

/// Lifecycle status of an issued policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyStatus {
    Active,
    Expired,
    Cancelled,
}

/// An issued DMS policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub id: PolicyId,
    /// Unique policy number, assigned at issuance.
    pub policy_number: String,
    pub client_id: ClientId,
    pub program_id: ProgramId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub premium: Decimal,
    pub status: PolicyStatus,
    /// Back-link to the individual application this policy was issued from.
    pub application_id: Option<ApplicationId>,
}

impl Policy {
    /// Creates an active policy, validating the coverage period and premium.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        policy_number: impl Into<String>,
        client_id: ClientId,
        program_id: ProgramId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        premium: Decimal,
        application_id: Option<ApplicationId>,
    ) -> Result<Self, PolicyError> {
        let policy_number = policy_number.into();
        if policy_number.trim().is_empty() {
            return Err(PolicyError::validation("policy number must not be blank"));
        }
        if end_date < start_date {
            return Err(PolicyError::validation(format!(
                "end date {} precedes start date {}",
                end_date, start_date
            )));
        }
        if premium <= Decimal::ZERO {
            return Err(PolicyError::validation(format!(
                "premium must be positive, got {}",
                premium
            )));
        }
        Ok(Self {
            id: PolicyId::new_v7(),
            policy_number,
            client_id,
            program_id,
            start_date,
            end_date,
            premium,
            status: PolicyStatus::Active,
            application_id,
        })
    }

    pub fn is_active(&self) -> bool {
        self.status == PolicyStatus::Active
    }

    /// Cancels an active policy.
    pub fn cancel(&mut self) -> Result<(), PolicyError> {
        if self.status != PolicyStatus::Active {
            return Err(PolicyError::invalid_state(format!(
                "cannot cancel a policy in status {:?}",
                self.status
            )));
        }
        self.status = PolicyStatus::Cancelled;
        Ok(())
    }

    /// Marks an active policy as expired once its coverage period has ended.
    pub fn expire(&mut self, today: NaiveDate) -> Result<(), PolicyError> {
        if self.status != PolicyStatus::Active {
            return Err(PolicyError::invalid_state(format!(
                "cannot expire a policy in status {:?}",
                self.status
            )));
        }
        if today <= self.end_date {
            return Err(PolicyError::invalid_state(format!(
                "coverage runs until {}",
                self.end_date
            )));
        }
        self.status = PolicyStatus::Expired;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_policy() -> Policy {
        Policy::new(
            "DMS-1748736000000",
            ClientId::new_v7(),
            ProgramId::new_v7(),
            date(2025, 6, 1),
            date(2026, 6, 1),
            dec!(15000.00),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_new_policy_is_active() {
        let policy = sample_policy();
        assert!(policy.is_active());
        assert_eq!(policy.status, PolicyStatus::Active);
    }

    #[test]
    fn test_rejects_inverted_period() {
        let result = Policy::new(
            "DMS-1",
            ClientId::new_v7(),
            ProgramId::new_v7(),
            date(2026, 6, 1),
            date(2025, 6, 1),
            dec!(15000.00),
            None,
        );
        assert!(matches!(result, Err(PolicyError::Validation(_))));
    }

    #[test]
    fn test_rejects_non_positive_premium() {
        let result = Policy::new(
            "DMS-1",
            ClientId::new_v7(),
            ProgramId::new_v7(),
            date(2025, 6, 1),
            date(2026, 6, 1),
            Decimal::ZERO,
            None,
        );
        assert!(matches!(result, Err(PolicyError::Validation(_))));
    }

    #[test]
    fn test_rejects_blank_number() {
        let result = Policy::new(
            "  ",
            ClientId::new_v7(),
            ProgramId::new_v7(),
            date(2025, 6, 1),
            date(2026, 6, 1),
            dec!(100.00),
            None,
        );
        assert!(matches!(result, Err(PolicyError::Validation(_))));
    }

    #[test]
    fn test_cancel_only_from_active() {
        let mut policy = sample_policy();
        policy.cancel().unwrap();
        assert_eq!(policy.status, PolicyStatus::Cancelled);
        assert!(policy.cancel().is_err());
    }

    #[test]
    fn test_expire_requires_period_end() {
        let mut policy = sample_policy();
        assert!(policy.expire(date(2026, 6, 1)).is_err());
        policy.expire(date(2026, 6, 2)).unwrap();
        assert_eq!(policy.status, PolicyStatus::Expired);
    }

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(
            serde_json::to_string(&PolicyStatus::Active).unwrap(),
            "\"ACTIVE\""
        );
        assert_eq!(
            serde_json::to_string(&PolicyStatus::Cancelled).unwrap(),
            "\"CANCELLED\""
        );
    }
}
