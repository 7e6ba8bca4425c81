//! Individual applications

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ApplicationId, ProgramId, RegionId};
use domain_pricing::PremiumQuote;

use crate::error::ApplicationError;
use crate::status::ApplicationStatus;

/// A coverage request from a natural person, priced at submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualApplication {
    pub id: ApplicationId,
    pub program_id: ProgramId,
    pub region_id: Option<RegionId>,
    pub applicant_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub chronic_diseases: bool,
    /// Recorded on the application; the premium is per application, not
    /// per person.
    pub insured_persons: u32,
    /// The program's raw base price at submission, for display.
    pub base_price_snapshot: Decimal,
    pub calculated_premium: Decimal,
    pub status: ApplicationStatus,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
}

impl IndividualApplication {
    /// Approves the application. Re-approval is idempotent; a rejected or
    /// converted application cannot be approved.
    pub fn approve(
        &mut self,
        comment: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<(), ApplicationError> {
        if !self.status.can_approve() {
            return Err(ApplicationError::invalid_state(format!(
                "cannot approve an application in status {:?}",
                self.status
            )));
        }
        self.status = ApplicationStatus::Approved;
        self.processed_at = Some(now);
        if let Some(comment) = non_blank(comment) {
            self.comment = Some(comment.to_string());
        }
        Ok(())
    }

    /// Rejects the application. Blocked once a policy has been issued.
    pub fn reject(
        &mut self,
        comment: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<(), ApplicationError> {
        if !self.status.can_reject() {
            return Err(ApplicationError::invalid_state(format!(
                "cannot reject an application in status {:?}",
                self.status
            )));
        }
        self.status = ApplicationStatus::Rejected;
        self.processed_at = Some(now);
        if let Some(comment) = non_blank(comment) {
            self.comment = Some(comment.to_string());
        }
        Ok(())
    }

    /// Flips the application into its terminal converted status after a
    /// policy has been issued for it.
    pub fn mark_converted(&mut self, now: DateTime<Utc>) -> Result<(), ApplicationError> {
        if !self.status.can_convert() {
            return Err(ApplicationError::invalid_state(format!(
                "cannot convert an application in status {:?}",
                self.status
            )));
        }
        self.status = ApplicationStatus::ConvertedToPolicy;
        self.processed_at = Some(now);
        Ok(())
    }

    pub(crate) fn from_quote(
        program_id: ProgramId,
        region_id: Option<RegionId>,
        applicant_name: String,
        email: Option<String>,
        phone: Option<String>,
        birth_date: Option<NaiveDate>,
        chronic_diseases: bool,
        insured_persons: u32,
        quote: &PremiumQuote,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ApplicationId::new_v7(),
            program_id,
            region_id,
            applicant_name,
            email,
            phone,
            birth_date,
            chronic_diseases,
            insured_persons,
            base_price_snapshot: quote.base_price_snapshot,
            calculated_premium: quote.premium,
            status: ApplicationStatus::New,
            comment: None,
            created_at,
            processed_at: None,
        }
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn application() -> IndividualApplication {
        let quote = PremiumQuote {
            base_price_snapshot: dec!(15000.00),
            raw_premium: dec!(15000.00),
            discount: Decimal::ZERO,
            premium: dec!(15000.00),
        };
        IndividualApplication::from_quote(
            ProgramId::new_v7(),
            None,
            "Иванов Иван".to_string(),
            Some("ivanov@example.com".to_string()),
            None,
            None,
            false,
            1,
            &quote,
            Utc::now(),
        )
    }

    #[test]
    fn test_approve_stamps_and_keeps_blank_comment_out() {
        let mut app = application();
        let now = Utc::now();
        app.approve(Some("   "), now).unwrap();
        assert_eq!(app.status, ApplicationStatus::Approved);
        assert_eq!(app.processed_at, Some(now));
        assert_eq!(app.comment, None);
    }

    #[test]
    fn test_reapprove_is_idempotent() {
        let mut app = application();
        let now = Utc::now();
        app.approve(Some("ок"), now).unwrap();
        app.approve(None, now).unwrap();
        assert_eq!(app.status, ApplicationStatus::Approved);
        // The earlier comment survives a comment-less re-approval.
        assert_eq!(app.comment.as_deref(), Some("ок"));
    }

    #[test]
    fn test_approve_after_rejection_fails() {
        let mut app = application();
        let now = Utc::now();
        app.reject(Some("отказ"), now).unwrap();
        assert!(matches!(
            app.approve(None, now),
            Err(ApplicationError::InvalidState(_))
        ));
        assert_eq!(app.status, ApplicationStatus::Rejected);
    }

    #[test]
    fn test_reject_after_conversion_fails() {
        let mut app = application();
        let now = Utc::now();
        app.mark_converted(now).unwrap();
        assert!(matches!(
            app.reject(None, now),
            Err(ApplicationError::InvalidState(_))
        ));
        assert_eq!(app.status, ApplicationStatus::ConvertedToPolicy);
    }

    #[test]
    fn test_convert_from_rejected_fails() {
        let mut app = application();
        let now = Utc::now();
        app.reject(None, now).unwrap();
        assert!(app.mark_converted(now).is_err());
    }
}
