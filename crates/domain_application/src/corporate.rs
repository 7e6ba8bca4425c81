//! Corporate applications

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{CorporateApplicationId, CorporateClientId, PolicyId, ProgramId, RegionId};
use domain_pricing::PremiumQuote;

use crate::error::ApplicationError;
use crate::individual::non_blank;
use crate::status::ApplicationStatus;

/// A coverage request from an organization for a group of employees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorporateApplication {
    pub id: CorporateApplicationId,
    pub corporate_client_id: CorporateClientId,
    pub program_id: ProgramId,
    pub service_region_id: RegionId,
    pub headcount: u32,
    pub average_age: Option<u32>,
    pub age_band: Option<String>,
    /// The program's raw base price at submission, for display.
    pub base_price_snapshot: Decimal,
    pub calculated_premium: Decimal,
    pub status: ApplicationStatus,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
    /// Set when the application is converted; a corporate application
    /// carries the link to its policy.
    pub policy_id: Option<PolicyId>,
}

impl CorporateApplication {
    /// Approves the application. Re-approval is idempotent.
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

    /// Links the issued policy and flips into the terminal converted
    /// status.
    pub fn mark_converted(
        &mut self,
        policy_id: PolicyId,
        now: DateTime<Utc>,
    ) -> Result<(), ApplicationError> {
        if !self.status.can_convert() {
            return Err(ApplicationError::invalid_state(format!(
                "cannot convert an application in status {:?}",
                self.status
            )));
        }
        self.status = ApplicationStatus::ConvertedToPolicy;
        self.policy_id = Some(policy_id);
        self.processed_at = Some(now);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_quote(
        corporate_client_id: CorporateClientId,
        program_id: ProgramId,
        service_region_id: RegionId,
        headcount: u32,
        average_age: Option<u32>,
        age_band: Option<String>,
        quote: &PremiumQuote,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CorporateApplicationId::new_v7(),
            corporate_client_id,
            program_id,
            service_region_id,
            headcount,
            average_age,
            age_band,
            base_price_snapshot: quote.base_price_snapshot,
            calculated_premium: quote.premium,
            status: ApplicationStatus::New,
            comment: None,
            created_at,
            processed_at: None,
            policy_id: None,
        }
    }
}
