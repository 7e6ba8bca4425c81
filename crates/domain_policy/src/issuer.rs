//! Policy issuance
//!
//! Turns an approved application into an issued [`Policy`]. The billing
//! client is resolved through the [`ClientRegistry`], coverage always runs
//! one year from the issue date, and policy numbers are allocated here:
//! individual policies get a timestamp-based number, corporate policies a
//! zero-padded sequential one. Corporate allocation retries on a number
//! collision instead of trusting the count-derived seed, so two concurrent
//! issuances cannot end up sharing a number.

use std::sync::Arc;

use chrono::Months;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{info, warn};

use core_kernel::{ApplicationId, Clock, CorporateApplicationId, ProgramId};
use domain_party::{ClientRegistry, CorporateClient};

use crate::error::PolicyError;
use crate::policy::Policy;
use crate::ports::PolicyStore;

const CORPORATE_NUMBER_ATTEMPTS: u32 = 5;

/// Issuance input for an approved individual application.
#[derive(Debug, Clone)]
pub struct IndividualPolicyRequest {
    pub application_id: ApplicationId,
    pub program_id: ProgramId,
    pub applicant_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Premium computed at submission, must be positive.
    pub premium: Decimal,
}

/// Issuance input for an approved corporate application.
#[derive(Debug, Clone)]
pub struct CorporatePolicyRequest {
    pub application_id: CorporateApplicationId,
    pub program_id: ProgramId,
    pub organization: CorporateClient,
    pub premium: Decimal,
}

/// Issues policies from approved applications.
pub struct PolicyIssuer {
    clients: ClientRegistry,
    policies: Arc<dyn PolicyStore>,
}

impl PolicyIssuer {
    pub fn new(clients: ClientRegistry, policies: Arc<dyn PolicyStore>) -> Self {
        Self { clients, policies }
    }

    /// Issues a one-year policy for an individual applicant.
    ///
    /// The billing client is found or created by the applicant's email.
    /// The policy number is `DMS-` followed by the issue instant in epoch
    /// milliseconds, and the policy keeps a back-link to the application.
    pub async fn issue_individual(
        &self,
        request: IndividualPolicyRequest,
        clock: &dyn Clock,
    ) -> Result<Policy, PolicyError> {
        let now = clock.now();
        let client = self
            .clients
            .find_or_create_from_individual(
                &request.applicant_name,
                request.email.as_deref(),
                request.phone.as_deref(),
                now,
            )
            .await?;

        let start_date = clock.today();
        let end_date = start_date
            .checked_add_months(Months::new(12))
            .ok_or_else(|| PolicyError::validation("coverage end date overflows the calendar"))?;

        let policy = Policy::new(
            format!("DMS-{}", now.timestamp_millis()),
            client.id,
            request.program_id,
            start_date,
            end_date,
            request.premium,
            Some(request.application_id),
        )?;
        self.policies.insert(&policy).await?;

        info!(
            policy = %policy.id,
            number = %policy.policy_number,
            application = %request.application_id,
            "issued individual policy"
        );
        Ok(policy)
    }

    /// Issues a one-year policy for a corporate application.
    ///
    /// The billing client is resolved from the organization's contacts.
    /// The premium is floored at 0.01 so a fully-discounted contract still
    /// carries a nominal charge. Numbers follow `DMS-CORP-NNNN`, seeded
    /// from the current policy count and advanced past collisions.
    pub async fn issue_corporate(
        &self,
        request: CorporatePolicyRequest,
        clock: &dyn Clock,
    ) -> Result<Policy, PolicyError> {
        let premium = request.premium.max(dec!(0.01));
        let client = self
            .clients
            .find_or_create_from_corporate(&request.organization, clock.now())
            .await?;

        let start_date = clock.today();
        let end_date = start_date
            .checked_add_months(Months::new(12))
            .ok_or_else(|| PolicyError::validation("coverage end date overflows the calendar"))?;

        let mut sequence = self.policies.count().await? + 1;
        for _ in 0..CORPORATE_NUMBER_ATTEMPTS {
            let policy = Policy::new(
                format!("DMS-CORP-{:04}", sequence),
                client.id,
                request.program_id,
                start_date,
                end_date,
                premium,
                None,
            )?;
            match self.policies.insert(&policy).await {
                Ok(()) => {
                    info!(
                        policy = %policy.id,
                        number = %policy.policy_number,
                        application = %request.application_id,
                        "issued corporate policy"
                    );
                    return Ok(policy);
                }
                Err(err) if err.is_conflict() => {
                    warn!(
                        number = %policy.policy_number,
                        "policy number already taken, advancing sequence"
                    );
                    sequence += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
        Err(PolicyError::NumberAllocation(CORPORATE_NUMBER_ATTEMPTS))
    }
}
