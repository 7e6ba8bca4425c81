//! Application lifecycle service
//!
//! Orchestrates submission, the approve/reject state machine, and
//! conversion to policy. Submission resolves the program and region
//! through the catalog directories, prices the application, and persists
//! it in status `NEW`. Conversion issues the policy first and only then
//! persists the application's terminal status, so a failed issuance
//! leaves the application record unchanged.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;
use validator::Validate;

use core_kernel::{ApplicationId, Clock, CorporateApplicationId};
use domain_catalog::{ProgramDirectory, RegionDirectory};
use domain_party::CorporateClientDirectory;
use domain_policy::{
    CorporatePolicyRequest, IndividualPolicyRequest, Policy, PolicyIssuer,
};
use domain_pricing::{CorporateRiskProfile, IndividualRiskProfile, PremiumCalculator};

use crate::corporate::CorporateApplication;
use crate::error::ApplicationError;
use crate::individual::IndividualApplication;
use crate::ports::{CorporateApplicationStore, IndividualApplicationStore};
use crate::requests::{CorporateSubmission, IndividualSubmission};
use crate::status::ApplicationStatus;

/// Drives applications from submission to an issued policy.
pub struct ApplicationLifecycle {
    programs: Arc<dyn ProgramDirectory>,
    regions: Arc<dyn RegionDirectory>,
    organizations: Arc<dyn CorporateClientDirectory>,
    individual_applications: Arc<dyn IndividualApplicationStore>,
    corporate_applications: Arc<dyn CorporateApplicationStore>,
    calculator: PremiumCalculator,
    issuer: Arc<PolicyIssuer>,
}

impl ApplicationLifecycle {
    pub fn new(
        programs: Arc<dyn ProgramDirectory>,
        regions: Arc<dyn RegionDirectory>,
        organizations: Arc<dyn CorporateClientDirectory>,
        individual_applications: Arc<dyn IndividualApplicationStore>,
        corporate_applications: Arc<dyn CorporateApplicationStore>,
        issuer: Arc<PolicyIssuer>,
    ) -> Self {
        Self {
            programs,
            regions,
            organizations,
            individual_applications,
            corporate_applications,
            calculator: PremiumCalculator::new(),
            issuer,
        }
    }

    /// Prices and persists a new individual application in status `NEW`.
    pub async fn submit_individual(
        &self,
        submission: IndividualSubmission,
        clock: &dyn Clock,
    ) -> Result<IndividualApplication, ApplicationError> {
        submission.validate()?;

        let program = self.programs.get_by_id(submission.program_id).await?;
        let region = match submission.region_id {
            Some(id) => Some(self.regions.get_by_id(id).await?),
            None => None,
        };

        let profile = IndividualRiskProfile {
            birth_date: submission.birth_date,
            chronic_diseases: submission.chronic_diseases,
            insured_persons: submission.insured_persons,
        };
        let quote =
            self.calculator
                .rate_individual(&program, &profile, region.as_ref(), clock.today());

        let application = IndividualApplication::from_quote(
            program.id,
            submission.region_id,
            submission.applicant_name,
            submission.email,
            submission.phone,
            submission.birth_date,
            submission.chronic_diseases,
            submission.insured_persons,
            &quote,
            clock.now(),
        );
        self.individual_applications.insert(&application).await?;

        info!(
            application = %application.id,
            program = %program.id,
            premium = %application.calculated_premium,
            "submitted individual application"
        );
        Ok(application)
    }

    /// Prices and persists a new corporate application in status `NEW`.
    pub async fn submit_corporate(
        &self,
        submission: CorporateSubmission,
        clock: &dyn Clock,
    ) -> Result<CorporateApplication, ApplicationError> {
        submission.validate()?;

        let program = self.programs.get_by_id(submission.program_id).await?;
        let service_region = self.regions.get_by_id(submission.service_region_id).await?;
        // The organization must exist before pricing work is done.
        self.organizations
            .get_by_id(submission.corporate_client_id)
            .await?;

        let profile = CorporateRiskProfile {
            average_age: submission.average_age,
            age_band: submission.age_band.clone(),
            headcount: submission.headcount,
        };
        let quote =
            self.calculator
                .rate_corporate(&program, &profile, &service_region, clock.today())?;

        let application = CorporateApplication::from_quote(
            submission.corporate_client_id,
            program.id,
            service_region.id,
            submission.headcount,
            submission.average_age,
            submission.age_band,
            &quote,
            clock.now(),
        );
        self.corporate_applications.insert(&application).await?;

        info!(
            application = %application.id,
            program = %program.id,
            headcount = application.headcount,
            premium = %application.calculated_premium,
            "submitted corporate application"
        );
        Ok(application)
    }

    /// Approves an individual application.
    pub async fn approve_individual(
        &self,
        id: ApplicationId,
        comment: Option<&str>,
        clock: &dyn Clock,
    ) -> Result<IndividualApplication, ApplicationError> {
        let mut application = self.individual_applications.get(id).await?;
        application.approve(comment, clock.now())?;
        self.individual_applications.update(&application).await?;
        info!(application = %id, "approved individual application");
        Ok(application)
    }

    /// Rejects an individual application.
    pub async fn reject_individual(
        &self,
        id: ApplicationId,
        comment: Option<&str>,
        clock: &dyn Clock,
    ) -> Result<IndividualApplication, ApplicationError> {
        let mut application = self.individual_applications.get(id).await?;
        application.reject(comment, clock.now())?;
        self.individual_applications.update(&application).await?;
        info!(application = %id, "rejected individual application");
        Ok(application)
    }

    /// Approves a corporate application.
    pub async fn approve_corporate(
        &self,
        id: CorporateApplicationId,
        comment: Option<&str>,
        clock: &dyn Clock,
    ) -> Result<CorporateApplication, ApplicationError> {
        let mut application = self.corporate_applications.get(id).await?;
        application.approve(comment, clock.now())?;
        self.corporate_applications.update(&application).await?;
        info!(application = %id, "approved corporate application");
        Ok(application)
    }

    /// Rejects a corporate application.
    pub async fn reject_corporate(
        &self,
        id: CorporateApplicationId,
        comment: Option<&str>,
        clock: &dyn Clock,
    ) -> Result<CorporateApplication, ApplicationError> {
        let mut application = self.corporate_applications.get(id).await?;
        application.reject(comment, clock.now())?;
        self.corporate_applications.update(&application).await?;
        info!(application = %id, "rejected corporate application");
        Ok(application)
    }

    /// Converts an individual application into an issued policy.
    ///
    /// A `NEW` application is approved on the way; conversion implies
    /// manager approval. Fails without issuing anything when the
    /// application is rejected, already converted, or its calculated
    /// premium is not positive.
    pub async fn convert_individual(
        &self,
        id: ApplicationId,
        clock: &dyn Clock,
    ) -> Result<(IndividualApplication, Policy), ApplicationError> {
        let mut application = self.individual_applications.get(id).await?;
        if !application.status.can_convert() {
            return Err(ApplicationError::invalid_state(format!(
                "cannot convert an application in status {:?}",
                application.status
            )));
        }
        if application.calculated_premium <= Decimal::ZERO {
            return Err(ApplicationError::invalid_state(format!(
                "calculated premium {} is not positive",
                application.calculated_premium
            )));
        }

        if application.status == ApplicationStatus::New {
            application.approve(None, clock.now())?;
        }

        let policy = self
            .issuer
            .issue_individual(
                IndividualPolicyRequest {
                    application_id: application.id,
                    program_id: application.program_id,
                    applicant_name: application.applicant_name.clone(),
                    email: application.email.clone(),
                    phone: application.phone.clone(),
                    premium: application.calculated_premium,
                },
                clock,
            )
            .await?;

        application.mark_converted(clock.now())?;
        self.individual_applications.update(&application).await?;

        info!(
            application = %application.id,
            policy = %policy.id,
            "converted individual application to policy"
        );
        Ok((application, policy))
    }

    /// Converts a corporate application into an issued policy.
    ///
    /// The premium floor for fully-discounted contracts is applied at
    /// issuance, so conversion never fails on a zero premium.
    pub async fn convert_corporate(
        &self,
        id: CorporateApplicationId,
        clock: &dyn Clock,
    ) -> Result<(CorporateApplication, Policy), ApplicationError> {
        let mut application = self.corporate_applications.get(id).await?;
        if !application.status.can_convert() {
            return Err(ApplicationError::invalid_state(format!(
                "cannot convert an application in status {:?}",
                application.status
            )));
        }

        let organization = self
            .organizations
            .get_by_id(application.corporate_client_id)
            .await?;

        if application.status == ApplicationStatus::New {
            application.approve(None, clock.now())?;
        }

        let policy = self
            .issuer
            .issue_corporate(
                CorporatePolicyRequest {
                    application_id: application.id,
                    program_id: application.program_id,
                    organization,
                    premium: application.calculated_premium,
                },
                clock,
            )
            .await?;

        application.mark_converted(policy.id, clock.now())?;
        self.corporate_applications.update(&application).await?;

        info!(
            application = %application.id,
            policy = %policy.id,
            "converted corporate application to policy"
        );
        Ok((application, policy))
    }
}
