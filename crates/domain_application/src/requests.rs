//! Submission request types
//!
//! Deserialized from the interface layer and validated before any
//! directory lookup or pricing happens.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use core_kernel::{CorporateClientId, ProgramId, RegionId};

/// Submission payload for an individual application.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IndividualSubmission {
    pub program_id: ProgramId,
    pub region_id: Option<RegionId>,
    #[validate(length(min = 1, message = "applicant name must not be empty"))]
    pub applicant_name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub chronic_diseases: bool,
    #[serde(default = "default_insured_persons")]
    #[validate(range(min = 1, message = "at least one insured person is required"))]
    pub insured_persons: u32,
}

fn default_insured_persons() -> u32 {
    1
}

/// Submission payload for a corporate application.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CorporateSubmission {
    pub corporate_client_id: CorporateClientId,
    pub program_id: ProgramId,
    pub service_region_id: RegionId,
    #[validate(range(min = 1, message = "headcount must be greater than 0"))]
    pub headcount: u32,
    #[validate(range(min = 14, max = 100, message = "average age out of range"))]
    pub average_age: Option<u32>,
    pub age_band: Option<String>,
}
