//! Application store adapters
//!
//! Lifecycle transitions are persisted with full-row updates; the state
//! checks happen in the domain before `update` is called.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use core_kernel::{
    ApplicationId, CorporateApplicationId, CorporateClientId, DomainPort, PortError,
};
use domain_application::{
    ApplicationStatus, CorporateApplication, CorporateApplicationStore, IndividualApplication,
    IndividualApplicationStore,
};

use crate::pool::DatabasePool;
use crate::repositories::map_sqlx;

fn status_str(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::New => "NEW",
        ApplicationStatus::Approved => "APPROVED",
        ApplicationStatus::Rejected => "REJECTED",
        ApplicationStatus::ConvertedToPolicy => "CONVERTED_TO_POLICY",
    }
}

fn status_from_str(status: &str) -> Result<ApplicationStatus, PortError> {
    match status {
        "NEW" => Ok(ApplicationStatus::New),
        "APPROVED" => Ok(ApplicationStatus::Approved),
        "REJECTED" => Ok(ApplicationStatus::Rejected),
        "CONVERTED_TO_POLICY" => Ok(ApplicationStatus::ConvertedToPolicy),
        other => Err(PortError::internal(format!(
            "unknown application status '{}'",
            other
        ))),
    }
}

#[derive(Debug, FromRow)]
struct IndividualApplicationRow {
    id: Uuid,
    program_id: Uuid,
    region_id: Option<Uuid>,
    applicant_name: String,
    email: Option<String>,
    phone: Option<String>,
    birth_date: Option<NaiveDate>,
    chronic_diseases: bool,
    insured_persons: i32,
    base_price_snapshot: Decimal,
    calculated_premium: Decimal,
    status: String,
    comment: Option<String>,
    created_at: DateTime<Utc>,
    processed_at: Option<DateTime<Utc>>,
}

impl IndividualApplicationRow {
    fn into_domain(self) -> Result<IndividualApplication, PortError> {
        Ok(IndividualApplication {
            id: self.id.into(),
            program_id: self.program_id.into(),
            region_id: self.region_id.map(Into::into),
            applicant_name: self.applicant_name,
            email: self.email,
            phone: self.phone,
            birth_date: self.birth_date,
            chronic_diseases: self.chronic_diseases,
            insured_persons: self.insured_persons as u32,
            base_price_snapshot: self.base_price_snapshot,
            calculated_premium: self.calculated_premium,
            status: status_from_str(&self.status)?,
            comment: self.comment,
            created_at: self.created_at,
            processed_at: self.processed_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CorporateApplicationRow {
    id: Uuid,
    corporate_client_id: Uuid,
    program_id: Uuid,
    service_region_id: Uuid,
    headcount: i32,
    average_age: Option<i32>,
    age_band: Option<String>,
    base_price_snapshot: Decimal,
    calculated_premium: Decimal,
    status: String,
    comment: Option<String>,
    created_at: DateTime<Utc>,
    processed_at: Option<DateTime<Utc>>,
    policy_id: Option<Uuid>,
}

impl CorporateApplicationRow {
    fn into_domain(self) -> Result<CorporateApplication, PortError> {
        Ok(CorporateApplication {
            id: self.id.into(),
            corporate_client_id: self.corporate_client_id.into(),
            program_id: self.program_id.into(),
            service_region_id: self.service_region_id.into(),
            headcount: self.headcount as u32,
            average_age: self.average_age.map(|age| age as u32),
            age_band: self.age_band,
            base_price_snapshot: self.base_price_snapshot,
            calculated_premium: self.calculated_premium,
            status: status_from_str(&self.status)?,
            comment: self.comment,
            created_at: self.created_at,
            processed_at: self.processed_at,
            policy_id: self.policy_id.map(Into::into),
        })
    }
}

const SELECT_INDIVIDUAL: &str = "SELECT id, program_id, region_id, applicant_name, email, phone, \
     birth_date, chronic_diseases, insured_persons, base_price_snapshot, calculated_premium, \
     status, comment, created_at, processed_at FROM individual_applications";

const SELECT_CORPORATE: &str = "SELECT id, corporate_client_id, program_id, service_region_id, \
     headcount, average_age, age_band, base_price_snapshot, calculated_premium, status, comment, \
     created_at, processed_at, policy_id FROM corporate_applications";

/// PostgreSQL-backed implementation of [`IndividualApplicationStore`].
#[derive(Debug, Clone)]
pub struct PgIndividualApplicationStore {
    pool: DatabasePool,
}

impl PgIndividualApplicationStore {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PgIndividualApplicationStore {}

#[async_trait]
impl IndividualApplicationStore for PgIndividualApplicationStore {
    async fn get(&self, id: ApplicationId) -> Result<IndividualApplication, PortError> {
        let row: IndividualApplicationRow =
            sqlx::query_as(&format!("{} WHERE id = $1", SELECT_INDIVIDUAL))
                .bind(Uuid::from(id))
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?
                .ok_or_else(|| PortError::not_found("IndividualApplication", id))?;

        row.into_domain()
    }

    async fn insert(&self, application: &IndividualApplication) -> Result<(), PortError> {
        sqlx::query(
            "INSERT INTO individual_applications (id, program_id, region_id, applicant_name, \
             email, phone, birth_date, chronic_diseases, insured_persons, base_price_snapshot, \
             calculated_premium, status, comment, created_at, processed_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)",
        )
        .bind(Uuid::from(application.id))
        .bind(Uuid::from(application.program_id))
        .bind(application.region_id.map(Uuid::from))
        .bind(&application.applicant_name)
        .bind(&application.email)
        .bind(&application.phone)
        .bind(application.birth_date)
        .bind(application.chronic_diseases)
        .bind(application.insured_persons as i32)
        .bind(application.base_price_snapshot)
        .bind(application.calculated_premium)
        .bind(status_str(application.status))
        .bind(&application.comment)
        .bind(application.created_at)
        .bind(application.processed_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn update(&self, application: &IndividualApplication) -> Result<(), PortError> {
        let result = sqlx::query(
            "UPDATE individual_applications \
             SET status = $2, comment = $3, processed_at = $4 \
             WHERE id = $1",
        )
        .bind(Uuid::from(application.id))
        .bind(status_str(application.status))
        .bind(&application.comment)
        .bind(application.processed_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("IndividualApplication", application.id));
        }
        Ok(())
    }
}

/// PostgreSQL-backed implementation of [`CorporateApplicationStore`].
#[derive(Debug, Clone)]
pub struct PgCorporateApplicationStore {
    pool: DatabasePool,
}

impl PgCorporateApplicationStore {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PgCorporateApplicationStore {}

#[async_trait]
impl CorporateApplicationStore for PgCorporateApplicationStore {
    async fn get(&self, id: CorporateApplicationId) -> Result<CorporateApplication, PortError> {
        let row: CorporateApplicationRow =
            sqlx::query_as(&format!("{} WHERE id = $1", SELECT_CORPORATE))
                .bind(Uuid::from(id))
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?
                .ok_or_else(|| PortError::not_found("CorporateApplication", id))?;

        row.into_domain()
    }

    async fn find_by_client(
        &self,
        corporate_client_id: CorporateClientId,
    ) -> Result<Vec<CorporateApplication>, PortError> {
        let rows: Vec<CorporateApplicationRow> = sqlx::query_as(&format!(
            "{} WHERE corporate_client_id = $1 ORDER BY created_at, id",
            SELECT_CORPORATE
        ))
        .bind(Uuid::from(corporate_client_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(CorporateApplicationRow::into_domain)
            .collect()
    }

    async fn insert(&self, application: &CorporateApplication) -> Result<(), PortError> {
        sqlx::query(
            "INSERT INTO corporate_applications (id, corporate_client_id, program_id, \
             service_region_id, headcount, average_age, age_band, base_price_snapshot, \
             calculated_premium, status, comment, created_at, processed_at, policy_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)",
        )
        .bind(Uuid::from(application.id))
        .bind(Uuid::from(application.corporate_client_id))
        .bind(Uuid::from(application.program_id))
        .bind(Uuid::from(application.service_region_id))
        .bind(application.headcount as i32)
        .bind(application.average_age.map(|age| age as i32))
        .bind(&application.age_band)
        .bind(application.base_price_snapshot)
        .bind(application.calculated_premium)
        .bind(status_str(application.status))
        .bind(&application.comment)
        .bind(application.created_at)
        .bind(application.processed_at)
        .bind(application.policy_id.map(Uuid::from))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn update(&self, application: &CorporateApplication) -> Result<(), PortError> {
        let result = sqlx::query(
            "UPDATE corporate_applications \
             SET status = $2, comment = $3, processed_at = $4, policy_id = $5 \
             WHERE id = $1",
        )
        .bind(Uuid::from(application.id))
        .bind(status_str(application.status))
        .bind(&application.comment)
        .bind(application.processed_at)
        .bind(application.policy_id.map(Uuid::from))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("CorporateApplication", application.id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            ApplicationStatus::New,
            ApplicationStatus::Approved,
            ApplicationStatus::Rejected,
            ApplicationStatus::ConvertedToPolicy,
        ] {
            assert_eq!(status_from_str(status_str(status)).unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_is_internal_error() {
        let err = status_from_str("PENDING").unwrap_err();
        assert!(err.to_string().contains("PENDING"));
    }
}
