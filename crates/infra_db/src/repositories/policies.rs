//! Policy store adapter
//!
//! The unique index on `policies.policy_number` is the authority on
//! number uniqueness; a duplicate insert comes back as
//! `PortError::Conflict` and drives the issuer's retry loop.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use core_kernel::{ClientId, DomainPort, PolicyId, PortError};
use domain_policy::{Policy, PolicyStatus, PolicyStore};

use crate::pool::DatabasePool;
use crate::repositories::map_sqlx;

#[derive(Debug, FromRow)]
struct PolicyRow {
    id: Uuid,
    policy_number: String,
    client_id: Uuid,
    program_id: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
    premium: Decimal,
    status: String,
    application_id: Option<Uuid>,
}

impl PolicyRow {
    fn into_domain(self) -> Result<Policy, PortError> {
        let status = match self.status.as_str() {
            "ACTIVE" => PolicyStatus::Active,
            "EXPIRED" => PolicyStatus::Expired,
            "CANCELLED" => PolicyStatus::Cancelled,
            other => {
                return Err(PortError::internal(format!(
                    "unknown policy status '{}'",
                    other
                )))
            }
        };
        Ok(Policy {
            id: self.id.into(),
            policy_number: self.policy_number,
            client_id: self.client_id.into(),
            program_id: self.program_id.into(),
            start_date: self.start_date,
            end_date: self.end_date,
            premium: self.premium,
            status,
            application_id: self.application_id.map(Into::into),
        })
    }
}

fn status_str(status: PolicyStatus) -> &'static str {
    match status {
        PolicyStatus::Active => "ACTIVE",
        PolicyStatus::Expired => "EXPIRED",
        PolicyStatus::Cancelled => "CANCELLED",
    }
}

const SELECT_POLICY: &str = "SELECT id, policy_number, client_id, program_id, start_date, \
     end_date, premium, status, application_id FROM policies";

/// PostgreSQL-backed implementation of [`PolicyStore`].
#[derive(Debug, Clone)]
pub struct PgPolicyStore {
    pool: DatabasePool,
}

impl PgPolicyStore {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PgPolicyStore {}

#[async_trait]
impl PolicyStore for PgPolicyStore {
    async fn get(&self, id: PolicyId) -> Result<Policy, PortError> {
        let row: PolicyRow = sqlx::query_as(&format!("{} WHERE id = $1", SELECT_POLICY))
            .bind(Uuid::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| PortError::not_found("Policy", id))?;

        row.into_domain()
    }

    async fn find_by_number(&self, policy_number: &str) -> Result<Option<Policy>, PortError> {
        let row: Option<PolicyRow> =
            sqlx::query_as(&format!("{} WHERE policy_number = $1", SELECT_POLICY))
                .bind(policy_number)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?;

        row.map(PolicyRow::into_domain).transpose()
    }

    async fn find_by_client(&self, client_id: ClientId) -> Result<Vec<Policy>, PortError> {
        let rows: Vec<PolicyRow> = sqlx::query_as(&format!(
            "{} WHERE client_id = $1 ORDER BY start_date, id",
            SELECT_POLICY
        ))
        .bind(Uuid::from(client_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(PolicyRow::into_domain).collect()
    }

    async fn count(&self) -> Result<u64, PortError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM policies")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(count as u64)
    }

    async fn insert(&self, policy: &Policy) -> Result<(), PortError> {
        sqlx::query(
            "INSERT INTO policies (id, policy_number, client_id, program_id, start_date, \
             end_date, premium, status, application_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(Uuid::from(policy.id))
        .bind(&policy.policy_number)
        .bind(Uuid::from(policy.client_id))
        .bind(Uuid::from(policy.program_id))
        .bind(policy.start_date)
        .bind(policy.end_date)
        .bind(policy.premium)
        .bind(status_str(policy.status))
        .bind(policy.application_id.map(Uuid::from))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn is_number_taken(&self, policy_number: &str) -> Result<bool, PortError> {
        let (taken,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM policies WHERE policy_number = $1)")
                .bind(policy_number)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;
        Ok(taken)
    }
}
