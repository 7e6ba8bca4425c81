//! Client store adapters
//!
//! `PgClientStore` backs the deduplicating client registry: the
//! "first by" lookups order by id ascending so repeated issuance
//! converges on the earliest-created record. `PgCorporateClientDirectory`
//! is the read side for organization reference data.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use core_kernel::{ClientId, CorporateClientId, DomainPort, PortError};
use domain_party::{Client, ClientStore, ClientType, CorporateClient, CorporateClientDirectory};

use crate::pool::DatabasePool;
use crate::repositories::map_sqlx;

#[derive(Debug, FromRow)]
struct ClientRow {
    id: Uuid,
    full_name: String,
    email: Option<String>,
    phone: Option<String>,
    client_type: String,
    created_at: DateTime<Utc>,
}

impl ClientRow {
    fn into_domain(self) -> Result<Client, PortError> {
        let client_type = match self.client_type.as_str() {
            "INDIVIDUAL" => ClientType::Individual,
            "CORPORATE" => ClientType::Corporate,
            other => {
                return Err(PortError::internal(format!(
                    "unknown client type '{}'",
                    other
                )))
            }
        };
        Ok(Client {
            id: self.id.into(),
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            client_type,
            created_at: self.created_at,
        })
    }
}

fn client_type_str(client_type: ClientType) -> &'static str {
    match client_type {
        ClientType::Individual => "INDIVIDUAL",
        ClientType::Corporate => "CORPORATE",
    }
}

#[derive(Debug, FromRow)]
struct CorporateClientRow {
    id: Uuid,
    name: String,
    contact_email: Option<String>,
    contact_phone: Option<String>,
    registration_number: Option<String>,
}

/// PostgreSQL-backed implementation of [`ClientStore`].
#[derive(Debug, Clone)]
pub struct PgClientStore {
    pool: DatabasePool,
}

impl PgClientStore {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PgClientStore {}

#[async_trait]
impl ClientStore for PgClientStore {
    async fn get(&self, id: ClientId) -> Result<Client, PortError> {
        let row: ClientRow = sqlx::query_as(
            "SELECT id, full_name, email, phone, client_type, created_at \
             FROM clients WHERE id = $1",
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| PortError::not_found("Client", id))?;

        row.into_domain()
    }

    async fn find_first_by_email(&self, email: &str) -> Result<Option<Client>, PortError> {
        let row: Option<ClientRow> = sqlx::query_as(
            "SELECT id, full_name, email, phone, client_type, created_at \
             FROM clients WHERE email = $1 ORDER BY id ASC LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ClientRow::into_domain).transpose()
    }

    async fn find_first_by_name(&self, name: &str) -> Result<Option<Client>, PortError> {
        let row: Option<ClientRow> = sqlx::query_as(
            "SELECT id, full_name, email, phone, client_type, created_at \
             FROM clients WHERE full_name = $1 ORDER BY id ASC LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ClientRow::into_domain).transpose()
    }

    async fn insert(&self, client: &Client) -> Result<(), PortError> {
        sqlx::query(
            "INSERT INTO clients (id, full_name, email, phone, client_type, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(Uuid::from(client.id))
        .bind(&client.full_name)
        .bind(&client.email)
        .bind(&client.phone)
        .bind(client_type_str(client.client_type))
        .bind(client.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }
}

/// PostgreSQL-backed implementation of [`CorporateClientDirectory`].
#[derive(Debug, Clone)]
pub struct PgCorporateClientDirectory {
    pool: DatabasePool,
}

impl PgCorporateClientDirectory {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PgCorporateClientDirectory {}

#[async_trait]
impl CorporateClientDirectory for PgCorporateClientDirectory {
    async fn get_by_id(&self, id: CorporateClientId) -> Result<CorporateClient, PortError> {
        let row: CorporateClientRow = sqlx::query_as(
            "SELECT id, name, contact_email, contact_phone, registration_number \
             FROM corporate_clients WHERE id = $1",
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| PortError::not_found("CorporateClient", id))?;

        Ok(CorporateClient {
            id: row.id.into(),
            name: row.name,
            contact_email: row.contact_email,
            contact_phone: row.contact_phone,
            registration_number: row.registration_number,
        })
    }
}
