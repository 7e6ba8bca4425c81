//! Catalog directory adapters
//!
//! Read-side adapters for programs and regions. A program is loaded with
//! its owned promo offers and applicable region ids in separate queries;
//! the program side of the association is authoritative.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use core_kernel::{DomainPort, PortError, ProgramId, RegionId};
use domain_catalog::{DiscountType, Program, ProgramDirectory, PromoOffer, Region, RegionDirectory};

use crate::pool::DatabasePool;
use crate::repositories::map_sqlx;

#[derive(Debug, FromRow)]
struct ProgramRow {
    id: Uuid,
    name: String,
    base_price: Option<Decimal>,
}

#[derive(Debug, FromRow)]
struct PromoOfferRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    discount_type: String,
    discount_amount: Decimal,
    valid_from: Option<NaiveDate>,
    valid_to: Option<NaiveDate>,
    active: bool,
}

impl PromoOfferRow {
    fn into_domain(self) -> Result<PromoOffer, PortError> {
        let discount_type = match self.discount_type.as_str() {
            "PERCENT" => DiscountType::Percent,
            "FIXED" => DiscountType::Fixed,
            other => {
                return Err(PortError::internal(format!(
                    "unknown discount type '{}'",
                    other
                )))
            }
        };
        Ok(PromoOffer {
            id: self.id.into(),
            name: self.name,
            description: self.description,
            discount_type,
            discount_amount: self.discount_amount,
            valid_from: self.valid_from,
            valid_to: self.valid_to,
            active: self.active,
        })
    }
}

#[derive(Debug, FromRow)]
struct RegionRow {
    id: Uuid,
    name: String,
    coefficient: Decimal,
}

/// PostgreSQL-backed implementation of [`ProgramDirectory`].
#[derive(Debug, Clone)]
pub struct PgProgramDirectory {
    pool: DatabasePool,
}

impl PgProgramDirectory {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PgProgramDirectory {}

#[async_trait]
impl ProgramDirectory for PgProgramDirectory {
    async fn get_by_id(&self, id: ProgramId) -> Result<Program, PortError> {
        let row: ProgramRow =
            sqlx::query_as("SELECT id, name, base_price FROM programs WHERE id = $1")
                .bind(Uuid::from(id))
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?
                .ok_or_else(|| PortError::not_found("Program", id))?;

        let offer_rows: Vec<PromoOfferRow> = sqlx::query_as(
            r#"
            SELECT o.id, o.name, o.description, o.discount_type, o.discount_amount,
                   o.valid_from, o.valid_to, o.active
            FROM promo_offers o
            JOIN program_promo_offers ppo ON ppo.promo_offer_id = o.id
            WHERE ppo.program_id = $1
            ORDER BY o.id
            "#,
        )
        .bind(Uuid::from(id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let region_ids: Vec<(Uuid,)> =
            sqlx::query_as("SELECT region_id FROM program_regions WHERE program_id = $1")
                .bind(Uuid::from(id))
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx)?;

        let promo_offers = offer_rows
            .into_iter()
            .map(PromoOfferRow::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Program {
            id: row.id.into(),
            name: row.name,
            base_price: row.base_price,
            promo_offers,
            region_ids: region_ids
                .into_iter()
                .map(|(region_id,)| RegionId::from(region_id))
                .collect(),
        })
    }
}

/// PostgreSQL-backed implementation of [`RegionDirectory`].
#[derive(Debug, Clone)]
pub struct PgRegionDirectory {
    pool: DatabasePool,
}

impl PgRegionDirectory {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PgRegionDirectory {}

#[async_trait]
impl RegionDirectory for PgRegionDirectory {
    async fn get_by_id(&self, id: RegionId) -> Result<Region, PortError> {
        let row: RegionRow =
            sqlx::query_as("SELECT id, name, coefficient FROM regions WHERE id = $1")
                .bind(Uuid::from(id))
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?
                .ok_or_else(|| PortError::not_found("Region", id))?;

        Ok(Region {
            id: row.id.into(),
            name: row.name,
            coefficient: row.coefficient,
        })
    }
}
