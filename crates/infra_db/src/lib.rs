//! Infrastructure Database Layer
//!
//! PostgreSQL adapters for the domain store ports, built on SQLx. Each
//! repository implements one domain port (`ProgramDirectory`,
//! `ClientStore`, `PolicyStore`, the application stores) with runtime
//! queries against the schema in `migrations/`.
//!
//! Uniqueness is enforced by the database: the unique index on
//! `policies.policy_number` turns a duplicate insert into
//! `PortError::Conflict`, which the issuer uses to retry corporate
//! number allocation.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, run_migrations};
//! use infra_db::repositories::PgPolicyStore;
//!
//! let pool = create_pool(DatabaseConfig::from_env()?).await?;
//! run_migrations(&pool).await?;
//! let policies = PgPolicyStore::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;

pub use pool::{create_pool, create_pool_from_url, run_migrations, DatabaseConfig, DatabasePool};
pub use error::DatabaseError;
