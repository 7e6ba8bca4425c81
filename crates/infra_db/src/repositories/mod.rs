//! Repository implementations of the domain store ports
//!
//! One repository per port, each a thin adapter between a domain trait
//! and the PostgreSQL schema. Rows are mapped with `FromRow` structs and
//! converted into domain types at the boundary; enumerated columns are
//! stored as their wire strings.

mod catalog;
mod clients;
mod policies;
mod applications;

pub use catalog::{PgProgramDirectory, PgRegionDirectory};
pub use clients::{PgClientStore, PgCorporateClientDirectory};
pub use policies::PgPolicyStore;
pub use applications::{PgCorporateApplicationStore, PgIndividualApplicationStore};

use core_kernel::PortError;

use crate::error::DatabaseError;

/// Translates a SQLx failure into the domain's port error taxonomy.
pub(crate) fn map_sqlx(error: sqlx::Error) -> PortError {
    PortError::from(DatabaseError::from(error))
}
