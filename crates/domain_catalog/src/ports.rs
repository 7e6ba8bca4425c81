//! Catalog Directory Ports
//!
//! The pricing and lifecycle services read programs and regions through
//! these directory traits. The production adapter lives in `infra_db`; the
//! `mock` module provides in-memory adapters for tests.

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError, ProgramId, RegionId};

use crate::program::Program;
use crate::region::Region;

/// Read access to insurance programs, including their promo offers.
#[async_trait]
pub trait ProgramDirectory: DomainPort {
    /// Retrieves a program by id, or `PortError::NotFound`.
    async fn get_by_id(&self, id: ProgramId) -> Result<Program, PortError>;
}

/// Read access to service regions.
#[async_trait]
pub trait RegionDirectory: DomainPort {
    /// Retrieves a region by id, or `PortError::NotFound`.
    async fn get_by_id(&self, id: RegionId) -> Result<Region, PortError>;
}

/// In-memory directory adapters for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory implementation of [`ProgramDirectory`].
    #[derive(Debug, Default)]
    pub struct MockProgramDirectory {
        programs: Arc<RwLock<HashMap<ProgramId, Program>>>,
    }

    impl MockProgramDirectory {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the directory for testing.
        pub async fn with_programs(programs: Vec<Program>) -> Self {
            let dir = Self::new();
            for program in programs {
                dir.programs.write().await.insert(program.id, program);
            }
            dir
        }

        pub async fn insert(&self, program: Program) {
            self.programs.write().await.insert(program.id, program);
        }
    }

    impl DomainPort for MockProgramDirectory {}

    #[async_trait]
    impl ProgramDirectory for MockProgramDirectory {
        async fn get_by_id(&self, id: ProgramId) -> Result<Program, PortError> {
            self.programs
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Program", id))
        }
    }

    /// In-memory implementation of [`RegionDirectory`].
    #[derive(Debug, Default)]
    pub struct MockRegionDirectory {
        regions: Arc<RwLock<HashMap<RegionId, Region>>>,
    }

    impl MockRegionDirectory {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the directory for testing.
        pub async fn with_regions(regions: Vec<Region>) -> Self {
            let dir = Self::new();
            for region in regions {
                dir.regions.write().await.insert(region.id, region);
            }
            dir
        }

        pub async fn insert(&self, region: Region) {
            self.regions.write().await.insert(region.id, region);
        }
    }

    impl DomainPort for MockRegionDirectory {}

    #[async_trait]
    impl RegionDirectory for MockRegionDirectory {
        async fn get_by_id(&self, id: RegionId) -> Result<Region, PortError> {
            self.regions
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Region", id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{MockProgramDirectory, MockRegionDirectory};
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_mock_program_directory_get() {
        let program = Program::new("ДМС Стандарт", Some(dec!(15000.00)));
        let id = program.id;
        let dir = MockProgramDirectory::with_programs(vec![program]).await;

        let found = dir.get_by_id(id).await.unwrap();
        assert_eq!(found.name, "ДМС Стандарт");
    }

    #[tokio::test]
    async fn test_mock_directory_not_found() {
        let dir = MockRegionDirectory::new();
        let result = dir.get_by_id(RegionId::new_v7()).await;
        assert!(result.unwrap_err().is_not_found());
    }
}
