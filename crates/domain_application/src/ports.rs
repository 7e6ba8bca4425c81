//! Application Domain Ports
//!
//! Persistence ports for both application kinds. Lifecycle transitions
//! are read-modify-write: `get`, mutate the entity, `update`. The
//! production adapters live in `infra_db`; the `mock` module provides
//! in-memory adapters for tests.

use async_trait::async_trait;

use core_kernel::{ApplicationId, CorporateApplicationId, CorporateClientId, DomainPort, PortError};

use crate::corporate::CorporateApplication;
use crate::individual::IndividualApplication;

/// Persistence port for individual applications.
#[async_trait]
pub trait IndividualApplicationStore: DomainPort {
    /// Retrieves an application by id, or `PortError::NotFound`.
    async fn get(&self, id: ApplicationId) -> Result<IndividualApplication, PortError>;

    /// Persists a new application.
    async fn insert(&self, application: &IndividualApplication) -> Result<(), PortError>;

    /// Persists a status transition.
    async fn update(&self, application: &IndividualApplication) -> Result<(), PortError>;
}

/// Persistence port for corporate applications.
#[async_trait]
pub trait CorporateApplicationStore: DomainPort {
    /// Retrieves an application by id, or `PortError::NotFound`.
    async fn get(&self, id: CorporateApplicationId) -> Result<CorporateApplication, PortError>;

    /// All applications submitted by the given organization.
    async fn find_by_client(
        &self,
        corporate_client_id: CorporateClientId,
    ) -> Result<Vec<CorporateApplication>, PortError>;

    /// Persists a new application.
    async fn insert(&self, application: &CorporateApplication) -> Result<(), PortError>;

    /// Persists a status transition.
    async fn update(&self, application: &CorporateApplication) -> Result<(), PortError>;
}

/// In-memory application stores for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory implementation of [`IndividualApplicationStore`].
    #[derive(Debug, Default)]
    pub struct MockIndividualApplicationStore {
        applications: Arc<RwLock<HashMap<ApplicationId, IndividualApplication>>>,
    }

    impl MockIndividualApplicationStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn len(&self) -> usize {
            self.applications.read().await.len()
        }
    }

    impl DomainPort for MockIndividualApplicationStore {}

    #[async_trait]
    impl IndividualApplicationStore for MockIndividualApplicationStore {
        async fn get(&self, id: ApplicationId) -> Result<IndividualApplication, PortError> {
            self.applications
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("IndividualApplication", id))
        }

        async fn insert(&self, application: &IndividualApplication) -> Result<(), PortError> {
            self.applications
                .write()
                .await
                .insert(application.id, application.clone());
            Ok(())
        }

        async fn update(&self, application: &IndividualApplication) -> Result<(), PortError> {
            let mut applications = self.applications.write().await;
            if !applications.contains_key(&application.id) {
                return Err(PortError::not_found("IndividualApplication", application.id));
            }
            applications.insert(application.id, application.clone());
            Ok(())
        }
    }

    /// In-memory implementation of [`CorporateApplicationStore`].
    #[derive(Debug, Default)]
    pub struct MockCorporateApplicationStore {
        applications: Arc<RwLock<HashMap<CorporateApplicationId, CorporateApplication>>>,
    }

    impl MockCorporateApplicationStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn len(&self) -> usize {
            self.applications.read().await.len()
        }
    }

    impl DomainPort for MockCorporateApplicationStore {}

    #[async_trait]
    impl CorporateApplicationStore for MockCorporateApplicationStore {
        async fn get(
            &self,
            id: CorporateApplicationId,
        ) -> Result<CorporateApplication, PortError> {
            self.applications
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("CorporateApplication", id))
        }

        async fn find_by_client(
            &self,
            corporate_client_id: CorporateClientId,
        ) -> Result<Vec<CorporateApplication>, PortError> {
            Ok(self
                .applications
                .read()
                .await
                .values()
                .filter(|a| a.corporate_client_id == corporate_client_id)
                .cloned()
                .collect())
        }

        async fn insert(&self, application: &CorporateApplication) -> Result<(), PortError> {
            self.applications
                .write()
                .await
                .insert(application.id, application.clone());
            Ok(())
        }

        async fn update(&self, application: &CorporateApplication) -> Result<(), PortError> {
            let mut applications = self.applications.write().await;
            if !applications.contains_key(&application.id) {
                return Err(PortError::not_found("CorporateApplication", application.id));
            }
            applications.insert(application.id, application.clone());
            Ok(())
        }
    }
}
