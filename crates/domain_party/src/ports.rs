//! Party Domain Ports
//!
//! The [`ClientStore`] trait is the registry's view of client persistence.
//! The production adapter lives in `infra_db`; the `mock` module provides an
//! in-memory adapter for tests. Lookup order matters for deduplication:
//! "first by email" and "first by name" must return the earliest-created
//! match so repeated issuance converges on one record.

use async_trait::async_trait;

use core_kernel::{ClientId, CorporateClientId, DomainPort, PortError};

use crate::client::{Client, CorporateClient};

/// Persistence port for billing clients.
#[async_trait]
pub trait ClientStore: DomainPort {
    /// Retrieves a client by id, or `PortError::NotFound`.
    async fn get(&self, id: ClientId) -> Result<Client, PortError>;

    /// Finds the earliest-created client with the given email.
    async fn find_first_by_email(&self, email: &str) -> Result<Option<Client>, PortError>;

    /// Finds the earliest-created client with the given full name.
    async fn find_first_by_name(&self, name: &str) -> Result<Option<Client>, PortError>;

    /// Persists a new client.
    async fn insert(&self, client: &Client) -> Result<(), PortError>;
}

/// Read-side port for organization records referenced by corporate
/// applications. Organizations are reference data maintained elsewhere.
#[async_trait]
pub trait CorporateClientDirectory: DomainPort {
    /// Retrieves an organization by id, or `PortError::NotFound`.
    async fn get_by_id(&self, id: CorporateClientId) -> Result<CorporateClient, PortError>;
}

/// In-memory client store for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory implementation of [`ClientStore`].
    ///
    /// Keeps insertion order so "first by" lookups behave like the
    /// id-ordered queries of the production adapter.
    #[derive(Debug, Default)]
    pub struct MockClientStore {
        clients: Arc<RwLock<Vec<Client>>>,
    }

    impl MockClientStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of stored clients.
        pub async fn len(&self) -> usize {
            self.clients.read().await.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.clients.read().await.is_empty()
        }
    }

    impl DomainPort for MockClientStore {}

    #[async_trait]
    impl ClientStore for MockClientStore {
        async fn get(&self, id: ClientId) -> Result<Client, PortError> {
            self.clients
                .read()
                .await
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Client", id))
        }

        async fn find_first_by_email(&self, email: &str) -> Result<Option<Client>, PortError> {
            Ok(self
                .clients
                .read()
                .await
                .iter()
                .find(|c| c.email.as_deref() == Some(email))
                .cloned())
        }

        async fn find_first_by_name(&self, name: &str) -> Result<Option<Client>, PortError> {
            Ok(self
                .clients
                .read()
                .await
                .iter()
                .find(|c| c.full_name == name)
                .cloned())
        }

        async fn insert(&self, client: &Client) -> Result<(), PortError> {
            self.clients.write().await.push(client.clone());
            Ok(())
        }
    }

    /// In-memory implementation of [`CorporateClientDirectory`].
    #[derive(Debug, Default)]
    pub struct MockCorporateClientDirectory {
        organizations: Arc<RwLock<std::collections::HashMap<CorporateClientId, CorporateClient>>>,
    }

    impl MockCorporateClientDirectory {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn insert(&self, organization: CorporateClient) {
            self.organizations
                .write()
                .await
                .insert(organization.id, organization);
        }

        pub async fn with_organizations(organizations: Vec<CorporateClient>) -> Self {
            let directory = Self::new();
            for organization in organizations {
                directory.insert(organization).await;
            }
            directory
        }
    }

    impl DomainPort for MockCorporateClientDirectory {}

    #[async_trait]
    impl CorporateClientDirectory for MockCorporateClientDirectory {
        async fn get_by_id(&self, id: CorporateClientId) -> Result<CorporateClient, PortError> {
            self.organizations
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("CorporateClient", id))
        }
    }
}
