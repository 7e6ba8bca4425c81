//! Policy Domain Ports
//!
//! [`PolicyStore`] is the issuer's view of policy persistence. The
//! production adapter enforces policy-number uniqueness with a database
//! constraint and reports collisions as `PortError::Conflict`; the mock
//! adapter mirrors that contract so retry behavior can be tested in memory.

use async_trait::async_trait;

use core_kernel::{ClientId, DomainPort, PolicyId, PortError};

use crate::policy::Policy;

/// Persistence port for issued policies.
#[async_trait]
pub trait PolicyStore: DomainPort {
    /// Retrieves a policy by id, or `PortError::NotFound`.
    async fn get(&self, id: PolicyId) -> Result<Policy, PortError>;

    /// Finds a policy by its unique number.
    async fn find_by_number(&self, policy_number: &str) -> Result<Option<Policy>, PortError>;

    /// All policies issued to the given client.
    async fn find_by_client(&self, client_id: ClientId) -> Result<Vec<Policy>, PortError>;

    /// Total number of issued policies. Seeds corporate number allocation.
    async fn count(&self) -> Result<u64, PortError>;

    /// Persists a new policy. Returns `PortError::Conflict` when the
    /// policy number is already taken.
    async fn insert(&self, policy: &Policy) -> Result<(), PortError>;

    /// Whether a policy number is already in use.
    async fn is_number_taken(&self, policy_number: &str) -> Result<bool, PortError> {
        Ok(self.find_by_number(policy_number).await?.is_some())
    }
}

/// In-memory policy store for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory implementation of [`PolicyStore`] with the same
    /// number-uniqueness contract as the production adapter.
    #[derive(Debug, Default)]
    pub struct MockPolicyStore {
        policies: Arc<RwLock<Vec<Policy>>>,
    }

    impl MockPolicyStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn len(&self) -> usize {
            self.policies.read().await.len()
        }

        /// Seeds a policy directly, bypassing the uniqueness check.
        pub async fn seed(&self, policy: Policy) {
            self.policies.write().await.push(policy);
        }
    }

    impl DomainPort for MockPolicyStore {}

    #[async_trait]
    impl PolicyStore for MockPolicyStore {
        async fn get(&self, id: PolicyId) -> Result<Policy, PortError> {
            self.policies
                .read()
                .await
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Policy", id))
        }

        async fn find_by_number(&self, policy_number: &str) -> Result<Option<Policy>, PortError> {
            Ok(self
                .policies
                .read()
                .await
                .iter()
                .find(|p| p.policy_number == policy_number)
                .cloned())
        }

        async fn find_by_client(&self, client_id: ClientId) -> Result<Vec<Policy>, PortError> {
            Ok(self
                .policies
                .read()
                .await
                .iter()
                .filter(|p| p.client_id == client_id)
                .cloned()
                .collect())
        }

        async fn count(&self) -> Result<u64, PortError> {
            Ok(self.policies.read().await.len() as u64)
        }

        async fn insert(&self, policy: &Policy) -> Result<(), PortError> {
            let mut policies = self.policies.write().await;
            if policies
                .iter()
                .any(|p| p.policy_number == policy.policy_number)
            {
                return Err(PortError::conflict(format!(
                    "policy number {} already exists",
                    policy.policy_number
                )));
            }
            policies.push(policy.clone());
            Ok(())
        }
    }
}
