//! Client registry
//!
//! Find-or-create resolution of billing clients at policy issuance. Lookup
//! is keyed on contact email first; the corporate path falls back to the
//! organization name before creating a fresh record. Blank emails never
//! participate in deduplication.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::client::{Client, CorporateClient};
use crate::error::PartyError;
use crate::ports::ClientStore;

/// Resolves or creates billing clients for policy issuance.
pub struct ClientRegistry {
    store: Arc<dyn ClientStore>,
}

impl ClientRegistry {
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self { store }
    }

    /// Finds the client for an individual applicant by email, creating one
    /// from the applicant's contact fields when no match exists.
    ///
    /// An applicant without an email always gets a fresh record; there is
    /// nothing to deduplicate on.
    pub async fn find_or_create_from_individual(
        &self,
        full_name: &str,
        email: Option<&str>,
        phone: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Client, PartyError> {
        if let Some(email) = non_blank(email) {
            if let Some(existing) = self.store.find_first_by_email(email).await? {
                info!(client = %existing.id, email, "reusing existing client");
                return Ok(existing);
            }
        }

        let client = Client::individual(
            full_name,
            non_blank(email).map(str::to_string),
            non_blank(phone).map(str::to_string),
            now,
        );
        self.store.insert(&client).await?;
        info!(client = %client.id, "created individual client");
        Ok(client)
    }

    /// Finds the client for an organization by contact email, falling back
    /// to the organization name, creating a corporate-tagged record when
    /// neither matches.
    pub async fn find_or_create_from_corporate(
        &self,
        corporate: &CorporateClient,
        now: DateTime<Utc>,
    ) -> Result<Client, PartyError> {
        if let Some(email) = non_blank(corporate.contact_email.as_deref()) {
            if let Some(existing) = self.store.find_first_by_email(email).await? {
                info!(client = %existing.id, email, "reusing existing client");
                return Ok(existing);
            }
        } else if let Some(existing) = self.store.find_first_by_name(&corporate.name).await? {
            info!(client = %existing.id, name = %corporate.name, "reusing existing client");
            return Ok(existing);
        }

        let client = Client::corporate(
            corporate.name.clone(),
            corporate.contact_email.clone(),
            corporate.contact_phone.clone(),
            now,
        );
        self.store.insert(&client).await?;
        info!(client = %client.id, "created corporate client");
        Ok(client)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientType;
    use crate::ports::mock::MockClientStore;

    fn registry_with_store() -> (ClientRegistry, Arc<MockClientStore>) {
        let store = Arc::new(MockClientStore::new());
        (ClientRegistry::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_individual_dedup_by_email() {
        let (registry, store) = registry_with_store();
        let now = Utc::now();

        let first = registry
            .find_or_create_from_individual("Иванов Иван", Some("ivanov@example.com"), None, now)
            .await
            .unwrap();
        let second = registry
            .find_or_create_from_individual("И. Иванов", Some("ivanov@example.com"), None, now)
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_individual_without_email_always_creates() {
        let (registry, store) = registry_with_store();
        let now = Utc::now();

        registry
            .find_or_create_from_individual("Иванов Иван", None, None, now)
            .await
            .unwrap();
        registry
            .find_or_create_from_individual("Иванов Иван", Some("  "), None, now)
            .await
            .unwrap();

        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_corporate_falls_back_to_name() {
        let (registry, store) = registry_with_store();
        let now = Utc::now();

        let mut org = CorporateClient::new("ООО Ромашка");
        org.contact_email = Some("office@romashka.ru".to_string());

        let by_email = registry
            .find_or_create_from_corporate(&org, now)
            .await
            .unwrap();
        assert_eq!(by_email.client_type, ClientType::Corporate);

        // Same organization, no email this time: matched by name.
        let nameless = CorporateClient::new("ООО Ромашка");
        let by_name = registry
            .find_or_create_from_corporate(&nameless, now)
            .await
            .unwrap();

        assert_eq!(by_email.id, by_name.id);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_corporate_email_match_wins_over_name() {
        let (registry, store) = registry_with_store();
        let now = Utc::now();

        let person = registry
            .find_or_create_from_individual("Петров", Some("shared@example.com"), None, now)
            .await
            .unwrap();

        let mut org = CorporateClient::new("ООО Вектор");
        org.contact_email = Some("shared@example.com".to_string());
        let resolved = registry
            .find_or_create_from_corporate(&org, now)
            .await
            .unwrap();

        // Email dedup is global across client types.
        assert_eq!(resolved.id, person.id);
        assert_eq!(store.len().await, 1);
    }
}
