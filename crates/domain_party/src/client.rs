//! Client entities
//!
//! [`Client`] is the unified billing record policies point at, tagged as
//! individual or corporate. [`CorporateClient`] is the organization record a
//! corporate application references; issuing its policy materializes a
//! corporate-tagged [`Client`] from the organization's contact data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClientId, CorporateClientId};

/// Whether a client record represents a person or an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClientType {
    Individual,
    Corporate,
}

/// A billing client. Deduplicated by contact email; never duplicated for
/// the same email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub client_type: ClientType,
    pub created_at: DateTime<Utc>,
}

impl Client {
    /// Creates an individual client from applicant contact fields.
    pub fn individual(
        full_name: impl Into<String>,
        email: Option<String>,
        phone: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ClientId::new_v7(),
            full_name: full_name.into(),
            email,
            phone,
            client_type: ClientType::Individual,
            created_at,
        }
    }

    /// Creates a corporate client record from an organization's contacts.
    pub fn corporate(
        name: impl Into<String>,
        email: Option<String>,
        phone: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ClientId::new_v7(),
            full_name: name.into(),
            email,
            phone,
            client_type: ClientType::Corporate,
            created_at,
        }
    }
}

/// An organization holding corporate applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorporateClient {
    pub id: CorporateClientId,
    pub name: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    /// State registration number of the organization, unique when present.
    pub registration_number: Option<String>,
}

impl CorporateClient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CorporateClientId::new_v7(),
            name: name.into(),
            contact_email: None,
            contact_phone: None,
            registration_number: None,
        }
    }
}
