//! Party Domain
//!
//! Billing "client" records that policies are issued against. A client is
//! either a natural person or an organization, created on demand when a
//! policy is issued and deduplicated so the same contact email never yields
//! two records.

pub mod client;
pub mod registry;
pub mod ports;
pub mod error;

pub use client::{Client, ClientType, CorporateClient};
pub use registry::ClientRegistry;
pub use ports::{ClientStore, CorporateClientDirectory};
pub use error::PartyError;
