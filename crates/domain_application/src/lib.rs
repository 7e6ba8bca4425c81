//! Application Domain
//!
//! Coverage requests and the state machine that governs them. An
//! application is priced at submission, created in status `NEW`, moves
//! through `APPROVED` or `REJECTED`, and an approved application can be
//! converted into exactly one policy. `REJECTED` and
//! `CONVERTED_TO_POLICY` are terminal.

pub mod status;
pub mod individual;
pub mod corporate;
pub mod requests;
pub mod lifecycle;
pub mod ports;
pub mod error;

pub use status::ApplicationStatus;
pub use individual::IndividualApplication;
pub use corporate::CorporateApplication;
pub use requests::{CorporateSubmission, IndividualSubmission};
pub use lifecycle::ApplicationLifecycle;
pub use ports::{CorporateApplicationStore, IndividualApplicationStore};
pub use error::ApplicationError;
