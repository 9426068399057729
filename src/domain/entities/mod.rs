//! Core domain entities.
//!
//! - [`Credentials`] - The fixed email/password pair accepted by the form
//! - [`Submission`] - One request's worth of form input
//!
//! Neither is persisted.

pub mod credentials;
pub mod submission;

pub use credentials::Credentials;
pub use submission::Submission;
