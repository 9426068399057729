//! # Login Page
//!
//! A single login form served with Axum. A submitted email and password are
//! checked against one configured credential pair; a match redirects the
//! browser, anything else re-renders the form with an inline error.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Credential and submission types, validation rules
//! - **Application Layer** ([`application`]) - The login service
//! - **Web Layer** ([`web`]) - Askama template, handlers and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export ADMIN_EMAIL="admin@gmail.com"   # Optional
//! export ADMIN_PASSWORD="123456"         # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::LoginService;
    pub use crate::domain::entities::{Credentials, Submission};
    pub use crate::domain::validation::{LoginError, ValidationResult};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
