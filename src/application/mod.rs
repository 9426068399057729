//! Application layer services implementing business logic.
//!
//! Services sit between the HTTP handlers and the domain rules.
//!
//! # Available Services
//!
//! - [`services::login_service::LoginService`] - Login form validation

pub mod services;
