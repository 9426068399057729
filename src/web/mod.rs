//! Web layer serving the login page.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`dto`] - Form payloads
//! - [`handlers`] - Page handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
