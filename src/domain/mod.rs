//! Domain layer: login entities and validation rules.
//!
//! Nothing here touches HTTP or configuration.
//!
//! - [`entities`] - [`entities::Credentials`] and [`entities::Submission`]
//! - [`validation`] - The ordered rule set and [`validation::LoginError`]

pub mod entities;
pub mod validation;
