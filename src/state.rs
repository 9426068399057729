//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LoginService;

/// State cloned into every request via axum's [`axum::extract::State`].
#[derive(Clone)]
pub struct AppState {
    pub login_service: Arc<LoginService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(login_service: Arc<LoginService>) -> Self {
        Self { login_service }
    }
}
