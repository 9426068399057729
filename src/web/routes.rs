//! Login page route configuration.

use crate::state::AppState;
use crate::web::handlers::{login_page_handler, login_submit_handler};
use axum::{Router, routing::get};

/// Public login routes.
///
/// # Endpoints
///
/// - `GET /` - Blank login form
/// - `POST /` - Form submission; redirects or re-renders with an error
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(login_page_handler).post(login_submit_handler))
}
