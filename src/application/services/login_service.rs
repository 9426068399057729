//! Login service checking form submissions against the configured credential.

use crate::domain::entities::{Credentials, Submission};
use crate::domain::validation::{self, ValidationResult};

/// Service deciding whether a submission earns the redirect.
///
/// Holds no mutable state; the same submission always yields the same result.
#[derive(Debug, Clone)]
pub struct LoginService {
    credentials: Credentials,
    redirect_path: String,
}

impl LoginService {
    /// Creates a new login service.
    ///
    /// # Arguments
    ///
    /// - `credentials` - the accepted email/password pair
    /// - `redirect_path` - where the browser goes after a successful login
    pub fn new(credentials: Credentials, redirect_path: impl Into<String>) -> Self {
        Self {
            credentials,
            redirect_path: redirect_path.into(),
        }
    }

    /// Validates a submission.
    ///
    /// # Errors
    ///
    /// Returns the first [`crate::domain::validation::LoginError`] hit, in
    /// rule order.
    pub fn login(&self, submission: &Submission) -> ValidationResult {
        let result = validation::validate(submission, &self.credentials);

        match &result {
            Ok(()) => tracing::info!(email = %submission.email, "Login accepted"),
            Err(e) => tracing::debug!(email = %submission.email, reason = e.kind(), "Login rejected"),
        }

        result
    }

    /// Path the browser is sent to after a successful login.
    pub fn redirect_path(&self) -> &str {
        &self.redirect_path
    }
}
