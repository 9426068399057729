//! Ordered validation rules for a login submission.

use thiserror::Error;

use crate::domain::entities::{Credentials, Submission};

/// Shortest password accepted before the credential check, in bytes.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Reasons a submission is turned away.
///
/// The `Display` text of each variant is the exact message shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please enter your email")]
    MissingEmail,

    #[error("Please enter your password")]
    MissingPassword,

    #[error("The password is not complex enough")]
    PasswordTooShort,

    #[error("Your email or password is not correct")]
    InvalidCredentials,
}

impl LoginError {
    /// Short machine-readable name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LoginError::MissingEmail => "missing_email",
            LoginError::MissingPassword => "missing_password",
            LoginError::PasswordTooShort => "password_too_short",
            LoginError::InvalidCredentials => "invalid_credentials",
        }
    }
}

/// Outcome of validating a submission: `Ok(())` means redirect.
pub type ValidationResult = Result<(), LoginError>;

/// Runs the validation rules in order and stops at the first failure.
///
/// 1. empty email
/// 2. empty password
/// 3. password shorter than [`MIN_PASSWORD_LEN`] bytes
/// 4. email or password differs from `credentials`
pub fn validate(submission: &Submission, credentials: &Credentials) -> ValidationResult {
    if submission.email.is_empty() {
        return Err(LoginError::MissingEmail);
    }

    if submission.password.is_empty() {
        return Err(LoginError::MissingPassword);
    }

    if submission.password.len() < MIN_PASSWORD_LEN {
        return Err(LoginError::PasswordTooShort);
    }

    if !credentials.matches(&submission.email, &submission.password) {
        return Err(LoginError::InvalidCredentials);
    }

    Ok(())
}
