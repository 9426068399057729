//! A single login form submission.

/// Email and password as typed into the login form.
///
/// Lives for one request only. Values are kept exactly as submitted, with no
/// trimming or case folding, so they can be echoed back into the form.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Submission {
    pub email: String,
    pub password: String,
}

impl Submission {
    /// Creates a new submission.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Submission")
            .field("email", &self.email)
            .field("password_len", &self.password.len())
            .finish()
    }
}
