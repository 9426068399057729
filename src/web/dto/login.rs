//! Login form payload.

use crate::domain::entities::Submission;

/// Fields of the `application/x-www-form-urlencoded` login form.
///
/// Built from the decoded key/value pairs of the body. Both fields are
/// optional so that a partial body is still readable; only a body carrying
/// both counts as a submission. A repeated key keeps its last value and
/// unknown keys are ignored.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: Option<String>,
    pub pass: Option<String>,
}

impl FromIterator<(String, String)> for LoginForm {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        pairs
            .into_iter()
            .fold(Self::default(), |mut form, (key, value)| {
                match key.as_str() {
                    "email" => form.email = Some(value),
                    "pass" => form.pass = Some(value),
                    _ => {}
                }
                form
            })
    }
}

impl LoginForm {
    /// Converts the form into a [`Submission`] when both fields are present.
    ///
    /// Present-but-empty fields still count; the validation rules report them.
    pub fn into_submission(self) -> Option<Submission> {
        match (self.email, self.pass) {
            (Some(email), Some(pass)) => Some(Submission::new(email, pass)),
            _ => None,
        }
    }
}
