//! Login page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, State, rejection::FormRejection},
    response::{IntoResponse, Redirect, Response},
};

use crate::domain::entities::Submission;
use crate::domain::validation::LoginError;
use crate::state::AppState;
use crate::web::dto::login::LoginForm;

/// Template for the login page.
///
/// Renders `templates/login.html` with the email and password inputs
/// pre-filled and the error paragraph below the button.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub email: String,
    pub pass: String,
    pub error: String,
}

impl LoginTemplate {
    /// An empty form with no error.
    pub fn blank() -> Self {
        Self {
            email: String::new(),
            pass: String::new(),
            error: String::new(),
        }
    }

    /// The form echoing a rejected submission back with its error message.
    pub fn rejected(submission: Submission, error: LoginError) -> Self {
        Self {
            email: submission.email,
            pass: submission.password,
            error: error.to_string(),
        }
    }
}

/// Renders the empty login form.
///
/// # Endpoint
///
/// `GET /`
pub async fn login_page_handler() -> impl IntoResponse {
    LoginTemplate::blank()
}

/// Validates a submitted login form.
///
/// # Endpoint
///
/// `POST /` with form fields `email` and `pass`
///
/// # Responses
///
/// - **303 See Other** to the configured redirect path on success
/// - **200 OK** with the form and an error message on a rejected submission
/// - **200 OK** with a blank form when `email` or `pass` is missing or the
///   body cannot be read as a form
///
/// A field sent more than once keeps its last value.
pub async fn login_submit_handler(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response {
    let submission = match form {
        Ok(Form(pairs)) => pairs.into_iter().collect::<LoginForm>().into_submission(),
        Err(rejection) => {
            tracing::debug!(%rejection, "Unreadable login form body");
            None
        }
    };

    let Some(submission) = submission else {
        return LoginTemplate::blank().into_response();
    };

    match state.login_service.login(&submission) {
        Ok(()) => Redirect::to(state.login_service.redirect_path()).into_response(),
        Err(error) => LoginTemplate::rejected(submission, error).into_response(),
    }
}
