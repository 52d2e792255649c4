//! Authentication route handlers.
//!
//! Login posts the form to the inventory API's `/api/auth/login`, stores
//! the returned user + token in the session, and lands on the dashboard.
//! Failures redirect back to the login page with a flash code.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use secrecy::SecretString;
use serde::Deserialize;
use tower_sessions::Session;

use crate::api::ApiError;
use crate::middleware::{OptionalAuth, clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Query parameters for error display on the login page.
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub error: Option<String>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Display the login page.
///
/// A visitor who already holds a session has no business here and is sent
/// to the dashboard instead.
pub async fn login_page(
    OptionalAuth(user): OptionalAuth,
    Query(query): Query<LoginQuery>,
) -> Response {
    if user.is_some() {
        return Redirect::to("/dashboard").into_response();
    }

    let error = query.error.as_deref().map(|code| match code {
        "credentials" => "Invalid email or password".to_string(),
        "expired" => "Your session has expired, please log in again".to_string(),
        "session" => "Could not start a session, please try again".to_string(),
        other => other.to_string(),
    });

    LoginTemplate { error }.into_response()
}

/// Handle the login form submission.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.inventory().login(&form.email, &form.password).await {
        Ok(payload) => {
            let user = CurrentUser::new(payload.user, SecretString::from(payload.token));

            if let Err(e) = set_current_user(&session, &user).await {
                tracing::error!(error = %e, "failed to store the session");
                return Redirect::to("/login?error=session").into_response();
            }

            Redirect::to("/dashboard").into_response()
        }
        Err(ApiError::Api(message)) => {
            tracing::warn!(%message, "login rejected by the inventory API");
            Redirect::to("/login?error=credentials").into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "login request failed");
            Redirect::to("/login?error=credentials").into_response()
        }
    }
}

/// Handle logout.
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_current_user(&session).await {
        tracing::error!(error = %e, "failed to clear the session on logout");
    }
    Redirect::to("/login").into_response()
}
