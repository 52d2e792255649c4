//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Redirect to the dashboard
//! GET  /health                  - Health check
//!
//! # Auth
//! GET  /login                   - Login page (bounces logged-in visitors)
//! POST /login                   - Login action
//! POST /logout                  - Logout action
//!
//! # Dashboard (requires auth)
//! GET  /dashboard               - Stock overview
//! GET  /dashboard/product       - Product listing + forms
//! POST /dashboard/product       - Create product
//! POST /dashboard/product/{id}  - Update product
//! POST /dashboard/product/{id}/delete - Delete product
//! (category, suppliers and transactions follow the same shape)
//! GET  /dashboard/audit-log     - Audit trail (read-only)
//! GET  /dashboard/users         - Operator list
//! ```
//!
//! Mutations are plain form posts answered with a redirect back to the list
//! page, carrying a flash code in the query string.

pub mod audit_log;
pub mod auth;
pub mod category;
pub mod dashboard;
pub mod product;
pub mod suppliers;
pub mod transactions;
pub mod users;

use axum::{
    Router,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::middleware::clear_current_user;
use crate::state::AppState;

/// Create the full route tree (state is applied by the caller).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/dashboard") }))
        .route("/health", get(health))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/dashboard", get(dashboard::index))
        .route(
            "/dashboard/category",
            get(category::index).post(category::create),
        )
        .route("/dashboard/category/{id}", post(category::update))
        .route("/dashboard/category/{id}/delete", post(category::remove))
        .route(
            "/dashboard/product",
            get(product::index).post(product::create),
        )
        .route("/dashboard/product/{id}", post(product::update))
        .route("/dashboard/product/{id}/delete", post(product::remove))
        .route(
            "/dashboard/suppliers",
            get(suppliers::index).post(suppliers::create),
        )
        .route("/dashboard/suppliers/{id}", post(suppliers::update))
        .route("/dashboard/suppliers/{id}/delete", post(suppliers::remove))
        .route(
            "/dashboard/transactions",
            get(transactions::index).post(transactions::create),
        )
        .route("/dashboard/transactions/{id}", post(transactions::update))
        .route(
            "/dashboard/transactions/{id}/delete",
            post(transactions::remove),
        )
        .route("/dashboard/audit-log", get(audit_log::index))
        .route("/dashboard/users", get(users::index))
}

/// Liveness probe.
async fn health() -> &'static str {
    "ok"
}

/// Query parameters for flash display after a mutation redirect.
#[derive(Debug, Default, Deserialize)]
pub struct MessageQuery {
    pub success: Option<String>,
    pub error: Option<String>,
}

/// Translate flash codes from the query string into display messages.
#[must_use]
pub fn flash_messages(resource: &str, query: &MessageQuery) -> (Option<String>, Option<String>) {
    let lower = resource.to_ascii_lowercase();

    let success = query.success.as_deref().map(|code| match code {
        "created" => format!("{resource} created successfully"),
        "updated" => format!("{resource} updated successfully"),
        "deleted" => format!("{resource} deleted successfully"),
        other => other.to_string(),
    });

    let error = query.error.as_deref().map(|code| match code {
        "create_failed" => format!("Could not create the {lower}"),
        "update_failed" => format!("Could not update the {lower}"),
        "delete_failed" => format!("Could not delete the {lower}"),
        "invalid_input" => "The submitted form was not valid".to_string(),
        other => other.to_string(),
    });

    (success, error)
}

/// Unwrap a list result, downgrading a failure to an empty list plus an
/// error line for the page. Only the first failure sets the line.
pub(crate) fn ok_or_note<T>(
    label: &str,
    result: Result<Vec<T>, crate::api::ApiError>,
    error: &mut Option<String>,
) -> Vec<T> {
    match result {
        Ok(list) => list,
        Err(e) => {
            tracing::error!(error = %e, label, "failed to load a list");
            error.get_or_insert_with(|| format!("Could not load {label}"));
            Vec::new()
        }
    }
}

/// The inventory API rejected the session's token: drop the session and
/// start over at the login page.
pub(crate) async fn expire_session(session: &Session) -> Response {
    if let Err(e) = clear_current_user(session).await {
        tracing::error!(error = %e, "failed to clear an expired session");
    }
    Redirect::to("/login?error=expired").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_codes_become_messages() {
        let query = MessageQuery {
            success: Some("created".to_string()),
            error: None,
        };
        let (success, error) = flash_messages("Category", &query);
        assert_eq!(success.as_deref(), Some("Category created successfully"));
        assert!(error.is_none());
    }

    #[test]
    fn error_codes_use_the_lowercased_resource() {
        let query = MessageQuery {
            success: None,
            error: Some("create_failed".to_string()),
        };
        let (_, error) = flash_messages("Supplier", &query);
        assert_eq!(error.as_deref(), Some("Could not create the supplier"));
    }

    #[test]
    fn unknown_codes_pass_through_unchanged() {
        let query = MessageQuery {
            success: Some("archived".to_string()),
            error: None,
        };
        let (success, _) = flash_messages("Category", &query);
        assert_eq!(success.as_deref(), Some("archived"));
    }
}
