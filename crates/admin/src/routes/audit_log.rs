//! Audit log page (read-only).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use stockpile_core::AuditLogEntry;

use crate::filters;
use crate::middleware::RequireAuth;
use crate::nav::{NavEntry, visible_entries};
use crate::routes::expire_session;
use crate::state::AppState;

/// Audit log display row.
pub struct AuditView {
    pub performed_by: String,
    pub action: &'static str,
    pub model: String,
    pub model_id: String,
    pub timestamp: String,
}

/// Audit log page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/audit_log.html")]
pub struct AuditLogTemplate {
    pub nav: Vec<NavEntry>,
    pub user_name: String,
    pub entries: Vec<AuditView>,
    pub error: Option<String>,
}

fn audit_view(entry: AuditLogEntry) -> AuditView {
    AuditView {
        performed_by: entry
            .performed_by
            .map_or_else(|| "-".to_string(), |r| r.name),
        action: entry.action.label(),
        model: entry.model,
        model_id: entry.model_id,
        timestamp: entry.timestamp.format("%Y-%m-%d %H:%M").to_string(),
    }
}

/// Display the audit trail.
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
) -> Response {
    let (entries, error) = match state.inventory().list_audit_logs(Some(user.token())).await {
        Ok(list) => (list, None),
        Err(e) if e.is_unauthorized() => return expire_session(&session).await,
        Err(e) => {
            tracing::error!(error = %e, "failed to load the audit log");
            (Vec::new(), Some("Could not load the audit log".to_string()))
        }
    };

    AuditLogTemplate {
        nav: visible_entries(user.permission_level),
        user_name: user.user.name,
        entries: entries.into_iter().map(audit_view).collect(),
        error,
    }
    .into_response()
}
