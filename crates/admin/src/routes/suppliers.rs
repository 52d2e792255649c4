//! Supplier management page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use stockpile_core::Supplier;

use crate::api::SupplierInput;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::nav::{NavEntry, visible_entries};
use crate::routes::{MessageQuery, expire_session, flash_messages};
use crate::state::AppState;

/// Supplier form data (create and update share the shape).
#[derive(Debug, Deserialize)]
pub struct SupplierForm {
    pub name: String,
    pub email: String,
    pub contact_number: String,
    #[serde(default)]
    pub address: String,
}

/// Supplier listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/suppliers.html")]
pub struct SuppliersTemplate {
    pub nav: Vec<NavEntry>,
    pub user_name: String,
    pub suppliers: Vec<Supplier>,
    pub success: Option<String>,
    pub error: Option<String>,
}

/// Display the supplier list with create and edit forms.
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Query(query): Query<MessageQuery>,
) -> Response {
    let (success, mut error) = flash_messages("Supplier", &query);

    let suppliers = match state.inventory().list_suppliers(Some(user.token())).await {
        Ok(list) => list,
        Err(e) if e.is_unauthorized() => return expire_session(&session).await,
        Err(e) => {
            tracing::error!(error = %e, "failed to load suppliers");
            error.get_or_insert_with(|| "Could not load suppliers".to_string());
            Vec::new()
        }
    };

    SuppliersTemplate {
        nav: visible_entries(user.permission_level),
        user_name: user.user.name,
        suppliers,
        success,
        error,
    }
    .into_response()
}

fn to_input(form: SupplierForm) -> SupplierInput {
    SupplierInput {
        name: form.name,
        email: form.email,
        contact_number: form.contact_number,
        address: form.address,
    }
}

/// Handle the create form.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Form(form): Form<SupplierForm>,
) -> Response {
    match state
        .inventory()
        .create_supplier(Some(user.token()), &to_input(form))
        .await
    {
        Ok(()) => Redirect::to("/dashboard/suppliers?success=created").into_response(),
        Err(e) if e.is_unauthorized() => expire_session(&session).await,
        Err(e) => {
            tracing::warn!(error = %e, "supplier create failed");
            Redirect::to("/dashboard/suppliers?error=create_failed").into_response()
        }
    }
}

/// Handle the edit form.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Path(id): Path<String>,
    Form(form): Form<SupplierForm>,
) -> Response {
    match state
        .inventory()
        .update_supplier(Some(user.token()), &id, &to_input(form))
        .await
    {
        Ok(()) => Redirect::to("/dashboard/suppliers?success=updated").into_response(),
        Err(e) if e.is_unauthorized() => expire_session(&session).await,
        Err(e) => {
            tracing::warn!(error = %e, %id, "supplier update failed");
            Redirect::to("/dashboard/suppliers?error=update_failed").into_response()
        }
    }
}

/// Handle the delete confirmation form.
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Path(id): Path<String>,
) -> Response {
    match state
        .inventory()
        .delete_supplier(Some(user.token()), &id)
        .await
    {
        Ok(()) => Redirect::to("/dashboard/suppliers?success=deleted").into_response(),
        Err(e) if e.is_unauthorized() => expire_session(&session).await,
        Err(e) => {
            tracing::warn!(error = %e, %id, "supplier delete failed");
            Redirect::to("/dashboard/suppliers?error=delete_failed").into_response()
        }
    }
}
