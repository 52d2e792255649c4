//! Category management page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use stockpile_core::Category;

use crate::api::CategoryInput;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::nav::{NavEntry, visible_entries};
use crate::routes::{MessageQuery, expire_session, flash_messages};
use crate::state::AppState;

/// Category form data (create and update share the shape).
#[derive(Debug, Deserialize)]
pub struct CategoryForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Category listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/category.html")]
pub struct CategoryTemplate {
    pub nav: Vec<NavEntry>,
    pub user_name: String,
    pub categories: Vec<Category>,
    pub success: Option<String>,
    pub error: Option<String>,
}

/// Display the category list with create and edit forms.
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Query(query): Query<MessageQuery>,
) -> Response {
    let (success, mut error) = flash_messages("Category", &query);

    let categories = match state.inventory().list_categories(Some(user.token())).await {
        Ok(list) => list,
        Err(e) if e.is_unauthorized() => return expire_session(&session).await,
        Err(e) => {
            tracing::error!(error = %e, "failed to load categories");
            error.get_or_insert_with(|| "Could not load categories".to_string());
            Vec::new()
        }
    };

    CategoryTemplate {
        nav: visible_entries(user.permission_level),
        user_name: user.user.name,
        categories,
        success,
        error,
    }
    .into_response()
}

/// Handle the create form.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Form(form): Form<CategoryForm>,
) -> Response {
    let input = CategoryInput {
        name: form.name,
        description: form.description,
    };

    match state
        .inventory()
        .create_category(Some(user.token()), &input)
        .await
    {
        Ok(()) => Redirect::to("/dashboard/category?success=created").into_response(),
        Err(e) if e.is_unauthorized() => expire_session(&session).await,
        Err(e) => {
            tracing::warn!(error = %e, "category create failed");
            Redirect::to("/dashboard/category?error=create_failed").into_response()
        }
    }
}

/// Handle the edit form.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Path(id): Path<String>,
    Form(form): Form<CategoryForm>,
) -> Response {
    let input = CategoryInput {
        name: form.name,
        description: form.description,
    };

    match state
        .inventory()
        .update_category(Some(user.token()), &id, &input)
        .await
    {
        Ok(()) => Redirect::to("/dashboard/category?success=updated").into_response(),
        Err(e) if e.is_unauthorized() => expire_session(&session).await,
        Err(e) => {
            tracing::warn!(error = %e, %id, "category update failed");
            Redirect::to("/dashboard/category?error=update_failed").into_response()
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
        .delete_category(Some(user.token()), &id)
        .await
    {
        Ok(()) => Redirect::to("/dashboard/category?success=deleted").into_response(),
        Err(e) if e.is_unauthorized() => expire_session(&session).await,
        Err(e) => {
            tracing::warn!(error = %e, %id, "category delete failed");
            Redirect::to("/dashboard/category?error=delete_failed").into_response()
        }
    }
}
