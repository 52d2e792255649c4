//! Product management page.
//!
//! The form needs the category and supplier lists for its selects, so the
//! page fetches three lists; each goes through its own cache key.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;

use stockpile_core::Product;

use crate::api::{ApiError, ProductInput};
use crate::filters;
use crate::middleware::RequireAuth;
use crate::nav::{NavEntry, visible_entries};
use crate::routes::{MessageQuery, expire_session, flash_messages, ok_or_note};
use crate::state::AppState;

/// Product form data (create and update share the shape).
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub price: Decimal,
    pub category_id: String,
    pub supplier_id: String,
}

/// Product display row.
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub price: String,
    pub category: String,
    pub category_id: String,
    pub supplier: String,
    pub supplier_id: String,
}

/// Select option for the create/edit forms.
pub struct ChoiceView {
    pub id: String,
    pub name: String,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/product.html")]
pub struct ProductTemplate {
    pub nav: Vec<NavEntry>,
    pub user_name: String,
    pub products: Vec<ProductView>,
    pub categories: Vec<ChoiceView>,
    pub suppliers: Vec<ChoiceView>,
    pub success: Option<String>,
    pub error: Option<String>,
}

fn product_view(product: Product) -> ProductView {
    let (category, category_id) = product
        .category
        .map_or_else(|| ("-".to_string(), String::new()), |r| (r.name, r.id));
    let (supplier, supplier_id) = product
        .supplier
        .map_or_else(|| ("-".to_string(), String::new()), |r| (r.name, r.id));

    ProductView {
        id: product.id,
        name: product.name,
        sku: product.sku,
        quantity: product.quantity,
        price: format!("{:.2}", product.price),
        category,
        category_id,
        supplier,
        supplier_id,
    }
}

/// Display the product list with create and edit forms.
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Query(query): Query<MessageQuery>,
) -> Response {
    let (success, mut error) = flash_messages("Product", &query);
    let token = Some(user.token());

    let (products, categories, suppliers) = tokio::join!(
        state.inventory().list_products(token),
        state.inventory().list_categories(token),
        state.inventory().list_suppliers(token),
    );

    if products.as_ref().is_err_and(ApiError::is_unauthorized)
        || categories.as_ref().is_err_and(ApiError::is_unauthorized)
        || suppliers.as_ref().is_err_and(ApiError::is_unauthorized)
    {
        return expire_session(&session).await;
    }

    let products: Vec<ProductView> = ok_or_note("products", products, &mut error)
        .into_iter()
        .map(product_view)
        .collect();
    let categories: Vec<ChoiceView> = ok_or_note("categories", categories, &mut error)
        .into_iter()
        .map(|c| ChoiceView {
            id: c.id,
            name: c.name,
        })
        .collect();
    let suppliers: Vec<ChoiceView> = ok_or_note("suppliers", suppliers, &mut error)
        .into_iter()
        .map(|s| ChoiceView {
            id: s.id,
            name: s.name,
        })
        .collect();

    ProductTemplate {
        nav: visible_entries(user.permission_level),
        user_name: user.user.name,
        products,
        categories,
        suppliers,
        success,
        error,
    }
    .into_response()
}

fn to_input(form: ProductForm) -> ProductInput {
    ProductInput {
        name: form.name,
        sku: form.sku,
        quantity: form.quantity,
        price: form.price,
        category_id: form.category_id,
        supplier_id: form.supplier_id,
    }
}

/// Handle the create form.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Response {
    match state
        .inventory()
        .create_product(Some(user.token()), &to_input(form))
        .await
    {
        Ok(()) => Redirect::to("/dashboard/product?success=created").into_response(),
        Err(e) if e.is_unauthorized() => expire_session(&session).await,
        Err(e) => {
            tracing::warn!(error = %e, "product create failed");
            Redirect::to("/dashboard/product?error=create_failed").into_response()
        }
    }
}

/// Handle the edit form.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Path(id): Path<String>,
    Form(form): Form<ProductForm>,
) -> Response {
    match state
        .inventory()
        .update_product(Some(user.token()), &id, &to_input(form))
        .await
    {
        Ok(()) => Redirect::to("/dashboard/product?success=updated").into_response(),
        Err(e) if e.is_unauthorized() => expire_session(&session).await,
        Err(e) => {
            tracing::warn!(error = %e, %id, "product update failed");
            Redirect::to("/dashboard/product?error=update_failed").into_response()
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
        .delete_product(Some(user.token()), &id)
        .await
    {
        Ok(()) => Redirect::to("/dashboard/product?success=deleted").into_response(),
        Err(e) if e.is_unauthorized() => expire_session(&session).await,
        Err(e) => {
            tracing::warn!(error = %e, %id, "product delete failed");
            Redirect::to("/dashboard/product?error=delete_failed").into_response()
        }
    }
}
