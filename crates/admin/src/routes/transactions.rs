//! Stock transaction management page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use stockpile_core::{Transaction, TransactionKind};

use crate::api::{ApiError, TransactionInput};
use crate::filters;
use crate::middleware::RequireAuth;
use crate::nav::{NavEntry, visible_entries};
use crate::routes::{MessageQuery, expire_session, flash_messages, ok_or_note};
use crate::state::AppState;

/// Transaction form data (create and update share the shape).
///
/// `kind` arrives as the wire spelling (`stock-in` / `stock-out`) and is
/// parsed explicitly; an unknown value bounces back as invalid input.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    pub product_id: String,
    pub kind: String,
    pub quantity: i64,
    #[serde(default)]
    pub description: String,
}

/// Transaction display row.
pub struct TransactionView {
    pub id: String,
    pub product: String,
    pub product_id: String,
    pub kind: &'static str,
    pub kind_value: &'static str,
    pub quantity: i64,
    pub description: String,
    pub created_at: String,
    pub user: String,
}

/// Select option for the product dropdown.
pub struct ProductChoice {
    pub id: String,
    pub name: String,
}

/// Transaction listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/transactions.html")]
pub struct TransactionsTemplate {
    pub nav: Vec<NavEntry>,
    pub user_name: String,
    pub transactions: Vec<TransactionView>,
    pub products: Vec<ProductChoice>,
    pub success: Option<String>,
    pub error: Option<String>,
}

fn transaction_view(transaction: Transaction) -> TransactionView {
    let (product, product_id) = transaction
        .product
        .map_or_else(|| ("-".to_string(), String::new()), |r| (r.name, r.id));

    TransactionView {
        id: transaction.id,
        product,
        product_id,
        kind: transaction.kind.label(),
        kind_value: transaction.kind.as_str(),
        quantity: transaction.quantity,
        description: transaction.description.unwrap_or_else(|| "-".to_string()),
        created_at: transaction.created_at.format("%Y-%m-%d %H:%M").to_string(),
        user: transaction.user.map_or_else(|| "-".to_string(), |r| r.name),
    }
}

/// Display the transaction list with create and edit forms.
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Query(query): Query<MessageQuery>,
) -> Response {
    let (success, mut error) = flash_messages("Transaction", &query);
    let token = Some(user.token());

    let (transactions, products) = tokio::join!(
        state.inventory().list_transactions(token),
        state.inventory().list_products(token),
    );

    if transactions.as_ref().is_err_and(ApiError::is_unauthorized)
        || products.as_ref().is_err_and(ApiError::is_unauthorized)
    {
        return expire_session(&session).await;
    }

    let transactions: Vec<TransactionView> = ok_or_note("transactions", transactions, &mut error)
        .into_iter()
        .map(transaction_view)
        .collect();
    let products: Vec<ProductChoice> = ok_or_note("products", products, &mut error)
        .into_iter()
        .map(|p| ProductChoice {
            id: p.id,
            name: p.name,
        })
        .collect();

    TransactionsTemplate {
        nav: visible_entries(user.permission_level),
        user_name: user.user.name,
        transactions,
        products,
        success,
        error,
    }
    .into_response()
}

fn to_input(form: TransactionForm) -> Option<TransactionInput> {
    let kind: TransactionKind = form.kind.parse().ok()?;
    let description = if form.description.is_empty() {
        None
    } else {
        Some(form.description)
    };

    Some(TransactionInput {
        product_id: form.product_id,
        kind,
        quantity: form.quantity,
        description,
    })
}

/// Handle the create form.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Form(form): Form<TransactionForm>,
) -> Response {
    let Some(input) = to_input(form) else {
        return Redirect::to("/dashboard/transactions?error=invalid_input").into_response();
    };

    match state
        .inventory()
        .create_transaction(Some(user.token()), &input)
        .await
    {
        Ok(()) => Redirect::to("/dashboard/transactions?success=created").into_response(),
        Err(e) if e.is_unauthorized() => expire_session(&session).await,
        Err(e) => {
            tracing::warn!(error = %e, "transaction create failed");
            Redirect::to("/dashboard/transactions?error=create_failed").into_response()
        }
    }
}

/// Handle the edit form.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Path(id): Path<String>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let Some(input) = to_input(form) else {
        return Redirect::to("/dashboard/transactions?error=invalid_input").into_response();
    };

    match state
        .inventory()
        .update_transaction(Some(user.token()), &id, &input)
        .await
    {
        Ok(()) => Redirect::to("/dashboard/transactions?success=updated").into_response(),
        Err(e) if e.is_unauthorized() => expire_session(&session).await,
        Err(e) => {
            tracing::warn!(error = %e, %id, "transaction update failed");
            Redirect::to("/dashboard/transactions?error=update_failed").into_response()
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
        .delete_transaction(Some(user.token()), &id)
        .await
    {
        Ok(()) => Redirect::to("/dashboard/transactions?success=deleted").into_response(),
        Err(e) if e.is_unauthorized() => expire_session(&session).await,
        Err(e) => {
            tracing::warn!(error = %e, %id, "transaction delete failed");
            Redirect::to("/dashboard/transactions?error=delete_failed").into_response()
        }
    }
}
