//! Dashboard overview page: stock counts and movement totals.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use stockpile_core::TransactionKind;

use crate::api::ApiError;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::nav::{NavEntry, visible_entries};
use crate::routes::{expire_session, ok_or_note};
use crate::state::AppState;

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/index.html")]
pub struct DashboardTemplate {
    pub nav: Vec<NavEntry>,
    pub user_name: String,
    pub product_count: usize,
    pub category_count: usize,
    pub supplier_count: usize,
    pub transaction_count: usize,
    pub stock_in: i64,
    pub stock_out: i64,
    pub error: Option<String>,
}

/// Display the overview.
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
) -> Response {
    let token = Some(user.token());

    let (products, categories, suppliers, transactions) = tokio::join!(
        state.inventory().list_products(token),
        state.inventory().list_categories(token),
        state.inventory().list_suppliers(token),
        state.inventory().list_transactions(token),
    );

    if products.as_ref().is_err_and(ApiError::is_unauthorized)
        || categories.as_ref().is_err_and(ApiError::is_unauthorized)
        || suppliers.as_ref().is_err_and(ApiError::is_unauthorized)
        || transactions.as_ref().is_err_and(ApiError::is_unauthorized)
    {
        return expire_session(&session).await;
    }

    let mut error = None;
    let products = ok_or_note("products", products, &mut error);
    let categories = ok_or_note("categories", categories, &mut error);
    let suppliers = ok_or_note("suppliers", suppliers, &mut error);
    let transactions = ok_or_note("transactions", transactions, &mut error);

    let stock_in: i64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::StockIn)
        .map(|t| t.quantity)
        .sum();
    let stock_out: i64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::StockOut)
        .map(|t| t.quantity)
        .sum();

    DashboardTemplate {
        nav: visible_entries(user.permission_level),
        user_name: user.user.name,
        product_count: products.len(),
        category_count: categories.len(),
        supplier_count: suppliers.len(),
        transaction_count: transactions.len(),
        stock_in,
        stock_out,
        error,
    }
    .into_response()
}
