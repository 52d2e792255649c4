//! A minimal in-process stand-in for the inventory REST API.
//!
//! Speaks the same envelope contract as the real service and keeps its
//! records in memory. The category list endpoint counts its hits and holds
//! each response briefly so tests can assert request de-duplication; the
//! audit log endpoint deliberately answers with `data: null` to exercise
//! the defensive envelope handling end to end.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use stockpile_core::{Category, Envelope, LoginPayload, UserRecord};

/// Seeded super-admin operator.
pub const ADMIN_EMAIL: &str = "priya@example.com";
pub const ADMIN_PASSWORD: &str = "quartz-heron-visits-9";
pub const ADMIN_NAME: &str = "Priya Shah";
pub const ADMIN_TOKEN: &str = "bearer-token-priya";

/// Seeded restricted operator (role `manager`, permission level 2).
pub const MANAGER_EMAIL: &str = "aisha@example.com";
pub const MANAGER_PASSWORD: &str = "amber-otter-naps-4";
pub const MANAGER_NAME: &str = "Aisha Kapoor";
pub const MANAGER_TOKEN: &str = "bearer-token-aisha";

/// Shared state behind the fake endpoints.
#[derive(Clone, Default)]
struct FakeState {
    categories: Arc<Mutex<Vec<Category>>>,
    category_hits: Arc<AtomicUsize>,
}

/// Handle to a running fake API.
pub struct FakeApi {
    /// Base URL to point an `InventoryClient` or `AdminConfig` at.
    pub base_url: String,
    state: FakeState,
}

impl FakeApi {
    /// How many times the category list endpoint was hit.
    #[must_use]
    pub fn category_list_hits(&self) -> usize {
        self.state.category_hits.load(Ordering::SeqCst)
    }

    /// Look up a stored category id by name.
    #[must_use]
    pub fn category_id(&self, name: &str) -> Option<String> {
        self.state
            .categories
            .lock()
            .expect("category store lock")
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.id.clone())
    }
}

/// Start the fake API on an ephemeral port.
pub async fn spawn() -> FakeApi {
    let state = FakeState::default();
    let router = router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake api listener");
    let addr = listener.local_addr().expect("fake api listener address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("fake api server");
    });

    FakeApi {
        base_url: format!("http://{addr}"),
        state,
    }
}

fn router(state: FakeState) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/category/getCategories", get(list_categories))
        .route("/api/category/createCategory", post(create_category))
        .route("/api/category/updateCategory/{id}", put(update_category))
        .route("/api/category/deleteCategory/{id}", delete(delete_category))
        .route("/api/product/getProducts", get(empty_list))
        .route("/api/supplier/getSuppliers", get(empty_list))
        .route("/api/transaction/getTransactions", get(empty_list))
        .route("/api/auditlog/getAuditLogs", get(null_payload))
        .with_state(state)
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| {
            v == format!("Bearer {ADMIN_TOKEN}") || v == format!("Bearer {MANAGER_TOKEN}")
        })
}

fn seeded_user(name: &str, email: &str, role: &str) -> UserRecord {
    UserRecord {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        created_at: Some(Utc::now()),
        updated_at: Some(Utc::now()),
    }
}

async fn login(Json(body): Json<Value>) -> Json<Envelope<LoginPayload>> {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    let payload = if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
        Some(LoginPayload {
            user: seeded_user(ADMIN_NAME, ADMIN_EMAIL, "admin"),
            token: ADMIN_TOKEN.to_string(),
        })
    } else if email == MANAGER_EMAIL && password == MANAGER_PASSWORD {
        Some(LoginPayload {
            user: seeded_user(MANAGER_NAME, MANAGER_EMAIL, "manager"),
            token: MANAGER_TOKEN.to_string(),
        })
    } else {
        None
    };

    match payload {
        Some(payload) => Json(Envelope::ok("Login successful", payload)),
        None => Json(Envelope::err("Invalid email or password")),
    }
}

async fn list_categories(State(state): State<FakeState>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    state.category_hits.fetch_add(1, Ordering::SeqCst);
    // Hold the response briefly so concurrent callers overlap reliably.
    tokio::time::sleep(Duration::from_millis(25)).await;

    let list = state.categories.lock().expect("category store lock").clone();
    Json(Envelope::ok("", list)).into_response()
}

async fn create_category(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let category = Category {
        id: Uuid::new_v4().to_string(),
        name: body["name"].as_str().unwrap_or_default().to_string(),
        description: body["description"].as_str().unwrap_or_default().to_string(),
    };
    state
        .categories
        .lock()
        .expect("category store lock")
        .push(category);

    Json(Envelope::ok("Category created", Value::Null)).into_response()
}

async fn update_category(
    State(state): State<FakeState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let mut categories = state.categories.lock().expect("category store lock");
    match categories.iter_mut().find(|c| c.id == id) {
        Some(category) => {
            if let Some(name) = body["name"].as_str() {
                category.name = name.to_string();
            }
            if let Some(description) = body["description"].as_str() {
                category.description = description.to_string();
            }
            Json(Envelope::ok("Category updated", Value::Null)).into_response()
        }
        None => Json(Envelope::<Value>::err("Category not found")).into_response(),
    }
}

async fn delete_category(
    State(state): State<FakeState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let mut categories = state.categories.lock().expect("category store lock");
    let before = categories.len();
    categories.retain(|c| c.id != id);

    if categories.len() < before {
        Json(Envelope::ok("Category deleted", Value::Null)).into_response()
    } else {
        Json(Envelope::<Value>::err("Category not found")).into_response()
    }
}

async fn empty_list() -> Json<Envelope<Vec<Value>>> {
    Json(Envelope::ok("", Vec::new()))
}

/// A syntactically successful envelope whose payload is `null` - the shape
/// the defensive parsing must collapse to an empty list.
async fn null_payload() -> Json<Value> {
    Json(serde_json::json!({
        "success": true,
        "message": "",
        "data": null,
    }))
}
