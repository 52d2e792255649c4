//! Inventory API client implementation.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::{Method, StatusCode};
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use stockpile_core::{
    AuditLogEntry, Category, Envelope, LoginPayload, Product, Supplier, Transaction,
    TransactionKind,
};

use super::ApiError;
use super::cache::{CacheKey, CacheValue};
use crate::config::AdminConfig;

/// How long a cached list stays fresh unless a mutation invalidates it.
const CACHE_TTL: Duration = Duration::from_secs(300);

const CACHE_CAPACITY: u64 = 1000;

// =============================================================================
// Mutation inputs
// =============================================================================

/// Input for creating or updating a category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInput {
    pub name: String,
    pub description: String,
}

/// Input for creating or updating a product.
#[derive(Debug, Clone, Serialize)]
pub struct ProductInput {
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    #[serde(rename = "supplierId")]
    pub supplier_id: String,
}

/// Input for creating or updating a supplier.
#[derive(Debug, Clone, Serialize)]
pub struct SupplierInput {
    pub name: String,
    pub email: String,
    #[serde(rename = "contactNumber")]
    pub contact_number: String,
    pub address: String,
}

/// Input for creating or updating a stock transaction.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionInput {
    #[serde(rename = "productId")]
    pub product_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Login request body.
#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

// =============================================================================
// InventoryClient
// =============================================================================

/// Client for the remote inventory REST API.
///
/// Cheaply cloneable; all clones share one connection pool and one response
/// cache. List reads go through the cache: the first caller for a key
/// triggers the upstream request, concurrent callers await that same
/// request, and later callers get the cached value until the TTL expires or
/// a mutation invalidates the key.
#[derive(Clone)]
pub struct InventoryClient {
    inner: Arc<InventoryClientInner>,
}

struct InventoryClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<CacheKey, CacheValue>,
}

impl InventoryClient {
    /// Create a new inventory API client.
    #[must_use]
    pub fn new(config: &AdminConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(InventoryClientInner {
                client: reqwest::Client::new(),
                base_url: config.api_url.clone(),
                cache,
            }),
        }
    }

    /// Build a request, attaching the bearer token when one is supplied.
    fn request(&self, method: Method, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.inner.base_url);
        let builder = self.inner.client.request(method, url);
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and decode the envelope, enforcing `success: true`.
    ///
    /// Every call goes through here, so a `success: false` envelope can
    /// never be mistaken for a completed operation.
    async fn send<T>(&self, request: reqwest::RequestBuilder) -> Result<Envelope<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized);
        }

        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "inventory API returned non-success status"
            );
            return Err(ApiError::Status(status.as_u16()));
        }

        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(200).collect::<String>(),
                "failed to parse inventory API response"
            );
            ApiError::from(e)
        })?;

        if !envelope.success {
            return Err(ApiError::Api(envelope.message));
        }

        Ok(envelope)
    }

    /// GET a list endpoint, collapsing an absent or malformed payload to an
    /// empty list.
    async fn get_list<T>(&self, path: &str, token: Option<&str>) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let envelope: Envelope<Vec<T>> = self.send(self.request(Method::GET, path, token)).await?;
        Ok(envelope.data_or_default())
    }

    /// Run a mutation, dropping the declared cache keys on success.
    async fn mutate(
        &self,
        request: reqwest::RequestBuilder,
        invalidates: &[CacheKey],
    ) -> Result<(), ApiError> {
        let _: Envelope<serde_json::Value> = self.send(request).await?;
        for key in invalidates {
            self.inner.cache.invalidate(key).await;
        }
        Ok(())
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Authenticate against `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// `ApiError::Api` carries the server's message on rejected credentials;
    /// a well-formed success without a payload is treated the same way.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginPayload, ApiError> {
        let body = LoginRequest { email, password };
        let envelope: Envelope<LoginPayload> = self
            .send(
                self.request(Method::POST, "/api/auth/login", None)
                    .json(&body),
            )
            .await?;

        envelope
            .data
            .ok_or_else(|| ApiError::Api("login response carried no user".to_string()))
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// List all categories (cached).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports failure.
    pub async fn list_categories(&self, token: Option<&str>) -> Result<Vec<Category>, ApiError> {
        let value = self
            .inner
            .cache
            .try_get_with(CacheKey::Categories, async {
                let list = self.get_list("/api/category/getCategories", token).await?;
                Ok::<_, ApiError>(CacheValue::Categories(list))
            })
            .await?;
        Ok(value.into_categories())
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports failure.
    pub async fn create_category(
        &self,
        token: Option<&str>,
        input: &CategoryInput,
    ) -> Result<(), ApiError> {
        self.mutate(
            self.request(Method::POST, "/api/category/createCategory", token)
                .json(input),
            &[CacheKey::Categories, CacheKey::AuditLogs],
        )
        .await
    }

    /// Update a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports failure.
    pub async fn update_category(
        &self,
        token: Option<&str>,
        id: &str,
        input: &CategoryInput,
    ) -> Result<(), ApiError> {
        self.mutate(
            self.request(
                Method::PUT,
                &format!("/api/category/updateCategory/{id}"),
                token,
            )
            .json(input),
            &[CacheKey::Categories, CacheKey::AuditLogs],
        )
        .await
    }

    /// Delete a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports failure.
    pub async fn delete_category(&self, token: Option<&str>, id: &str) -> Result<(), ApiError> {
        self.mutate(
            self.request(
                Method::DELETE,
                &format!("/api/category/deleteCategory/{id}"),
                token,
            ),
            &[CacheKey::Categories, CacheKey::AuditLogs],
        )
        .await
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// List all products (cached).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports failure.
    pub async fn list_products(&self, token: Option<&str>) -> Result<Vec<Product>, ApiError> {
        let value = self
            .inner
            .cache
            .try_get_with(CacheKey::Products, async {
                let list = self.get_list("/api/product/getProducts", token).await?;
                Ok::<_, ApiError>(CacheValue::Products(list))
            })
            .await?;
        Ok(value.into_products())
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports failure.
    pub async fn create_product(
        &self,
        token: Option<&str>,
        input: &ProductInput,
    ) -> Result<(), ApiError> {
        self.mutate(
            self.request(Method::POST, "/api/product/createProduct", token)
                .json(input),
            &[CacheKey::Products, CacheKey::AuditLogs],
        )
        .await
    }

    /// Update a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports failure.
    pub async fn update_product(
        &self,
        token: Option<&str>,
        id: &str,
        input: &ProductInput,
    ) -> Result<(), ApiError> {
        self.mutate(
            self.request(
                Method::PUT,
                &format!("/api/product/updateProduct/{id}"),
                token,
            )
            .json(input),
            &[CacheKey::Products, CacheKey::AuditLogs],
        )
        .await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports failure.
    pub async fn delete_product(&self, token: Option<&str>, id: &str) -> Result<(), ApiError> {
        self.mutate(
            self.request(
                Method::DELETE,
                &format!("/api/product/deleteProduct/{id}"),
                token,
            ),
            &[CacheKey::Products, CacheKey::AuditLogs],
        )
        .await
    }

    // =========================================================================
    // Suppliers
    // =========================================================================

    /// List all suppliers (cached).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports failure.
    pub async fn list_suppliers(&self, token: Option<&str>) -> Result<Vec<Supplier>, ApiError> {
        let value = self
            .inner
            .cache
            .try_get_with(CacheKey::Suppliers, async {
                let list = self.get_list("/api/supplier/getSuppliers", token).await?;
                Ok::<_, ApiError>(CacheValue::Suppliers(list))
            })
            .await?;
        Ok(value.into_suppliers())
    }

    /// Create a supplier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports failure.
    pub async fn create_supplier(
        &self,
        token: Option<&str>,
        input: &SupplierInput,
    ) -> Result<(), ApiError> {
        self.mutate(
            self.request(Method::POST, "/api/supplier/createSupplier", token)
                .json(input),
            &[CacheKey::Suppliers, CacheKey::AuditLogs],
        )
        .await
    }

    /// Update a supplier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports failure.
    pub async fn update_supplier(
        &self,
        token: Option<&str>,
        id: &str,
        input: &SupplierInput,
    ) -> Result<(), ApiError> {
        self.mutate(
            self.request(
                Method::PUT,
                &format!("/api/supplier/updateSupplier/{id}"),
                token,
            )
            .json(input),
            &[CacheKey::Suppliers, CacheKey::AuditLogs],
        )
        .await
    }

    /// Delete a supplier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports failure.
    pub async fn delete_supplier(&self, token: Option<&str>, id: &str) -> Result<(), ApiError> {
        self.mutate(
            self.request(
                Method::DELETE,
                &format!("/api/supplier/deleteSupplier/{id}"),
                token,
            ),
            &[CacheKey::Suppliers, CacheKey::AuditLogs],
        )
        .await
    }

    // =========================================================================
    // Transactions
    // =========================================================================

    /// List all stock transactions (cached).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports failure.
    pub async fn list_transactions(
        &self,
        token: Option<&str>,
    ) -> Result<Vec<Transaction>, ApiError> {
        let value = self
            .inner
            .cache
            .try_get_with(CacheKey::Transactions, async {
                let list = self
                    .get_list("/api/transaction/getTransactions", token)
                    .await?;
                Ok::<_, ApiError>(CacheValue::Transactions(list))
            })
            .await?;
        Ok(value.into_transactions())
    }

    /// Create a stock transaction.
    ///
    /// Transactions move stock, so product quantities are invalidated too.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports failure.
    pub async fn create_transaction(
        &self,
        token: Option<&str>,
        input: &TransactionInput,
    ) -> Result<(), ApiError> {
        self.mutate(
            self.request(Method::POST, "/api/transaction/createTransaction", token)
                .json(input),
            &[
                CacheKey::Transactions,
                CacheKey::Products,
                CacheKey::AuditLogs,
            ],
        )
        .await
    }

    /// Update a stock transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports failure.
    pub async fn update_transaction(
        &self,
        token: Option<&str>,
        id: &str,
        input: &TransactionInput,
    ) -> Result<(), ApiError> {
        self.mutate(
            self.request(
                Method::PUT,
                &format!("/api/transaction/updateTransaction/{id}"),
                token,
            )
            .json(input),
            &[
                CacheKey::Transactions,
                CacheKey::Products,
                CacheKey::AuditLogs,
            ],
        )
        .await
    }

    /// Delete a stock transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports failure.
    pub async fn delete_transaction(&self, token: Option<&str>, id: &str) -> Result<(), ApiError> {
        self.mutate(
            self.request(
                Method::DELETE,
                &format!("/api/transaction/deleteTransaction/{id}"),
                token,
            ),
            &[
                CacheKey::Transactions,
                CacheKey::Products,
                CacheKey::AuditLogs,
            ],
        )
        .await
    }

    // =========================================================================
    // Audit log
    // =========================================================================

    /// List the audit trail (cached, read-only upstream).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports failure.
    pub async fn list_audit_logs(
        &self,
        token: Option<&str>,
    ) -> Result<Vec<AuditLogEntry>, ApiError> {
        let value = self
            .inner
            .cache
            .try_get_with(CacheKey::AuditLogs, async {
                let list = self.get_list("/api/auditlog/getAuditLogs", token).await?;
                Ok::<_, ApiError>(CacheValue::AuditLogs(list))
            })
            .await?;
        Ok(value.into_audit_logs())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn product_input_serializes_with_wire_field_names() {
        let input = ProductInput {
            name: "Claw Hammer".to_string(),
            sku: "HAM-001".to_string(),
            quantity: 12,
            price: Decimal::new(1999, 2),
            category_id: "c1".to_string(),
            supplier_id: "s1".to_string(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["categoryId"], "c1");
        assert_eq!(json["supplierId"], "s1");
        assert!((json["price"].as_f64().unwrap() - 19.99).abs() < f64::EPSILON);
    }

    #[test]
    fn transaction_input_uses_the_type_keyword_on_the_wire() {
        let input = TransactionInput {
            product_id: "p1".to_string(),
            kind: TransactionKind::StockIn,
            quantity: 5,
            description: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["type"], "stock-in");
        assert_eq!(json["productId"], "p1");
        assert!(json.get("description").is_none());
    }
}
