//! Wire records served by the inventory API.
//!
//! Field names follow the API's JSON: Mongo-style `_id` identifiers,
//! camelCase references, RFC 3339 timestamps. Records referencing other
//! records arrive populated with a [`NamedRef`] (`{_id, name}`); references
//! can be absent on rows whose target was deleted, so they are optional
//! everywhere and rendered as a placeholder when missing.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A populated reference to another record: its id plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A stocked product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "categoryId", default)]
    pub category: Option<NamedRef>,
    #[serde(rename = "supplierId", default)]
    pub supplier: Option<NamedRef>,
}

/// Supplier contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "contactNumber")]
    pub contact_number: String,
    pub address: String,
}

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionKind {
    StockIn,
    StockOut,
}

impl TransactionKind {
    /// Human-readable label for tables and select options.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StockIn => "Stock in",
            Self::StockOut => "Stock out",
        }
    }

    /// The wire value (`stock-in` / `stock-out`), used as a form value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StockIn => "stock-in",
            Self::StockOut => "stock-out",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stock-in" => Ok(Self::StockIn),
            "stock-out" => Ok(Self::StockOut),
            _ => Err(()),
        }
    }
}

/// A stock movement against a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "productId", default)]
    pub product: Option<NamedRef>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub quantity: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "userId", default)]
    pub user: Option<NamedRef>,
}

/// What an audit log entry records having happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl AuditAction {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Create => "Created",
            Self::Update => "Updated",
            Self::Delete => "Deleted",
        }
    }
}

/// One entry of the server-maintained audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub action: AuditAction,
    #[serde(rename = "performedBy", default)]
    pub performed_by: Option<NamedRef>,
    pub model: String,
    #[serde(rename = "modelId")]
    pub model_id: String,
    pub timestamp: DateTime<Utc>,
}

/// The logged-in operator as the auth endpoint returns them.
///
/// Replaced wholesale on login, never mutated in place. The API also sends
/// a password hash field; it is deliberately not modeled and falls away
/// during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload of a successful `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginPayload {
    pub user: UserRecord,
    pub token: String,
}
