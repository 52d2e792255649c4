//! Cache types for inventory API list responses.

use stockpile_core::{AuditLogEntry, Category, Product, Supplier, Transaction};

/// Cache key - one per list endpoint.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Categories,
    Products,
    Suppliers,
    Transactions,
    AuditLogs,
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Categories(Vec<Category>),
    Products(Vec<Product>),
    Suppliers(Vec<Supplier>),
    Transactions(Vec<Transaction>),
    AuditLogs(Vec<AuditLogEntry>),
}

// Key and variant always agree because each loader builds its own variant;
// the empty fallback keeps the accessors total without an unreachable arm.
impl CacheValue {
    pub fn into_categories(self) -> Vec<Category> {
        match self {
            Self::Categories(list) => list,
            _ => Vec::new(),
        }
    }

    pub fn into_products(self) -> Vec<Product> {
        match self {
            Self::Products(list) => list,
            _ => Vec::new(),
        }
    }

    pub fn into_suppliers(self) -> Vec<Supplier> {
        match self {
            Self::Suppliers(list) => list,
            _ => Vec::new(),
        }
    }

    pub fn into_transactions(self) -> Vec<Transaction> {
        match self {
            Self::Transactions(list) => list,
            _ => Vec::new(),
        }
    }

    pub fn into_audit_logs(self) -> Vec<AuditLogEntry> {
        match self {
            Self::AuditLogs(list) => list,
            _ => Vec::new(),
        }
    }
}
