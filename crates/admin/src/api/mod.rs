//! Typed client for the remote inventory REST API.
//!
//! # Architecture
//!
//! - Plain REST/JSON over `reqwest`; every response is an [`Envelope`]
//! - The inventory API is the source of truth - no local sync, no database
//! - In-memory caching via `moka` for list responses (5 minute TTL)
//! - A cache key never has more than one upstream request in flight;
//!   concurrent readers await the same pending result
//! - Mutations declare the list keys they invalidate and drop them on
//!   success, so the next page render re-fetches
//!
//! # Example
//!
//! ```rust,ignore
//! use stockpile_admin::api::InventoryClient;
//!
//! let client = InventoryClient::new(&config);
//!
//! let session = client.login("ops@example.com", "hunter2").await?;
//! let categories = client.list_categories(Some(&session.token)).await?;
//! ```
//!
//! [`Envelope`]: stockpile_core::Envelope

mod cache;
mod client;

pub use client::{CategoryInput, InventoryClient, ProductInput, SupplierInput, TransactionInput};

use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur when talking to the inventory API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API rejected the bearer token (401/403).
    ///
    /// The client never clears the session on this - which screen to land
    /// on is the caller's decision.
    #[error("not authorized by the inventory API")]
    Unauthorized,

    /// Non-2xx status other than an authorization failure.
    #[error("inventory API returned HTTP {0}")]
    Status(u16),

    /// Body was not a parseable envelope.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A 2xx envelope carrying `success: false`.
    #[error("inventory API failure: {0}")]
    Api(String),

    /// A concurrent caller for the same cache key hit this error first.
    #[error(transparent)]
    Shared(#[from] Arc<ApiError>),
}

impl ApiError {
    /// True when the API rejected the bearer token, looking through the
    /// shared wrapper a cache miss produces.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::Unauthorized => true,
            Self::Shared(inner) => matches!(inner.as_ref(), Self::Unauthorized),
            _ => false,
        }
    }
}
