//! Browser-scoped key-value storage.
//!
//! The cart lives in a per-visitor string store with `localStorage`-like
//! semantics: one string value per key, last write wins, no change
//! notifications. In production the store is the visitor's session (keyed by
//! the session cookie, so every tab of one browser profile shares it); tests
//! use the in-memory store.

#[cfg(test)]
mod memory;
mod session;

use std::future::Future;

use thiserror::Error;

#[cfg(test)]
pub use memory::MemoryStorage;
pub use session::SessionStorage;

/// Storage key holding the serialized cart.
pub const CART_KEY: &str = "cart";

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Session store error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

/// A string key-value store scoped to one visitor.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get_item(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Replace the value stored under `key`.
    fn set_item(
        &self,
        key: &str,
        value: String,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;
}
