//! Cart persistence and cart operations.
//!
//! [`CartStore`] reads and writes the serialized cart under [`CART_KEY`].
//! [`CartService`] runs the cart-mutating operations; each one is a single
//! read-modify-persist sequence returning the refreshed item count so callers
//! can update the cart badge.

use lectio_core::{Cart, ProductId};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

use crate::storage::{CART_KEY, KeyValueStore, StorageError};

/// Errors raised by cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Invalid quantity: {0:?}")]
    InvalidQuantity(String),
}

/// Loads and saves the cart in a visitor's key-value store.
#[derive(Debug, Clone)]
pub struct CartStore<S> {
    storage: S,
}

impl<S: KeyValueStore> CartStore<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the persisted cart.
    ///
    /// A missing key is an empty cart. Malformed stored content is also read
    /// as an empty cart; it stays in storage until the next save replaces it.
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage backend fails.
    pub async fn load(&self) -> Result<Cart, CartError> {
        let Some(raw) = self.storage.get_item(CART_KEY).await? else {
            return Ok(Cart::new());
        };

        match serde_json::from_str::<Cart>(&raw) {
            Ok(cart) => Ok(cart),
            Err(e) => {
                tracing::warn!(error = %e, "Stored cart is malformed, treating as empty");
                Ok(Cart::new())
            }
        }
    }

    /// Persist the full cart, replacing prior contents.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage backend fails.
    pub async fn save(&self, cart: &Cart) -> Result<(), CartError> {
        let json = serde_json::to_string(cart)?;
        self.storage.set_item(CART_KEY, json).await?;
        Ok(())
    }

    /// Current total item count (sum of quantities).
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn item_count(&self) -> Result<u32, CartError> {
        Ok(self.load().await?.item_count())
    }

    /// Persist an empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn clear(&self) -> Result<(), CartError> {
        self.save(&Cart::new()).await
    }
}

/// The cart after a mutating operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartUpdate {
    pub cart: Cart,
    /// Refreshed value for the cart badge.
    pub item_count: u32,
}

impl CartUpdate {
    fn new(cart: Cart) -> Self {
        let item_count = cart.item_count();
        Self { cart, item_count }
    }
}

/// Cart-mutating operations.
#[derive(Debug, Clone)]
pub struct CartService<S> {
    store: CartStore<S>,
}

impl<S: KeyValueStore> CartService<S> {
    pub const fn new(storage: S) -> Self {
        Self {
            store: CartStore::new(storage),
        }
    }

    #[must_use]
    pub const fn store(&self) -> &CartStore<S> {
        &self.store
    }

    /// Add one unit of a product.
    ///
    /// No catalogue-membership check happens here; unknown ids are stored and
    /// simply never displayed.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    pub async fn add(&self, product_id: ProductId) -> Result<CartUpdate, CartError> {
        let mut cart = self.store.load().await?;
        let quantity = cart.increment(product_id.clone());
        self.store.save(&cart).await?;
        tracing::info!(product_id = %product_id, quantity, "Added to cart");
        Ok(CartUpdate::new(cart))
    }

    /// Remove a product's entry.
    ///
    /// Returns `None` without persisting anything if the product was not in
    /// the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    pub async fn remove(&self, product_id: &str) -> Result<Option<CartUpdate>, CartError> {
        let mut cart = self.store.load().await?;
        if cart.remove(product_id).is_none() {
            tracing::debug!(product_id, "Remove ignored, product not in cart");
            return Ok(None);
        }
        self.store.save(&cart).await?;
        tracing::info!(product_id, "Removed from cart");
        Ok(Some(CartUpdate::new(cart)))
    }

    /// Set a product's quantity exactly; zero or less removes the entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    pub async fn set_quantity(
        &self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<CartUpdate, CartError> {
        let mut cart = self.store.load().await?;
        cart.set_quantity(product_id.clone(), quantity);
        self.store.save(&cart).await?;
        tracing::info!(product_id = %product_id, quantity, "Cart quantity set");
        Ok(CartUpdate::new(cart))
    }

    /// Complete the mock checkout by clearing the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    pub async fn complete_checkout(&self) -> Result<CartUpdate, CartError> {
        let cleared = self.store.load().await?.item_count();
        self.store.clear().await?;
        tracing::info!(items = cleared, "Checkout completed, cart cleared");
        Ok(CartUpdate::new(Cart::new()))
    }
}

/// Parse a raw quantity field value.
///
/// Integers are taken as-is; decimals are truncated toward zero (`"2.7"` → 2).
/// Values above `u32::MAX` and non-numeric input are rejected.
///
/// # Errors
///
/// Returns `CartError::InvalidQuantity` when the input is not a usable number.
pub fn parse_quantity(raw: &str) -> Result<i64, CartError> {
    let trimmed = raw.trim();
    let invalid = || CartError::InvalidQuantity(raw.to_owned());

    let quantity = match trimmed.parse::<i64>() {
        Ok(quantity) => quantity,
        Err(_) => trimmed
            .parse::<Decimal>()
            .map_err(|_| invalid())?
            .trunc()
            .to_i64()
            .ok_or_else(invalid)?,
    };

    if quantity > i64::from(u32::MAX) {
        return Err(invalid());
    }
    Ok(quantity)
}
