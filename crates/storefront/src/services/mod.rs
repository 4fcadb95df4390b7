//! Business logic services for the storefront.
//!
//! Services sit between route handlers and storage, so handlers stay thin and
//! the logic can be tested against in-memory storage.

pub mod cart;

pub use cart::{CartError, CartService, CartStore, CartUpdate, parse_quantity};
