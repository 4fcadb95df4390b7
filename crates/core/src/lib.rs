//! Lectio Core - Catalogue and cart types.
//!
//! This crate provides the domain types shared by the storefront and its tests:
//!
//! - [`types`] - Newtype wrappers for product ids, categories and prices
//! - [`catalogue`] - The immutable product list and its category grouping
//! - [`cart`] - The ordered product-id → quantity mapping kept in browser storage
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no storage
//! backends, no HTTP. Persisting a cart is the storefront's job; this crate only
//! defines its JSON shape.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalogue;
pub mod types;

pub use cart::Cart;
pub use catalogue::{Catalogue, CatalogueError, Product};
pub use types::*;
