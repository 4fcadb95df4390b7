//! Lectio storefront library.
//!
//! Serves the slide deck catalogue, product detail, cart, and checkout pages.
//! Carts live in each visitor's session. Exposed as a library so the
//! integration tests can drive the full router.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalogue;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
pub mod views;
