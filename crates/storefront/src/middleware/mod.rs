//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span carrying `request_id`)
//! 3. Request ID (accept or generate, echo in response)
//! 4. Security headers
//! 5. Session layer (tower-sessions, holds each visitor's cart)

pub mod request_id;
pub mod security_headers;
pub mod session;

pub use request_id::{REQUEST_ID_HEADER, RequestId, make_request_span, request_id_middleware};
pub use security_headers::security_headers_middleware;
pub use session::{CartSessionStore, create_session_layer};
