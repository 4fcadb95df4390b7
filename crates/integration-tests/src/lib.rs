//! Integration tests for the Lectio storefront.
//!
//! Tests drive the full router in-process with `tower::ServiceExt::oneshot`,
//! so no server or network is needed:
//!
//! ```bash
//! cargo test -p lectio-integration-tests
//! ```
//!
//! [`Browser`] carries the session cookie between requests the way one
//! browser profile does; every tab of that profile shares the same cart.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::expect_used, clippy::missing_panics_doc)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use lectio_storefront::{catalogue, config::StorefrontConfig, routes, state::AppState};
use tower::ServiceExt;

/// A response with its body read into a string.
#[derive(Debug)]
pub struct Page {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl Page {
    /// Value of a response header, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Build the storefront router with the bundled catalogue and default config.
#[must_use]
pub fn test_app() -> Router {
    let catalogue = catalogue::bundled().expect("bundled catalogue is valid");
    routes::app(AppState::new(StorefrontConfig::default(), catalogue))
}

/// One browser profile: a router plus the session cookie it was handed.
pub struct Browser {
    app: Router,
    cookie: Option<String>,
}

impl Default for Browser {
    fn default() -> Self {
        Self::new()
    }
}

impl Browser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            app: test_app(),
            cookie: None,
        }
    }

    /// A second browser profile against the same server: same app, no cookie.
    #[must_use]
    pub fn fresh_profile(&self) -> Self {
        Self {
            app: self.app.clone(),
            cookie: None,
        }
    }

    pub async fn get(&mut self, uri: &str) -> Page {
        let request = self.request("GET", uri).body(Body::empty());
        self.send(request.expect("valid request")).await
    }

    /// POST an urlencoded form, e.g. `product_id=lent&quantity=2`.
    pub async fn post_form(&mut self, uri: &str, form: &str) -> Page {
        let request = self
            .request("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()));
        self.send(request.expect("valid request")).await
    }

    pub async fn add(&mut self, product_id: &str) -> Page {
        self.post_form("/cart/add", &format!("product_id={product_id}"))
            .await
    }

    /// The cart count as shown on the `/cart/count` badge.
    pub async fn cart_count(&mut self) -> String {
        let page = self.get("/cart/count").await;
        let body = page.body;
        let start = body.find('>').expect("badge markup") + 1;
        let end = body.rfind("</span>").expect("badge markup");
        body.get(start..end).expect("badge text").trim().to_string()
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie.as_str()),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> Page {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(pair) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
        {
            self.cookie = Some(pair.to_string());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body is readable");
        let body = String::from_utf8(bytes.to_vec()).expect("body is UTF-8");

        Page {
            status,
            headers,
            body,
        }
    }
}
