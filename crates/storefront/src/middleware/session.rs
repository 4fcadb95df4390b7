//! Session middleware configuration.
//!
//! The session plays the role of browser storage: it is keyed by a cookie, so
//! all tabs of one browser profile share the same cart, and nothing ties it to
//! an account. Sessions are held in memory and vanish on restart.
//!
//! [`CartSessionStore`] bounds that memory: records idle longer than the
//! session expiry are dropped, and past `max_sessions` the least recently used
//! sessions are evicted.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tower_sessions::{
    Expiry, SessionManagerLayer, SessionStore,
    cookie::time::{self, OffsetDateTime},
    session::{Id, Record},
    session_store,
};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "lectio_session";

/// Session expiry time in seconds (30 days of inactivity).
const SESSION_EXPIRY_SECONDS: i64 = 30 * 24 * 60 * 60;

/// In-memory session store with idle expiry and a capacity bound.
#[derive(Debug, Clone)]
pub struct CartSessionStore {
    cache: Cache<Id, Record>,
}

impl CartSessionStore {
    /// Create a store holding at most `max_sessions` records, each dropped
    /// after `idle` without access.
    #[must_use]
    pub fn new(max_sessions: u64, idle: Duration) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(max_sessions)
                .time_to_idle(idle)
                .build(),
        }
    }

    /// Number of sessions currently held (approximate until pending
    /// maintenance has run).
    #[must_use]
    pub fn session_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Apply pending evictions and expirations.
    pub async fn run_maintenance(&self) {
        self.cache.run_pending_tasks().await;
    }
}

#[async_trait]
impl SessionStore for CartSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        while self.cache.contains_key(&record.id) {
            record.id = Id::default();
        }
        self.cache.insert(record.id, record.clone()).await;
        Ok(())
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.cache.insert(record.id, record.clone()).await;
        Ok(())
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let Some(record) = self.cache.get(session_id).await else {
            return Ok(None);
        };
        if record.expiry_date <= OffsetDateTime::now_utc() {
            self.cache.invalidate(session_id).await;
            return Ok(None);
        }
        Ok(Some(record))
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        self.cache.invalidate(session_id).await;
        Ok(())
    }
}

/// Create the session layer over a bounded in-memory store.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<CartSessionStore> {
    let idle = Duration::from_secs(SESSION_EXPIRY_SECONDS.unsigned_abs());
    SessionManagerLayer::new(CartSessionStore::new(config.max_sessions, idle))
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(time::Duration::seconds(
            SESSION_EXPIRY_SECONDS,
        )))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
