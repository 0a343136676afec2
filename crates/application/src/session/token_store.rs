//! Single-slot token storage scoped to one client session.
//!
//! The store holds at most one bearer token at any time. It is keyed by
//! an explicit storage key so its session scoping is a constructor
//! parameter rather than an implicit platform global, and so it can be
//! faked in tests.

use std::sync::Arc;

use tokio::sync::RwLock;

use pylon_domain::BearerToken;

/// Storage key identifying the credential slot.
pub const DEFAULT_STORAGE_KEY: &str = "authenticationToken";

/// Thread-safe single-slot token store.
///
/// Cloning yields another handle to the same slot. Reads and writes go
/// through one `RwLock`, so every in-flight request observes a
/// consistent value: a token is either fully present or absent, never
/// half-written.
#[derive(Debug, Clone)]
pub struct TokenStore {
    slot: Arc<RwLock<Option<BearerToken>>>,
    storage_key: Arc<str>,
}

impl TokenStore {
    /// Creates an empty store for the given storage key.
    #[must_use]
    pub fn new(storage_key: &str) -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
            storage_key: Arc::from(storage_key),
        }
    }

    /// The storage key this slot is registered under.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Returns the stored token, if any.
    pub async fn get(&self) -> Option<BearerToken> {
        let slot = self.slot.read().await;
        slot.clone()
    }

    /// Stores a token, overwriting any previous value.
    pub async fn set(&self, token: BearerToken) {
        let mut slot = self.slot.write().await;
        *slot = Some(token);
    }

    /// Purges the stored token.
    pub async fn clear(&self) {
        let mut slot = self.slot.write().await;
        *slot = None;
    }

    /// Returns true if no token is held.
    pub async fn is_empty(&self) -> bool {
        let slot = self.slot.read().await;
        slot.is_none()
    }

    /// Non-blocking emptiness probe for synchronous callers such as
    /// the unauthenticated notification hook.
    ///
    /// Returns `None` if the slot is currently write-locked.
    #[must_use]
    pub fn try_is_empty(&self) -> Option<bool> {
        self.slot.try_read().ok().map(|slot| slot.is_none())
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_KEY)
    }
}
