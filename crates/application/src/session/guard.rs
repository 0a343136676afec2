//! Response guard hook.
//!
//! Runs on every response before it is delivered to the caller. A 401
//! is treated as authoritative, terminal evidence that the current
//! token is invalid: the store is purged, the session layer is
//! notified, and the original result still reaches the caller so its
//! own failure handling fires. Every other status passes through
//! untouched.

use pylon_domain::{ResponseSpec, StatusCode};

use crate::ports::HttpClientError;
use crate::session::TokenStore;

/// Resolves the status a result should be judged by: an explicit
/// status on the error wins, then the response's own status, then a
/// neutral `0` that matches nothing.
fn effective_status(result: &Result<ResponseSpec, HttpClientError>) -> u16 {
    match result {
        Ok(response) => response.status.as_u16(),
        Err(error) => error.status().unwrap_or(0),
    }
}

/// Inspects a received result for authentication failure.
///
/// On a 401 the store is purged **before** `on_unauthenticated` runs,
/// so code reacting to the notification observes an empty store. The
/// hook fires once per failing response; concurrent failures each
/// invoke it independently, so it must be idempotent. The result is
/// returned unchanged in all cases: the guard enriches, never
/// swallows.
pub async fn inspect_response(
    store: &TokenStore,
    result: Result<ResponseSpec, HttpClientError>,
    on_unauthenticated: &(dyn Fn() + Send + Sync),
) -> Result<ResponseSpec, HttpClientError> {
    if effective_status(&result) == StatusCode::UNAUTHORIZED.as_u16() {
        store.clear().await;
        tracing::info!(
            storage_key = store.storage_key(),
            "server rejected credential, purged token"
        );
        on_unauthenticated();
    }
    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use pretty_assertions::assert_eq;
    use pylon_domain::BearerToken;

    use super::*;

    fn response(status: u16) -> ResponseSpec {
        ResponseSpec::new(status, HashMap::new(), Vec::new())
    }

    async fn store_with_token() -> TokenStore {
        let store = TokenStore::default();
        store.set(BearerToken::new("tok").unwrap()).await;
        store
    }

    #[tokio::test]
    async fn test_purges_and_notifies_on_401_response() {
        let store = store_with_token().await;
        let calls = Arc::new(AtomicU32::new(0));
        let hook = {
            let calls = Arc::clone(&calls);
            move || {
                calls.fetch_add(1, Ordering::SeqCst);
            }
        };

        let result = inspect_response(&store, Ok(response(401)), &hook).await;

        assert!(store.is_empty().await);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        // The original result still reaches the caller.
        assert_eq!(result.unwrap().status.as_u16(), 401);
    }

    #[tokio::test]
    async fn test_purges_on_401_error_status() {
        let store = store_with_token().await;
        let calls = Arc::new(AtomicU32::new(0));
        let hook = {
            let calls = Arc::clone(&calls);
            move || {
                calls.fetch_add(1, Ordering::SeqCst);
            }
        };

        let failure = HttpClientError::Status {
            code: 401,
            message: "Unauthorized".to_string(),
        };
        let result = inspect_response(&store, Err(failure.clone()), &hook).await;

        assert!(store.is_empty().await);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(result.unwrap_err(), failure);
    }

    #[tokio::test]
    async fn test_passes_through_other_statuses() {
        let store = store_with_token().await;
        let calls = Arc::new(AtomicU32::new(0));
        let hook = {
            let calls = Arc::clone(&calls);
            move || {
                calls.fetch_add(1, Ordering::SeqCst);
            }
        };

        let result = inspect_response(&store, Ok(response(500)), &hook).await;

        assert_eq!(store.get().await.unwrap().as_str(), "tok");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(result.unwrap().status.as_u16(), 500);
    }

    #[tokio::test]
    async fn test_transport_errors_never_purge() {
        let store = store_with_token().await;
        let hook = || panic!("hook must not fire on transport errors");

        let failure = HttpClientError::Timeout { timeout_ms: 30_000 };
        let result = inspect_response(&store, Err(failure.clone()), &hook).await;

        assert!(!store.is_empty().await);
        assert_eq!(result.unwrap_err(), failure);
    }

    #[tokio::test]
    async fn test_hook_observes_empty_store() {
        let store = store_with_token().await;
        // Purge happens-before the notification: the hook sees no token.
        let observed = Arc::new(AtomicU32::new(u32::MAX));
        let hook = {
            let store = store.clone();
            let observed = Arc::clone(&observed);
            move || {
                let empty = store.try_is_empty().unwrap_or(false);
                observed.store(u32::from(empty), Ordering::SeqCst);
            }
        };

        inspect_response(&store, Ok(response(401)), &hook).await;

        assert_eq!(observed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_effective_status_defaults_to_neutral() {
        let err: Result<ResponseSpec, HttpClientError> =
            Err(HttpClientError::Other("boom".to_string()));
        assert_eq!(effective_status(&err), 0);
    }
}
