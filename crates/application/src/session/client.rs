//! Authenticated HTTP client pipeline.
//!
//! `SessionClient` wraps any [`HttpClient`] and fixes the middleware
//! order as an explicit contract: credentials are attached immediately
//! before the inner send, and the response guard runs on everything the
//! inner client returns, success or failure.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use pylon_domain::{RequestSpec, ResponseSpec};

use crate::ports::{HttpClient, HttpClientError};
use crate::session::{TokenStore, attach_credentials, inspect_response};

/// Notification invoked when the server rejects the credential.
///
/// Invoked once per detected 401, independently per concurrently
/// failing response, so implementations must be idempotent.
pub type UnauthenticatedHook = Arc<dyn Fn() + Send + Sync>;

/// An [`HttpClient`] that attaches the session credential to every
/// request and purges it on server-signaled authentication failure.
pub struct SessionClient<C> {
    inner: C,
    store: TokenStore,
    on_unauthenticated: UnauthenticatedHook,
}

impl<C> SessionClient<C> {
    /// Wraps `inner`, reading credentials from `store` and reporting
    /// authentication failure through `on_unauthenticated`.
    pub fn new(inner: C, store: TokenStore, on_unauthenticated: UnauthenticatedHook) -> Self {
        Self {
            inner,
            store,
            on_unauthenticated,
        }
    }

    /// The token store backing this client.
    #[must_use]
    pub const fn store(&self) -> &TokenStore {
        &self.store
    }
}

impl<C: HttpClient> HttpClient for SessionClient<C> {
    fn execute<'a>(
        &'a self,
        request: &'a RequestSpec,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + 'a>> {
        Box::pin(async move {
            // The store is read here, at send time, never earlier.
            let mut request = request.clone();
            attach_credentials(&self.store, &mut request).await;

            let result = self.inner.execute(&request).await;

            inspect_response(&self.store, result, self.on_unauthenticated.as_ref()).await
        })
    }
}
