//! Request augmentation hook.
//!
//! Runs before every outgoing request. The store is re-read at send
//! time, not at enqueue time, so a request issued after a purge but
//! before re-authentication goes out anonymous rather than with a
//! stale credential.

use pylon_domain::RequestSpec;

use crate::session::TokenStore;

/// Name of the credential header.
pub(crate) const AUTHORIZATION: &str = "Authorization";

/// Attaches the stored bearer credential to `request`, if one is held.
///
/// A missing token is a valid state, not an error: the request then
/// proceeds unauthenticated and the server decides whether that is
/// acceptable. Never mutates the store and never fails.
pub async fn attach_credentials(store: &TokenStore, request: &mut RequestSpec) {
    if let Some(token) = store.get().await {
        request.set_header(AUTHORIZATION, token.authorization_header());
    }
}
