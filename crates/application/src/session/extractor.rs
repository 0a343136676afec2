//! Fragment token extraction.
//!
//! After an identity-provider redirect the application is re-entered at
//! a URL of the form `https://host/#...access_token=<opaque>&...`. The
//! extractor runs once at startup: it moves the token into the
//! [`TokenStore`] and scrubs the fragment from the visible URL by
//! replacing the current history entry, so the credential can never be
//! recovered via back-navigation or a copy-pasted URL.

use pylon_domain::BearerToken;

use crate::ports::BrowserLocation;
use crate::session::TokenStore;

/// Fragment parameter carrying the redirect-delivered credential.
const TOKEN_PARAM: &str = "access_token";

/// Result of one extraction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// A token was found, stored, and scrubbed from the URL.
    Stored,
    /// The parameter was present but its value was empty or unusable.
    /// The store is untouched and no history rewrite happened.
    Malformed,
    /// No `access_token` parameter in the fragment; nothing to do.
    NotPresent,
}

/// Scans the current URL fragment for an `access_token` parameter.
///
/// Idempotent: a successful run consumes the fragment, so a second run
/// on the scrubbed URL is a no-op returning
/// [`ExtractionOutcome::NotPresent`].
pub async fn extract_fragment_token(
    store: &TokenStore,
    location: &dyn BrowserLocation,
) -> ExtractionOutcome {
    let url = location.current_url();
    let Some(fragment) = url.fragment() else {
        return ExtractionOutcome::NotPresent;
    };

    let Some(raw) = fragment_param(fragment, TOKEN_PARAM) else {
        return ExtractionOutcome::NotPresent;
    };

    // The token is opaque base64url material; it is stored verbatim.
    let Ok(token) = BearerToken::new(raw) else {
        tracing::warn!(
            storage_key = store.storage_key(),
            "redirect fragment carries an empty access_token, ignoring"
        );
        return ExtractionOutcome::Malformed;
    };

    store.set(token).await;

    let mut scrubbed = url.clone();
    scrubbed.set_fragment(None);
    location.replace_current_url(&scrubbed);

    tracing::debug!(storage_key = store.storage_key(), "fragment token stored");
    ExtractionOutcome::Stored
}

/// Returns the value of `name` within an `&`-joined fragment, stopping
/// at the first `&` or end-of-string. A bare `name` with no `=` counts
/// as present with an empty value.
fn fragment_param<'a>(fragment: &'a str, name: &str) -> Option<&'a str> {
    fragment.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (key == name).then_some(value)
    })
}
