//! Session coordinator.
//!
//! Tracks authenticated/unauthenticated state, runs startup extraction,
//! and owns the login redirect and logout cleanup. The coordinator
//! never writes credentials; only the extractor stores tokens.

use std::sync::{Arc, PoisonError, RwLock};

use url::Url;

use pylon_domain::SessionState;

use crate::ports::BrowserLocation;
use crate::session::client::UnauthenticatedHook;
use crate::session::{ExtractionOutcome, TokenStore, extract_fragment_token};

/// Coordinates session state against the token store and host location.
pub struct SessionCoordinator {
    store: TokenStore,
    location: Arc<dyn BrowserLocation>,
    state: Arc<RwLock<SessionState>>,
    login_url: Url,
    logout_url: Url,
}

impl SessionCoordinator {
    /// Creates a coordinator over `store` and `location`.
    ///
    /// `login_url` is the identity-provider entry point; `logout_url`
    /// is the external, server-provided endpoint navigated to after
    /// local cleanup.
    #[must_use]
    pub fn new(
        store: TokenStore,
        location: Arc<dyn BrowserLocation>,
        login_url: Url,
        logout_url: Url,
    ) -> Self {
        Self {
            store,
            location,
            state: Arc::new(RwLock::new(SessionState::NoToken)),
            login_url,
            logout_url,
        }
    }

    /// Runs the fragment extractor once at startup and records the
    /// resulting session state.
    pub async fn initialize(&self) -> ExtractionOutcome {
        let outcome = extract_fragment_token(&self.store, self.location.as_ref()).await;
        if outcome == ExtractionOutcome::Stored {
            self.set_state(SessionState::Authenticated);
        }
        outcome
    }

    /// Current session state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        *self
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Marks the session unauthenticated. Idempotent; the response
    /// guard has already purged the store when this runs.
    pub fn handle_unauthenticated(&self) {
        Self::mark_unauthenticated(&self.state);
    }

    /// Returns [`Self::handle_unauthenticated`] as the guard's
    /// notification hook.
    #[must_use]
    pub fn unauthenticated_hook(&self) -> UnauthenticatedHook {
        let state = Arc::clone(&self.state);
        Arc::new(move || Self::mark_unauthenticated(&state))
    }

    /// Performs a full navigation to the identity-provider login flow.
    pub fn login_redirect(&self) {
        tracing::info!(url = %self.login_url, "redirecting to identity provider");
        self.location.navigate_to(&self.login_url);
    }

    /// Clears local session state and navigates to the external logout
    /// endpoint.
    pub async fn logout(&self) {
        self.set_state(SessionState::NoToken);
        self.store.clear().await;

        // An in-flight response completing between the first clear and
        // the navigation could re-populate the slot; clear again
        // immediately before leaving.
        self.store.clear().await;
        tracing::info!(url = %self.logout_url, "logging out");
        self.location.navigate_to(&self.logout_url);
    }

    fn set_state(&self, next: SessionState) {
        *self
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner) = next;
    }

    fn mark_unauthenticated(state: &RwLock<SessionState>) {
        *state.write().unwrap_or_else(PoisonError::into_inner) = SessionState::NoToken;
    }
}
