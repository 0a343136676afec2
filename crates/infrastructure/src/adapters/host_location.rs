//! Host location adapter.
//!
//! Implements the `BrowserLocation` port over the embedding shell's
//! location state. The shell seeds it with the launch (or deep-link)
//! URL; `replace_current_url` swaps the current entry in place, and
//! `navigate_to` records a full navigation target for the shell to
//! act on.

use std::sync::{PoisonError, RwLock};

use url::Url;

use pylon_application::ports::BrowserLocation;

#[derive(Debug)]
struct LocationState {
    current: Url,
    pending_navigation: Option<Url>,
}

/// `BrowserLocation` backed by the shell's location state.
///
/// Holds a single current entry: replacing the URL leaves no history
/// trail to recover a scrubbed fragment from.
#[derive(Debug)]
pub struct HostLocation {
    state: RwLock<LocationState>,
}

impl HostLocation {
    /// Creates a location seeded with the launch URL.
    #[must_use]
    pub const fn new(launch_url: Url) -> Self {
        Self {
            state: RwLock::new(LocationState {
                current: launch_url,
                pending_navigation: None,
            }),
        }
    }

    /// Returns the full navigation requested by the session core, if
    /// any, clearing it. The shell polls this after session events.
    pub fn take_pending_navigation(&self) -> Option<Url> {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .pending_navigation
            .take()
    }
}

impl BrowserLocation for HostLocation {
    fn current_url(&self) -> Url {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .current
            .clone()
    }

    fn replace_current_url(&self, url: &Url) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.current = url.clone();
    }

    fn navigate_to(&self, url: &Url) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.current = url.clone();
        state.pending_navigation = Some(url.clone());
    }
}
