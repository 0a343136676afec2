//! Session state machine.
//!
//! The session has exactly two states. There is no "refreshing" state:
//! token expiry is discovered reactively via a rejected request, never
//! proactively.

/// Authentication state of the client session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No credential is held; requests go out anonymous.
    #[default]
    NoToken,
    /// A bearer credential is held and attached to outgoing requests.
    Authenticated,
}

impl SessionState {
    /// Returns true if a credential is currently held.
    #[must_use]
    pub const fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }

    /// Get a user-friendly message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoToken => "Not authenticated",
            Self::Authenticated => "Authenticated",
        }
    }
}
