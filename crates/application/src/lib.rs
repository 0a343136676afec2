//! Pylon Application - Session core and ports
//!
//! This crate implements the session/credential core of the admin
//! console client:
//! - a single-slot, session-scoped token store
//! - fragment-token extraction with URL scrubbing
//! - request augmentation and the 401 response guard
//! - the session coordinator (state, login redirect, logout cleanup)
//!
//! External systems are reached through the port traits in [`ports`].

pub mod ports;
pub mod session;

pub use session::{
    ExtractionOutcome, SessionClient, SessionCoordinator, TokenStore, UnauthenticatedHook,
    attach_credentials, extract_fragment_token, inspect_response,
};
