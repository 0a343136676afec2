//! Session/credential core.
//!
//! Control flow over one session: [`extract_fragment_token`] runs once at
//! startup, [`attach_credentials`] runs before every outgoing request,
//! [`inspect_response`] runs on every response, and the
//! [`SessionCoordinator`] reacts to authentication failure and logout.
//! [`SessionClient`] fixes the middleware order (augment, send, guard)
//! as an explicit contract.

mod augmenter;
mod client;
mod coordinator;
mod extractor;
mod guard;
mod token_store;

pub use augmenter::attach_credentials;
pub use client::{SessionClient, UnauthenticatedHook};
pub use coordinator::SessionCoordinator;
pub use extractor::{ExtractionOutcome, extract_fragment_token};
pub use guard::inspect_response;
pub use token_store::TokenStore;
