//! Pylon Domain - Core session types
//!
//! This crate defines the domain model for the Pylon admin console
//! session core. All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod error;
pub mod request;
pub mod response;
pub mod session;

pub use auth::BearerToken;
pub use error::{DomainError, DomainResult};
pub use request::{Header, HttpMethod, RequestSpec};
pub use response::{ResponseSpec, StatusCode};
pub use session::SessionState;
