//! Authentication types for the session core.

mod token;

pub use token::BearerToken;
