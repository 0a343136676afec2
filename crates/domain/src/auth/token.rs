//! Opaque bearer token type.
//!
//! The token is a signed credential minted by an external identity
//! provider. Its internal structure is never parsed or trusted here;
//! it is custodied as an opaque blob for transport purposes only.

use std::fmt;

use crate::error::{DomainError, DomainResult};

/// An opaque bearer credential.
///
/// `Debug` and `Display` are redacted to a short preview so the
/// credential never lands in logs or panic messages.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Creates a token from its raw string form.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidToken` if the value is empty.
    pub fn new(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(DomainError::InvalidToken("empty value".to_string()));
        }
        Ok(Self(raw))
    }

    /// Returns the raw token string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.0)
    }

    /// Returns a redacted preview (first few chars) for diagnostics.
    #[must_use]
    pub fn preview(&self) -> String {
        if self.0.len() > 12 {
            // The cut must land on a char boundary; tokens are opaque
            // and not guaranteed to be ASCII.
            let end = (0..=8)
                .rev()
                .find(|&i| self.0.is_char_boundary(i))
                .unwrap_or(0);
            format!("{}...", &self.0[..end])
        } else {
            "***".to_string()
        }
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BearerToken").field(&self.preview()).finish()
    }
}

impl fmt::Display for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.preview())
    }
}
