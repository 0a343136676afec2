//! HTTP client port.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use pylon_domain::{RequestSpec, ResponseSpec};

/// Errors surfaced by an [`HttpClient`] implementation.
///
/// A received response is never an error here, whatever its status;
/// non-2xx responses come back as a `ResponseSpec` and status handling
/// is the caller's concern. The `Status` variant exists for callers
/// that convert an unacceptable response into a failure while keeping
/// the status observable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpClientError {
    /// The request URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request timed out.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// A response was received but carried an unacceptable status.
    #[error("unexpected status {code}: {message}")]
    Status {
        /// The response status code.
        code: u16,
        /// Short description of the failure.
        message: String,
    },

    /// Any other failure.
    #[error("{0}")]
    Other(String),
}

impl HttpClientError {
    /// Returns the explicit status carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Port for executing HTTP requests.
pub trait HttpClient: Send + Sync {
    /// Executes a request and returns the received response.
    fn execute<'a>(
        &'a self,
        request: &'a RequestSpec,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + 'a>>;
}

impl<T: HttpClient + ?Sized> HttpClient for std::sync::Arc<T> {
    fn execute<'a>(
        &'a self,
        request: &'a RequestSpec,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + 'a>> {
        self.as_ref().execute(request)
    }
}
