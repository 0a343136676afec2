//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the session core and external
//! systems. Each port is a trait that can be implemented by adapters in
//! the infrastructure layer, or by fakes in tests.

mod browser_location;
mod http_client;

pub use browser_location::BrowserLocation;
pub use http_client::{HttpClient, HttpClientError};
