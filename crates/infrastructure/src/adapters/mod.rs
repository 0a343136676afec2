//! Port adapters.

mod host_location;
mod reqwest_client;

pub use host_location::HostLocation;
pub use reqwest_client::ReqwestHttpClient;
