//! Pylon admin console client - session shell binary.
//!
//! Wires the session core together: seeds the host location with the
//! launch URL (which carries the identity-provider redirect fragment
//! after a login round-trip), runs the startup extraction, and issues
//! an authenticated health probe against the console API.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use pylon_application::ports::{BrowserLocation, HttpClient};
use pylon_application::{SessionClient, SessionCoordinator, TokenStore};
use pylon_domain::RequestSpec;
use pylon_infrastructure::{HostLocation, ReqwestHttpClient};

/// Reads a URL from the environment, falling back to `default`.
fn env_url(var: &str, default: &str) -> Result<Url, url::ParseError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_url = env_url("PYLON_API_URL", "http://localhost:8080/")?;
    let login_url = env_url("PYLON_LOGIN_URL", "http://localhost:8080/oauth/authorize")?;
    let logout_url = env_url("PYLON_LOGOUT_URL", "http://localhost:8080/oauth/logout")?;

    // The shell passes the launch (redirect) URL as the first argument.
    let launch_url = match std::env::args().nth(1) {
        Some(raw) => Url::parse(&raw)?,
        None => api_url.clone(),
    };

    tracing::info!("Starting Pylon console shell v{}", env!("CARGO_PKG_VERSION"));

    let location = Arc::new(HostLocation::new(launch_url));
    let store = TokenStore::default();
    let coordinator = SessionCoordinator::new(
        store.clone(),
        Arc::clone(&location) as Arc<dyn BrowserLocation>,
        login_url,
        logout_url,
    );

    let outcome = coordinator.initialize().await;
    tracing::info!(?outcome, state = coordinator.state().message(), "session initialized");

    let client = SessionClient::new(
        ReqwestHttpClient::new()?,
        store,
        coordinator.unauthenticated_hook(),
    );

    let probe = RequestSpec::get(api_url.join("api/health")?.as_str());
    match client.execute(&probe).await {
        Ok(response) if response.status.is_success() => {
            let health: serde_json::Value =
                serde_json::from_slice(&response.body).unwrap_or_default();
            tracing::info!(status = %response.status, %health, "console API reachable");
        }
        Ok(response) => {
            tracing::warn!(status = %response.status, "console API refused the probe");
        }
        Err(error) => {
            tracing::error!(%error, "health probe failed");
        }
    }

    // A 401 on the probe flipped the session state; hand control back
    // to the identity provider.
    if !coordinator.state().is_authenticated() {
        coordinator.login_redirect();
    }

    if let Some(target) = location.take_pending_navigation() {
        // The real shell performs this as a full page navigation.
        tracing::info!(url = %target, "shell navigation requested");
    }

    Ok(())
}
