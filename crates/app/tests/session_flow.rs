//! Integration tests for the session/credential flow.
//!
//! These drive the full cycle through the public API with fake
//! adapters: redirect-delivered token extraction, authenticated
//! requests, server-signaled authentication failure, and logout.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use url::Url;

use pylon_application::ports::{BrowserLocation, HttpClient, HttpClientError};
use pylon_application::{ExtractionOutcome, SessionClient, SessionCoordinator, TokenStore};
use pylon_domain::{RequestSpec, ResponseSpec};

/// Location fake tracking the current entry and all full navigations.
struct FakeLocation {
    current: Mutex<Url>,
    navigations: Mutex<Vec<Url>>,
}

impl FakeLocation {
    fn at(url: &str) -> Arc<Self> {
        Arc::new(Self {
            current: Mutex::new(Url::parse(url).unwrap()),
            navigations: Mutex::new(Vec::new()),
        })
    }

    fn navigations(&self) -> Vec<Url> {
        self.navigations.lock().unwrap().clone()
    }
}

impl BrowserLocation for FakeLocation {
    fn current_url(&self) -> Url {
        self.current.lock().unwrap().clone()
    }

    fn replace_current_url(&self, url: &Url) {
        *self.current.lock().unwrap() = url.clone();
    }

    fn navigate_to(&self, url: &Url) {
        self.navigations.lock().unwrap().push(url.clone());
        *self.current.lock().unwrap() = url.clone();
    }
}

/// Server fake replaying a scripted sequence of statuses and recording
/// every request it saw.
struct FakeServer {
    statuses: Mutex<Vec<u16>>,
    seen: Mutex<Vec<RequestSpec>>,
}

impl FakeServer {
    fn replying(statuses: Vec<u16>) -> Self {
        Self {
            statuses: Mutex::new(statuses),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn seen(&self) -> Vec<RequestSpec> {
        self.seen.lock().unwrap().clone()
    }
}

impl HttpClient for FakeServer {
    fn execute<'a>(
        &'a self,
        request: &'a RequestSpec,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + 'a>> {
        Box::pin(async move {
            self.seen.lock().unwrap().push(request.clone());
            let status = self.statuses.lock().unwrap().remove(0);
            Ok(ResponseSpec::new(status, HashMap::new(), Vec::new()))
        })
    }
}

struct Harness {
    coordinator: SessionCoordinator,
    client: SessionClient<Arc<FakeServer>>,
    server: Arc<FakeServer>,
    location: Arc<FakeLocation>,
    notifications: Arc<AtomicU32>,
}

fn harness(launch_url: &str, statuses: Vec<u16>) -> Harness {
    let store = TokenStore::default();
    let location = FakeLocation::at(launch_url);
    let coordinator = SessionCoordinator::new(
        store.clone(),
        Arc::clone(&location) as Arc<dyn BrowserLocation>,
        Url::parse("https://idp.example.com/authorize").unwrap(),
        Url::parse("https://idp.example.com/logout").unwrap(),
    );

    let notifications = Arc::new(AtomicU32::new(0));
    let hook = {
        let inner = coordinator.unauthenticated_hook();
        let notifications = Arc::clone(&notifications);
        Arc::new(move || {
            notifications.fetch_add(1, Ordering::SeqCst);
            (*inner)();
        })
    };

    let server = Arc::new(FakeServer::replying(statuses));
    let client = SessionClient::new(Arc::clone(&server), store.clone(), hook);

    Harness {
        coordinator,
        client,
        server,
        location,
        notifications,
    }
}

#[tokio::test]
async fn test_full_session_cycle() {
    let h = harness("https://host/#access_token=abc123&state=xyz", vec![401, 200]);

    // (1) Startup extraction: token stored, URL scrubbed.
    let outcome = h.coordinator.initialize().await;
    assert_eq!(outcome, ExtractionOutcome::Stored);
    assert_eq!(h.client.store().get().await.unwrap().as_str(), "abc123");
    assert_eq!(h.location.current_url().as_str(), "https://host/");
    assert!(h.coordinator.state().is_authenticated());

    // (2+3) Authenticated request is rejected with a 401.
    let request = RequestSpec::get("https://host/api/tenants");
    let result = h.client.execute(&request).await;

    // The failure still reaches the caller.
    assert_eq!(result.unwrap().status.as_u16(), 401);
    assert!(h.client.store().is_empty().await);
    assert_eq!(h.notifications.load(Ordering::SeqCst), 1);
    assert!(!h.coordinator.state().is_authenticated());

    // (4) The next request goes out anonymous.
    h.client.execute(&request).await.unwrap();

    let seen = h.server.seen();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].header_value("Authorization"), Some("Bearer abc123"));
    assert_eq!(seen[1].header_value("Authorization"), None);
}

#[tokio::test]
async fn test_anonymous_start_stays_anonymous() {
    let h = harness("https://host/console", vec![200]);

    let outcome = h.coordinator.initialize().await;
    assert_eq!(outcome, ExtractionOutcome::NotPresent);
    assert!(h.client.store().is_empty().await);
    assert!(!h.coordinator.state().is_authenticated());

    let result = h
        .client
        .execute(&RequestSpec::get("https://host/api/health"))
        .await;
    assert!(result.unwrap().status.is_success());
    assert_eq!(h.server.seen()[0].header_value("Authorization"), None);
}

#[tokio::test]
async fn test_foreign_fragment_is_not_consumed() {
    let h = harness("https://host/#section=databases", vec![200]);

    let outcome = h.coordinator.initialize().await;

    assert_eq!(outcome, ExtractionOutcome::NotPresent);
    assert_eq!(
        h.location.current_url().fragment(),
        Some("section=databases")
    );
}

#[tokio::test]
async fn test_logout_cleans_up_and_leaves() {
    let h = harness("https://host/#access_token=abc123", vec![]);
    h.coordinator.initialize().await;

    h.coordinator.logout().await;

    assert!(h.client.store().is_empty().await);
    assert!(!h.coordinator.state().is_authenticated());
    assert_eq!(
        h.location.navigations(),
        vec![Url::parse("https://idp.example.com/logout").unwrap()]
    );
}

#[tokio::test]
async fn test_relogin_after_rejection() {
    let h = harness("https://host/#access_token=first", vec![401]);
    h.coordinator.initialize().await;

    h.client
        .execute(&RequestSpec::get("https://host/api/tenants"))
        .await
        .unwrap();
    assert!(!h.coordinator.state().is_authenticated());

    // The shell redirects to the identity provider...
    h.coordinator.login_redirect();
    assert_eq!(
        h.location.navigations(),
        vec![Url::parse("https://idp.example.com/authorize").unwrap()]
    );

    // ...which eventually re-enters the app with a fresh fragment.
    h.location
        .replace_current_url(&Url::parse("https://host/#access_token=second").unwrap());
    let outcome = h.coordinator.initialize().await;

    assert_eq!(outcome, ExtractionOutcome::Stored);
    assert_eq!(h.client.store().get().await.unwrap().as_str(), "second");
    assert!(h.coordinator.state().is_authenticated());
}
