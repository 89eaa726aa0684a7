#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use videogen::app::create_app;
use videogen::config::settings::AppConfig;
use videogen::infrastructure::provider::{Operation, ProviderError, VideoProvider};
use videogen::modules::generation::poller::Sleeper;
use videogen::state::AppState;

pub const TEST_API_KEY: &str = "test-key";

/// Safe defaults: ten second poll interval (never actually waited on).
pub fn test_config() -> AppConfig {
    AppConfig {
        server_port: 0,
        api_key: TEST_API_KEY.to_string(),
        provider_base_url: "http://provider.invalid".to_string(),
        provider_model: "veo-test".to_string(),
        poll_interval_secs: 10,
        provider_max_polls: None,
        provider_timeout_secs: 5,
    }
}

/// Provider double that counts calls and replays scripted operations.
pub struct FakeProvider {
    submit_result: Mutex<Option<Result<Operation, ProviderError>>>,
    refreshes: Mutex<VecDeque<Result<Operation, ProviderError>>>,
    pub submits: AtomicU32,
    pub refresh_calls: AtomicU32,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn new(
        submit_result: Result<Operation, ProviderError>,
        refreshes: Vec<Result<Operation, ProviderError>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            submit_result: Mutex::new(Some(submit_result)),
            refreshes: Mutex::new(refreshes.into()),
            submits: AtomicU32::new(0),
            refresh_calls: AtomicU32::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Pending on submit, done with `uri` after `pending_polls` extra checks.
    pub fn finishing_with(uri: &str, pending_polls: usize) -> Arc<Self> {
        let mut refreshes: Vec<_> = (0..pending_polls)
            .map(|_| Ok(Operation::pending("operations/test")))
            .collect();
        refreshes.push(Ok(Operation::completed("operations/test", uri)));
        Self::new(Ok(Operation::pending("operations/test")), refreshes)
    }

    pub fn total_calls(&self) -> u32 {
        self.submits.load(Ordering::SeqCst) + self.refresh_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VideoProvider for FakeProvider {
    async fn submit(&self, prompt: &str) -> Result<Operation, ProviderError> {
        self.submits.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.submit_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(Operation::pending("operations/test")))
    }

    async fn refresh(&self, operation: &Operation) -> Result<Operation, ProviderError> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        self.refreshes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Operation::pending(&operation.name)))
    }
}

#[derive(Default)]
pub struct InstantSleeper {
    pub naps: Mutex<Vec<Duration>>,
}

#[async_trait]
impl Sleeper for InstantSleeper {
    async fn sleep(&self, duration: Duration) {
        self.naps.lock().unwrap().push(duration);
    }
}

pub fn build_test_app(provider: Arc<FakeProvider>, sleeper: Arc<InstantSleeper>) -> Router {
    build_test_app_with_config(test_config(), provider, sleeper)
}

pub fn build_test_app_with_config(
    config: AppConfig,
    provider: Arc<FakeProvider>,
    sleeper: Arc<InstantSleeper>,
) -> Router {
    create_app(AppState::new(config, provider, sleeper))
}

pub async fn send(app: Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    send(app, Method::POST, uri, body).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn expect_status(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
