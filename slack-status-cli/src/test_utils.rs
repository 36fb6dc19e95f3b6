//! Test utilities for CLI testing
//!
//! Provides a mock Slack Web API server that records every request it gets.

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Form, Router,
};
use slack_status_core::api::{ProfileStatus, SlackResponse};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// A request received by the mock server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Slack method name, e.g. `users.profile.set`
    pub method: String,
    /// Raw `Authorization` header
    pub authorization: Option<String>,
    /// Decoded form body
    pub form: HashMap<String, String>,
}

impl RecordedRequest {
    /// Decode the JSON `profile` form field, if present.
    pub fn profile(&self) -> Option<ProfileStatus> {
        serde_json::from_str(self.form.get("profile")?).ok()
    }
}

/// Mock server state
#[derive(Debug, Clone)]
pub struct MockServerState {
    /// Requests received so far, in order
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
    /// Status and body returned for every request
    pub response: Arc<Mutex<(StatusCode, String)>>,
}

impl Default for MockServerState {
    fn default() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            response: Arc::new(Mutex::new((StatusCode::OK, encode(&SlackResponse::success())))),
        }
    }
}

/// Mock server implementation
#[derive(Debug)]
pub struct MockSlackServer {
    state: MockServerState,
    port: u16,
}

impl Default for MockSlackServer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSlackServer {
    /// Create a new mock server answering `{"ok": true}`
    pub fn new() -> Self {
        Self {
            state: MockServerState::default(),
            port: 0, // Will be assigned when server starts
        }
    }

    /// Change the response returned for every request
    pub fn respond_with(&self, status: StatusCode, body: &str) {
        *self.state.response.lock().unwrap() = (status, body.to_string());
    }

    /// Answer every request with HTTP 200 and `"ok": false`
    pub fn respond_with_error(&self, error: &str) {
        self.respond_with(StatusCode::OK, &encode(&SlackResponse::error(error)));
    }

    /// Start the mock server and return the base URL
    pub async fn start(mut self) -> Result<(Self, String)> {
        let app = self.create_router();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        self.port = addr.port();

        let base_url = format!("http://127.0.0.1:{}/api", self.port);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Mock server error: {}", e);
            }
        });

        // Give the server a moment to start and verify it's running
        for _ in 0..20 {
            if tokio::net::TcpStream::connect(("127.0.0.1", self.port))
                .await
                .is_ok()
            {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        Ok((self, base_url))
    }

    /// Snapshot of the requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Create the mock server router
    fn create_router(&self) -> Router {
        Router::new()
            .route("/api/:method", post(slack_method_handler))
            .with_state(self.state.clone())
    }
}

fn encode(response: &SlackResponse) -> String {
    serde_json::to_string(response).unwrap()
}

async fn slack_method_handler(
    State(state): State<MockServerState>,
    Path(method): Path<String>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        authorization,
        form,
    });

    let (status, body) = state.response.lock().unwrap().clone();
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}
