//! Shared fixtures for the HTTP integration tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::extract::{ConnectInfo, Form, Json, Path, State};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use yatra_api::ApiConfig;
use yatra_nlu::{DialogflowSettings, NluConfig};

pub const TEST_ACCESS_TOKEN: &str = "test-access-token";
pub const TEST_CLIENT_EMAIL: &str = "chat-bot@eco-yatra.iam.gserviceaccount.com";

pub fn test_private_key() -> &'static str {
    include_str!("../fixtures/service_account_key.pem")
}

/// Local-only config with deterministic reply selection.
pub fn local_config() -> ApiConfig {
    ApiConfig {
        reply_seed: Some(7),
        ..ApiConfig::default()
    }
}

pub fn managed_config(base_url: &str, project_id: &str, timeout: Duration) -> ApiConfig {
    let mut settings = DialogflowSettings::new(project_id, test_private_key());
    settings.client_email = Some(TEST_CLIENT_EMAIL.to_string());
    settings.token_uri = format!("{base_url}/token");
    settings.endpoint = base_url.to_string();

    ApiConfig {
        reply_seed: Some(7),
        nlu: NluConfig {
            dialogflow: Some(settings),
            delegate_timeout: timeout,
            ..NluConfig::default()
        },
        ..ApiConfig::default()
    }
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, HeaderMap, Value) {
    send(app, json_request(uri, body)).await
}

/// Posts as if the connection came from `peer` with no proxy in front.
pub async fn post_json_from(
    app: Router,
    uri: &str,
    body: &str,
    peer: SocketAddr,
) -> (StatusCode, HeaderMap, Value) {
    let mut request = json_request(uri, body);
    request.extensions_mut().insert(ConnectInfo(peer));
    send(app, request).await
}

fn json_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, HeaderMap, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
    };
    (status, headers, value)
}

/// In-process stand-in for the Google token endpoint and Dialogflow `detectIntent`.
#[derive(Clone, Default)]
pub struct MockDialogflow {
    pub token_requests: Arc<AtomicUsize>,
    pub detect_requests: Arc<AtomicUsize>,
    pub delay: Duration,
}

impl MockDialogflow {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    /// Serves the mock on an ephemeral port and returns its base URL.
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/token", post(mock_token))
            .route(
                "/v2/projects/:project/agent/sessions/:session",
                post(mock_detect_intent),
            )
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("mock should bind");
        let addr = listener.local_addr().expect("mock has an address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });
        format!("http://{addr}")
    }

    pub fn token_requests(&self) -> usize {
        self.token_requests.load(Ordering::SeqCst)
    }

    pub fn detect_requests(&self) -> usize {
        self.detect_requests.load(Ordering::SeqCst)
    }
}

async fn mock_token(
    State(mock): State<MockDialogflow>,
    Form(form): Form<std::collections::HashMap<String, String>>,
) -> Response {
    mock.token_requests.fetch_add(1, Ordering::SeqCst);

    let grant_ok = form.get("grant_type").map(String::as_str)
        == Some("urn:ietf:params:oauth:grant-type:jwt-bearer");
    let assertion_ok = form
        .get("assertion")
        .map(|jwt| jwt.split('.').count() == 3)
        .unwrap_or(false);
    if !grant_ok || !assertion_ok {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "invalid_grant" }))).into_response();
    }

    Json(json!({
        "access_token": TEST_ACCESS_TOKEN,
        "expires_in": 3600,
        "token_type": "Bearer"
    }))
    .into_response()
}

async fn mock_detect_intent(
    State(mock): State<MockDialogflow>,
    Path((project, session)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    mock.detect_requests.fetch_add(1, Ordering::SeqCst);
    if !mock.delay.is_zero() {
        tokio::time::sleep(mock.delay).await;
    }

    let authorized = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        == Some(format!("Bearer {TEST_ACCESS_TOKEN}").as_str());
    if !authorized {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if project == "broken-agent" {
        return (StatusCode::INTERNAL_SERVER_ERROR, "agent exploded").into_response();
    }
    if project == "empty-agent" {
        return Json(json!({ "responseId": "r-0" })).into_response();
    }

    let text = body
        .pointer("/queryInput/text/text")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let language = body
        .pointer("/queryInput/text/languageCode")
        .and_then(Value::as_str)
        .unwrap_or_default();

    Json(json!({
        "responseId": "r-1",
        "queryResult": {
            "queryText": text,
            "fulfillmentText": format!("managed reply to: {text}"),
            "intent": { "displayName": "find_green_route" },
            "intentDetectionConfidence": 0.8765,
            "parameters": {
                "session": session.trim_end_matches(":detectIntent"),
                "language": language
            }
        }
    }))
    .into_response()
}
