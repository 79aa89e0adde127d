mod config;
mod rate_limit;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use axum::body::{Body, Bytes};
use axum::extract::{ConnectInfo, Json, State};
use axum::http::{header, HeaderValue, Method, Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use serde_json::Value;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use yatra_core::{DialogRequest, RandomSource, ReplySource, RuleSet, SeededRandom, ThreadRandom};
use yatra_nlu::{load_rule_set, select_backend, DialogueBackend};
use yatra_observability::AppMetrics;

pub use crate::config::ApiConfig;
pub use crate::rate_limit::IpRateLimiter;

const MAX_BODY_BYTES: usize = 16 * 1024;
const DEMO_MESSAGE: &str = "Hello from the eco Yatra server";
const INTERNAL_ERROR: &str = "Failed to process request";
const INTERNAL_ERROR_REPLY: &str = "I encountered an error. Please try again.";

#[derive(Clone)]
pub struct ApiState {
    pub backend: Arc<dyn DialogueBackend>,
    pub rules: Arc<RuleSet>,
    pub metrics: Arc<AppMetrics>,
    pub limiter: IpRateLimiter,
    pub ping_message: Arc<str>,
    pub allowed_origins: Arc<Vec<String>>,
}

impl ApiState {
    /// Loads the rule table and picks the dialogue backend for the process lifetime.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let rules = Arc::new(load_rule_set(config.intents_path.as_deref())?);
        let random: Arc<dyn RandomSource> = match config.reply_seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(ThreadRandom),
        };
        let metrics = AppMetrics::shared();
        let backend = select_backend(&config.nlu, rules.clone(), random, metrics.clone())?;

        Ok(Self::with_metrics(config, backend, rules, metrics))
    }

    pub fn new(config: &ApiConfig, backend: Arc<dyn DialogueBackend>, rules: Arc<RuleSet>) -> Self {
        Self::with_metrics(config, backend, rules, AppMetrics::shared())
    }

    pub fn with_metrics(
        config: &ApiConfig,
        backend: Arc<dyn DialogueBackend>,
        rules: Arc<RuleSet>,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            backend,
            rules,
            metrics,
            limiter: IpRateLimiter::new(config.rate_limit_window, config.rate_limit_max),
            ping_message: Arc::from(config.ping_message.as_str()),
            allowed_origins: Arc::new(config.allowed_origins.clone()),
        }
    }
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    backend: &'static str,
    intents: usize,
    metrics: yatra_observability::MetricsSnapshot,
}

#[derive(Debug, Serialize)]
struct InternalErrorResponse {
    error: &'static str,
    response: &'static str,
}

pub fn build_app(config: &ApiConfig) -> Result<Router> {
    Ok(build_router(ApiState::from_config(config)?))
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/ping", get(ping))
        .route("/api/demo", get(demo))
        .route("/api/dialogflow", post(dialogflow))
        .layer(build_cors_layer(&state.allowed_origins))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .with_state(state)
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    let payload = HealthResponse {
        status: "ok",
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        backend: state.backend.name(),
        intents: state.rules.len(),
        metrics: state.metrics.snapshot(),
    };
    (StatusCode::OK, Json(payload))
}

async fn ping(State(state): State<ApiState>) -> impl IntoResponse {
    Json(MessageResponse {
        message: state.ping_message.to_string(),
    })
}

async fn demo() -> impl IntoResponse {
    Json(MessageResponse {
        message: DEMO_MESSAGE.to_string(),
    })
}

async fn dialogflow(State(state): State<ApiState>, body: Bytes) -> Response {
    let started = Instant::now();
    state.metrics.inc_request();

    // Malformed JSON is reported the same way as a missing query.
    let request = serde_json::from_slice::<Value>(&body)
        .map(|value| DialogRequest::from_json(&value))
        .unwrap_or_default();

    let response = match state.backend.reply(&request).await {
        Ok(payload) => {
            state.metrics.record_intent(&payload.intent, payload.confidence);
            if payload.source == Some(ReplySource::Fallback) {
                state.metrics.inc_fallback();
            }
            info!(
                backend = state.backend.name(),
                intent = %payload.intent,
                confidence = payload.confidence,
                "dialogue handled"
            );
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) if err.is_client_error() => {
            state.metrics.inc_rejected();
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": err.to_string() })),
            )
                .into_response()
        }
        Err(err) => {
            error!(error = %err, backend = state.backend.name(), "dialogue failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(InternalErrorResponse {
                    error: INTERNAL_ERROR,
                    response: INTERNAL_ERROR_REPLY,
                }),
            )
                .into_response()
        }
    };

    state.metrics.observe_latency(started.elapsed());
    response
}

fn build_cors_layer(allowed_origins: &Arc<Vec<String>>) -> CorsLayer {
    let origins = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect::<Vec<_>>();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

async fn rate_limit_middleware(
    State(state): State<ApiState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS || !is_rate_limited_endpoint(request.uri().path()) {
        return next.run(request).await;
    }

    let ip = request_ip(&request);
    if !state.limiter.allow(&ip) {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(serde_json::json!({
                "error": "rate_limited",
                "message": "rate limit exceeded for this IP"
            })),
        )
            .into_response();
    }

    next.run(request).await
}

fn is_rate_limited_endpoint(path: &str) -> bool {
    path == "/api/dialogflow"
}

/// First forwarded hop when behind a proxy, otherwise the peer address.
fn request_ip(request: &Request<Body>) -> String {
    let forwarded = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty());
    if let Some(ip) = forwarded {
        return ip.to_string();
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "local".to_string())
}

async fn security_headers_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;

    response.headers_mut().insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    response.headers_mut().insert(
        header::HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY"),
    );
    response.headers_mut().insert(
        header::HeaderName::from_static("referrer-policy"),
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    response
}
