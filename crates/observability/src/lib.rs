use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct AppMetrics {
    requests_total: AtomicU64,
    rejected_total: AtomicU64,
    pattern_matches_total: AtomicU64,
    default_replies_total: AtomicU64,
    delegate_calls_total: AtomicU64,
    fallback_total: AtomicU64,
    total_latency_millis: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub rejected_total: u64,
    pub pattern_matches_total: u64,
    pub default_replies_total: u64,
    pub delegate_calls_total: u64,
    pub fallback_total: u64,
    pub avg_latency_millis: f64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("yatra_requests_total").increment(1);
    }

    pub fn inc_rejected(&self) {
        self.rejected_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("yatra_rejected_total").increment(1);
    }

    /// Records which kind of answer a dialogue request produced.
    pub fn record_intent(&self, intent: &str, confidence: f32) {
        if confidence > 0.0 {
            self.pattern_matches_total.fetch_add(1, Ordering::Relaxed);
        } else {
            self.default_replies_total.fetch_add(1, Ordering::Relaxed);
        }
        metrics::counter!("yatra_intent_total", "intent" => intent.to_string()).increment(1);
    }

    pub fn inc_delegate_call(&self) {
        self.delegate_calls_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("yatra_delegate_calls_total").increment(1);
    }

    pub fn inc_fallback(&self) {
        self.fallback_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("yatra_fallback_total").increment(1);
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_millis
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
        metrics::histogram!("yatra_request_latency_seconds").record(duration.as_secs_f64());
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let requests = self.requests_total.load(Ordering::Relaxed);
        let latency = self.total_latency_millis.load(Ordering::Relaxed);

        MetricsSnapshot {
            requests_total: requests,
            rejected_total: self.rejected_total.load(Ordering::Relaxed),
            pattern_matches_total: self.pattern_matches_total.load(Ordering::Relaxed),
            default_replies_total: self.default_replies_total.load(Ordering::Relaxed),
            delegate_calls_total: self.delegate_calls_total.load(Ordering::Relaxed),
            fallback_total: self.fallback_total.load(Ordering::Relaxed),
            avg_latency_millis: if requests == 0 {
                0.0
            } else {
                latency as f64 / requests as f64
            },
        }
    }
}

/// JSON logs on stdout, for long-running services.
pub fn init_tracing(service_name: &str) {
    init_tracing_with_writer(service_name, std::io::stdout);
}

/// JSON logs on stderr, keeping stdout free for command output.
pub fn init_tracing_to_stderr(service_name: &str) {
    init_tracing_with_writer(service_name, std::io::stderr);
}

pub fn init_tracing_with_writer<W>(service_name: &str, writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}=info,yatra_api=info,yatra_nlu=info,yatra_core=warn",
                service_name
            ))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(writer)
            .init();
    });
}
