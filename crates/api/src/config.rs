use std::env;
use std::path::PathBuf;
use std::time::Duration;

use yatra_nlu::NluConfig;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind: String,
    pub ping_message: String,
    pub intents_path: Option<PathBuf>,
    pub allowed_origins: Vec<String>,
    pub rate_limit_window: Duration,
    pub rate_limit_max: usize,
    /// Fixed seed for reply selection; `None` uses the thread RNG.
    pub reply_seed: Option<u64>,
    pub nlu: NluConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
            ping_message: "ping".to_string(),
            intents_path: None,
            allowed_origins: Vec::new(),
            rate_limit_window: Duration::from_secs(60),
            rate_limit_max: 60,
            reply_seed: None,
            nlu: NluConfig::default(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            bind: env::var("YATRA_BIND").unwrap_or(defaults.bind),
            ping_message: env::var("PING_MESSAGE").unwrap_or(defaults.ping_message),
            intents_path: env::var("YATRA_INTENTS_PATH")
                .ok()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            allowed_origins: parse_allowed_origins(
                env::var("YATRA_ALLOWED_ORIGINS").ok().as_deref(),
            ),
            rate_limit_window: env::var("YATRA_RATE_LIMIT_WINDOW_SECONDS")
                .ok()
                .and_then(|value| value.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.rate_limit_window),
            rate_limit_max: env::var("YATRA_RATE_LIMIT_MAX")
                .ok()
                .and_then(|value| value.parse::<usize>().ok())
                .unwrap_or(defaults.rate_limit_max),
            reply_seed: env::var("YATRA_REPLY_SEED")
                .ok()
                .and_then(|value| value.parse::<u64>().ok()),
            nlu: NluConfig::from_env(),
        }
    }
}

fn parse_allowed_origins(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(|origin| origin.trim().trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}
