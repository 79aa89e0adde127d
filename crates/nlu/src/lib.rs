mod config;
mod credentials;
mod fallback;
mod local;
mod managed;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};
use yatra_core::{DialogRequest, IntentResponder, RandomSource, ResponderError, ResponsePayload, RuleSet};
use yatra_observability::AppMetrics;

pub use config::{DialogflowSettings, FallbackMode, NluConfig};
pub use credentials::{sign_assertion, ServiceAccount, TokenProvider};
pub use fallback::{FallbackReplies, FALLBACK_INTENT};
pub use local::LocalPatternClassifier;
pub use managed::{detect_intent_url, map_detect_intent, DetectIntentResponse, ManagedNluDelegate};

/// Turns one chat request into a reply payload.
#[async_trait]
pub trait DialogueBackend: Send + Sync {
    fn name(&self) -> &'static str;

    async fn reply(&self, request: &DialogRequest) -> Result<ResponsePayload, ResponderError>;
}

/// Picks the backend once at startup: Dialogflow when a service account is configured,
/// local pattern rules otherwise.
pub fn select_backend(
    config: &NluConfig,
    rules: Arc<RuleSet>,
    random: Arc<dyn RandomSource>,
    metrics: Arc<AppMetrics>,
) -> Result<Arc<dyn DialogueBackend>> {
    let responder = IntentResponder::new(rules, random.clone());

    let Some(settings) = config.dialogflow.clone() else {
        info!(intents = responder.rules().len(), "using local pattern classifier");
        return Ok(Arc::new(LocalPatternClassifier::new(responder)));
    };

    let http = Client::builder()
        .connect_timeout(Duration::from_secs(3))
        .timeout(config.delegate_timeout)
        .build()
        .context("failed to build HTTP client")?;

    info!(
        project_id = %settings.project_id,
        fallback = ?config.fallback_mode,
        "using dialogflow delegate"
    );
    let fallback = FallbackReplies::new(config.fallback_mode, responder, random, config.expose_errors);
    Ok(Arc::new(ManagedNluDelegate::new(
        settings,
        http,
        config.delegate_timeout,
        fallback,
        metrics,
    )))
}

/// Loads a custom rule file when one is given, keeping the built-in catalog if it fails.
pub fn load_rule_set(path: Option<&Path>) -> Result<RuleSet> {
    if let Some(path) = path {
        match RuleSet::from_json_file(path) {
            Ok(rules) => {
                info!(path = %path.display(), intents = rules.len(), "loaded intent rules");
                return Ok(rules);
            }
            Err(err) => {
                warn!(path = %path.display(), error = %format!("{err:#}"), "falling back to built-in intents");
            }
        }
    }

    RuleSet::eco_yatra().context("built-in intent catalog is invalid")
}
