use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, warn};
use url::Url;
use yatra_core::{require_query, DialogRequest, ReplySource, ResponderError, ResponsePayload};
use yatra_observability::AppMetrics;

use crate::config::DialogflowSettings;
use crate::credentials::{ServiceAccount, TokenProvider};
use crate::fallback::FallbackReplies;
use crate::DialogueBackend;

const UNKNOWN_INTENT: &str = "unknown";
const NO_FULFILLMENT: &str = "I'm not sure how to respond to that.";
const NO_QUERY_RESULT: &str = "I couldn't understand that. Please try again.";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectIntentResponse {
    #[serde(default)]
    pub query_result: Option<QueryResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(default)]
    pub fulfillment_text: Option<String>,
    #[serde(default)]
    pub intent: Option<DetectedIntent>,
    #[serde(default)]
    pub intent_detection_confidence: Option<f32>,
    #[serde(default)]
    pub parameters: Option<Map<String, Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedIntent {
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Forwards queries to a Dialogflow ES agent and degrades to canned replies on failure.
pub struct ManagedNluDelegate {
    settings: DialogflowSettings,
    http: Client,
    tokens: TokenProvider,
    timeout: Duration,
    fallback: FallbackReplies,
    metrics: Arc<AppMetrics>,
}

impl ManagedNluDelegate {
    pub fn new(
        settings: DialogflowSettings,
        http: Client,
        timeout: Duration,
        fallback: FallbackReplies,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        let tokens = TokenProvider::new(
            ServiceAccount {
                client_email: settings.client_email.clone(),
                private_key_pem: settings.private_key.clone(),
                token_uri: settings.token_uri.clone(),
            },
            http.clone(),
        );

        Self {
            settings,
            http,
            tokens,
            timeout,
            fallback,
            metrics,
        }
    }

    async fn detect_intent(
        &self,
        query: &str,
        session_id: Option<&str>,
    ) -> Result<ResponsePayload, ResponderError> {
        let session = session_id
            .map(str::to_string)
            .unwrap_or_else(|| format!("session-{}", Utc::now().timestamp_millis()));
        let url = detect_intent_url(&self.settings.endpoint, &self.settings.project_id, &session)?;
        let token = self.tokens.access_token().await?;

        let body = serde_json::json!({
            "queryInput": {
                "text": {
                    "text": query,
                    "languageCode": self.settings.language_code,
                }
            }
        });

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|err| unavailable(format!("detectIntent request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(unavailable(format!(
                "detectIntent returned status {}: {}",
                status.as_u16(),
                text
            )));
        }

        let parsed: DetectIntentResponse = response
            .json()
            .await
            .map_err(|err| unavailable(format!("detectIntent parse failed: {err}")))?;

        Ok(map_detect_intent(parsed, session_id))
    }
}

#[async_trait]
impl DialogueBackend for ManagedNluDelegate {
    fn name(&self) -> &'static str {
        "dialogflow"
    }

    async fn reply(&self, request: &DialogRequest) -> Result<ResponsePayload, ResponderError> {
        let query = require_query(request.query.as_deref())?;
        self.metrics.inc_delegate_call();

        let outcome = tokio::time::timeout(
            self.timeout,
            self.detect_intent(query, request.session_id.as_deref()),
        )
        .await
        .unwrap_or_else(|_| {
            Err(unavailable(format!(
                "detectIntent timed out after {} ms",
                self.timeout.as_millis()
            )))
        });

        match outcome {
            Ok(payload) => {
                info!(intent = %payload.intent, confidence = payload.confidence, "dialogflow answered");
                Ok(payload)
            }
            Err(err) => {
                warn!(error = %err, "dialogflow unavailable, using fallback reply");
                Ok(self.fallback.reply(query, &err))
            }
        }
    }
}

/// Maps a detectIntent body onto the chat payload.
pub fn map_detect_intent(
    response: DetectIntentResponse,
    session_id: Option<&str>,
) -> ResponsePayload {
    let Some(result) = response.query_result else {
        return ResponsePayload::new(NO_QUERY_RESULT.to_string(), UNKNOWN_INTENT.to_string(), 0.0)
            .with_source(ReplySource::Fallback);
    };

    let intent = result
        .intent
        .and_then(|intent| intent.display_name)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_INTENT.to_string());
    let text = result
        .fulfillment_text
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_FULFILLMENT.to_string());
    let confidence = match result.intent_detection_confidence {
        Some(value) if value > 0.0 => (value * 100.0).round() / 100.0,
        _ => 0.0,
    };

    let mut payload =
        ResponsePayload::new(text, intent, confidence).with_source(ReplySource::Dialogflow);
    payload.parameters = Some(result.parameters.unwrap_or_default());
    payload.session_id = session_id.map(str::to_string);
    payload
}

pub fn detect_intent_url(
    endpoint: &str,
    project_id: &str,
    session: &str,
) -> Result<Url, ResponderError> {
    let last = format!("{session}:detectIntent");
    let mut url = Url::parse(endpoint)
        .map_err(|err| unavailable(format!("invalid dialogflow endpoint: {err}")))?;
    url.path_segments_mut()
        .map_err(|_| unavailable("dialogflow endpoint cannot be a base".to_string()))?
        .pop_if_empty()
        .extend([
            "v2",
            "projects",
            project_id,
            "agent",
            "sessions",
            last.as_str(),
        ]);
    Ok(url)
}

fn unavailable(message: String) -> ResponderError {
    ResponderError::DelegateUnavailable(message)
}
