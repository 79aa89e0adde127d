use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Confidence reported for any pattern match.
pub const MATCH_CONFIDENCE: f32 = 0.95;

/// Name of the reserved rule answered when nothing else matches.
pub const DEFAULT_INTENT: &str = "default";

/// Message returned to callers that send no usable query.
pub const QUERY_REQUIRED: &str = "Query is required";

/// Serializable description of one intent rule, before its patterns are compiled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRuleDef {
    pub name: String,
    #[serde(default)]
    pub patterns: Vec<String>,
    pub responses: Vec<String>,
}

impl IntentRuleDef {
    pub fn new(name: &str, patterns: &[&str], responses: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            responses: responses.iter().map(|r| r.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub intent: String,
    pub confidence: f32,
}

impl ClassificationResult {
    pub fn fallback() -> Self {
        Self {
            intent: DEFAULT_INTENT.to_string(),
            confidence: 0.0,
        }
    }
}

/// Where a reply came from when it did not come from local pattern matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    Dialogflow,
    Fallback,
}

/// Wire shape consumed by the chat widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePayload {
    pub response: String,
    pub intent: String,
    pub confidence: f32,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ReplySource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponsePayload {
    /// Builds a payload whose `action` mirrors the intent.
    pub fn new(response: String, intent: String, confidence: f32) -> Self {
        Self {
            response,
            action: intent.clone(),
            intent,
            confidence,
            source: None,
            parameters: None,
            session_id: None,
            error: None,
        }
    }

    pub fn with_source(mut self, source: ReplySource) -> Self {
        self.source = Some(source);
        self
    }
}

/// Body of `POST /api/dialogflow` after lenient extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogRequest {
    pub query: Option<String>,
    pub session_id: Option<String>,
}

impl DialogRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            session_id: None,
        }
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Non-string `query` or `sessionId` values are treated as absent.
    pub fn from_json(value: &Value) -> Self {
        Self {
            query: value
                .get("query")
                .and_then(Value::as_str)
                .map(str::to_string),
            session_id: value
                .get("sessionId")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}
