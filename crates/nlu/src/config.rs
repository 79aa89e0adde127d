use std::env;
use std::time::Duration;

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const DEFAULT_ENDPOINT: &str = "https://dialogflow.googleapis.com";
pub const DEFAULT_LANGUAGE_CODE: &str = "en-IN";
const DEFAULT_DELEGATE_TIMEOUT_MS: u64 = 5_000;

/// What the managed delegate answers with when Dialogflow fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackMode {
    /// One of a few intent-agnostic replies.
    #[default]
    Generic,
    /// The local pattern classifier's answer.
    Local,
}

impl FallbackMode {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "local" | "pattern" | "patterns" => Self::Local,
            _ => Self::Generic,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DialogflowSettings {
    pub project_id: String,
    pub private_key: String,
    pub client_email: Option<String>,
    pub token_uri: String,
    pub endpoint: String,
    pub language_code: String,
}

impl DialogflowSettings {
    pub fn new(project_id: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            private_key: private_key.into(),
            client_email: None,
            token_uri: DEFAULT_TOKEN_URI.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NluConfig {
    /// Present only when both the project id and the private key are set.
    pub dialogflow: Option<DialogflowSettings>,
    pub delegate_timeout: Duration,
    pub fallback_mode: FallbackMode,
    /// Attach delegate error text to fallback replies.
    pub expose_errors: bool,
}

impl Default for NluConfig {
    fn default() -> Self {
        Self {
            dialogflow: None,
            delegate_timeout: Duration::from_millis(DEFAULT_DELEGATE_TIMEOUT_MS),
            fallback_mode: FallbackMode::Generic,
            expose_errors: false,
        }
    }
}

impl NluConfig {
    pub fn from_env() -> Self {
        let dialogflow = match (
            non_empty_var("DIALOGFLOW_PROJECT_ID"),
            non_empty_var("DIALOGFLOW_PRIVATE_KEY"),
        ) {
            (Some(project_id), Some(private_key)) => Some(DialogflowSettings {
                project_id,
                private_key,
                client_email: non_empty_var("DIALOGFLOW_CLIENT_EMAIL"),
                token_uri: non_empty_var("DIALOGFLOW_TOKEN_URI")
                    .unwrap_or_else(|| DEFAULT_TOKEN_URI.to_string()),
                endpoint: non_empty_var("DIALOGFLOW_ENDPOINT")
                    .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
                language_code: non_empty_var("DIALOGFLOW_LANGUAGE_CODE")
                    .unwrap_or_else(|| DEFAULT_LANGUAGE_CODE.to_string()),
            }),
            _ => None,
        };

        let delegate_timeout = Duration::from_millis(
            env::var("YATRA_DELEGATE_TIMEOUT_MS")
                .ok()
                .and_then(|value| value.parse::<u64>().ok())
                .unwrap_or(DEFAULT_DELEGATE_TIMEOUT_MS),
        );

        Self {
            dialogflow,
            delegate_timeout,
            fallback_mode: env::var("YATRA_DELEGATE_FALLBACK")
                .map(|value| FallbackMode::parse(&value))
                .unwrap_or_default(),
            expose_errors: env::var("YATRA_ENV")
                .map(|value| value.eq_ignore_ascii_case("development"))
                .unwrap_or(false),
        }
    }

    pub fn managed_enabled(&self) -> bool {
        self.dialogflow.is_some()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
