use thiserror::Error;

/// Failures a dialogue request can run into.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponderError {
    /// The query was absent, not a string, or empty.
    #[error("{0}")]
    InvalidInput(String),

    /// An intent name with no entry in the active rule set.
    #[error("unknown intent: {0}")]
    UnknownIntent(String),

    /// The managed NLU backend could not be reached or initialized.
    #[error("NLU delegate unavailable: {0}")]
    DelegateUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ResponderError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Reasons a rule table is rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleSetError {
    #[error("intent `{0}` is declared more than once")]
    DuplicateIntent(String),

    #[error("rule set has no `default` intent")]
    MissingDefault,

    #[error("the `default` intent must not declare patterns")]
    DefaultHasPatterns,

    #[error("intent `{0}` has no responses")]
    EmptyResponses(String),

    #[error("intent `{intent}` has an invalid pattern `{pattern}`: {message}")]
    InvalidPattern {
        intent: String,
        pattern: String,
        message: String,
    },
}
