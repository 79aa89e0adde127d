use std::sync::Arc;

use tracing::warn;

use crate::error::ResponderError;
use crate::intent::RuleSet;
use crate::models::{ClassificationResult, ResponsePayload, QUERY_REQUIRED};
use crate::random::{RandomSource, ThreadRandom};

/// Classifies chat queries against a fixed rule set and answers with a canned reply.
#[derive(Clone)]
pub struct IntentResponder {
    rules: Arc<RuleSet>,
    random: Arc<dyn RandomSource>,
}

impl IntentResponder {
    pub fn new(rules: Arc<RuleSet>, random: Arc<dyn RandomSource>) -> Self {
        Self { rules, random }
    }

    pub fn with_thread_random(rules: Arc<RuleSet>) -> Self {
        Self::new(rules, Arc::new(ThreadRandom))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn classify(&self, query: &str) -> ClassificationResult {
        self.rules.classify(query)
    }

    /// Picks one of the intent's responses. Repeated calls may differ.
    pub fn respond(&self, intent: &str) -> Result<String, ResponderError> {
        let rule = self
            .rules
            .get(intent)
            .ok_or_else(|| ResponderError::UnknownIntent(intent.to_string()))?;
        Ok(self.pick(rule.responses()))
    }

    pub fn handle(&self, query: Option<&str>) -> Result<ResponsePayload, ResponderError> {
        let query = require_query(query)?;
        let result = self.classify(query);
        let text = self.answer(&result);

        Ok(ResponsePayload::new(text, result.intent, result.confidence))
    }

    /// A classified intent missing from the table is a broken rule set: fatal in debug
    /// builds, answered from the default responses in release.
    fn answer(&self, result: &ClassificationResult) -> String {
        debug_assert!(
            self.rules.contains(&result.intent),
            "classifier produced unknown intent {:?}",
            result.intent
        );

        match self.respond(&result.intent) {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "answering from default responses");
                self.pick(self.rules.default_rule().responses())
            }
        }
    }

    fn pick(&self, responses: &[String]) -> String {
        let idx = self.random.pick(responses.len()).min(responses.len() - 1);
        responses[idx].clone()
    }
}

/// Rejects a missing or empty query with the client-facing message.
pub fn require_query(query: Option<&str>) -> Result<&str, ResponderError> {
    match query {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ResponderError::InvalidInput(QUERY_REQUIRED.to_string())),
    }
}
