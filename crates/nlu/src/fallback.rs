use std::sync::Arc;

use yatra_core::{IntentResponder, RandomSource, ReplySource, ResponderError, ResponsePayload};

use crate::config::FallbackMode;

pub const FALLBACK_INTENT: &str = "fallback";

const GENERIC_REPLIES: &[&str] = &[
    "I can help with route planning, air quality, eco coins, donations, health tips, and more. What would you like to know?",
    "Ask me about green routes, checking air quality, earning Eco Coins, making donations, or tracking your environmental impact!",
];

/// Degraded answers used when the managed delegate fails.
#[derive(Clone)]
pub struct FallbackReplies {
    mode: FallbackMode,
    responder: IntentResponder,
    random: Arc<dyn RandomSource>,
    expose_errors: bool,
}

impl FallbackReplies {
    pub fn new(
        mode: FallbackMode,
        responder: IntentResponder,
        random: Arc<dyn RandomSource>,
        expose_errors: bool,
    ) -> Self {
        Self {
            mode,
            responder,
            random,
            expose_errors,
        }
    }

    /// Always succeeds with a `source: "fallback"` payload for a validated query.
    pub fn reply(&self, query: &str, cause: &ResponderError) -> ResponsePayload {
        let mut payload = match self.mode {
            FallbackMode::Generic => self.generic(),
            FallbackMode::Local => self
                .responder
                .handle(Some(query))
                .unwrap_or_else(|_| self.generic()),
        };

        payload.source = Some(ReplySource::Fallback);
        if self.expose_errors {
            payload.error = Some(cause.to_string());
        }
        payload
    }

    fn generic(&self) -> ResponsePayload {
        let idx = self.random.pick(GENERIC_REPLIES.len()).min(GENERIC_REPLIES.len() - 1);
        ResponsePayload::new(
            GENERIC_REPLIES[idx].to_string(),
            FALLBACK_INTENT.to_string(),
            0.0,
        )
    }
}
