use async_trait::async_trait;
use yatra_core::{DialogRequest, IntentResponder, ResponderError, ResponsePayload};

use crate::DialogueBackend;

/// Answers from the in-process rule table; never performs I/O.
#[derive(Clone)]
pub struct LocalPatternClassifier {
    responder: IntentResponder,
}

impl LocalPatternClassifier {
    pub fn new(responder: IntentResponder) -> Self {
        Self { responder }
    }
}

#[async_trait]
impl DialogueBackend for LocalPatternClassifier {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn reply(&self, request: &DialogRequest) -> Result<ResponsePayload, ResponderError> {
        self.responder.handle(request.query.as_deref())
    }
}
