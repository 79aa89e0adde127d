pub mod catalog;
pub mod error;
pub mod intent;
pub mod models;
pub mod random;
pub mod responder;

pub use error::{ResponderError, RuleSetError};
pub use intent::{IntentRule, RuleSet};
pub use models::*;
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use responder::{require_query, IntentResponder};
