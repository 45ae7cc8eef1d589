//! Per-message resolution: classifier verdict -> reply text.
//!
//! `resolve` is the whole request pipeline: one classifier call, the
//! confidence threshold, the table lookup, and a terminal textual fallback
//! for every failure branch. Nothing above the mediator ever observes a
//! fault; the trade is diagnosability for availability, so the chat endpoint
//! never errors because the classifier is flaky.

use parley_classifier::{ClassifierError, IntentClassifier};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::ResponseTable;

/// Verdicts below this confidence are rejected before lookup. The comparison
/// is strict: exactly 0.40 passes.
pub const CONFIDENCE_THRESHOLD: f64 = 0.40;

/// Reply when the classifier cannot be reached or answers unusably.
pub const REPLY_CLASSIFIER_UNREACHABLE: &str =
    "I'm having trouble connecting to my brain right now. Please try again later.";

/// Reply when the classification lands below the confidence threshold.
pub const REPLY_LOW_CONFIDENCE: &str = "I'm not sure I understand. Could you rephrase that? \
     You can ask me about our services, team, or location.";

/// Reply for anything unanticipated.
pub const REPLY_SYSTEM_OFFLINE: &str =
    "System is currently offline or unreachable. Please contact support.";

/// Routes a user message to a canned response via the external classifier.
///
/// Owns the read-only [`ResponseTable`] for the life of the process;
/// concurrent resolutions share it without locking.
pub struct ChatMediator {
    classifier: Arc<dyn IntentClassifier>,
    responses: ResponseTable,
}

impl ChatMediator {
    pub fn new(classifier: Arc<dyn IntentClassifier>, responses: ResponseTable) -> Self {
        Self {
            classifier,
            responses,
        }
    }

    pub fn responses(&self) -> &ResponseTable {
        &self.responses
    }

    /// Resolve one user message to a reply. Always returns a
    /// user-displayable string; one classifier attempt, no retries.
    pub async fn resolve(&self, message: &str) -> String {
        match self.classifier.classify(message).await {
            Ok(verdict) => {
                if verdict.confidence < CONFIDENCE_THRESHOLD {
                    debug!(
                        intent = %verdict.intent,
                        confidence = verdict.confidence,
                        "classification below threshold"
                    );
                    return REPLY_LOW_CONFIDENCE.to_string();
                }

                match self.responses.get(&verdict.intent) {
                    Some(reply) => reply.to_string(),
                    None => {
                        // Confident classification with no authored response
                        // is a content gap, not a classification gap.
                        warn!(intent = %verdict.intent, "no response mapped for intent");
                        format!(
                            "I understood the intent ({}) but I don't have a specific \
                             response mapped for it yet.",
                            verdict.intent
                        )
                    }
                }
            }
            Err(ClassifierError::Transport(e)) => {
                warn!(backend = self.classifier.name(), error = %e, "classifier call failed");
                REPLY_CLASSIFIER_UNREACHABLE.to_string()
            }
            Err(ClassifierError::Status { status }) => {
                warn!(status, "classifier returned non-success status");
                REPLY_CLASSIFIER_UNREACHABLE.to_string()
            }
            Err(ClassifierError::Protocol(e)) => {
                warn!(error = %e, "classifier response unusable");
                REPLY_CLASSIFIER_UNREACHABLE.to_string()
            }
            Err(error) => {
                warn!(error = %error, "unanticipated fault during resolution");
                REPLY_SYSTEM_OFFLINE.to_string()
            }
        }
    }
}
