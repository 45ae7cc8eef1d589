//! Mock classifier for deterministic testing.
//!
//! Outcomes are queued and consumed in order, without network calls. An empty
//! queue returns an `Internal` error to catch test configuration issues.

use async_trait::async_trait;
use parley_protocol::Classification;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::{ClassifierError, IntentClassifier};

/// Classifier returning pre-queued outcomes.
#[derive(Default)]
pub struct MockClassifier {
    /// Queue of outcomes to return
    outcomes: Arc<Mutex<VecDeque<Result<Classification, ClassifierError>>>>,
    /// Record of messages received (for assertions)
    received: Arc<Mutex<Vec<String>>>,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful classification for the next call.
    pub fn queue_classification(&self, intent: impl Into<String>, confidence: f64) {
        self.outcomes.lock().unwrap().push_back(Ok(Classification {
            intent: intent.into(),
            confidence,
        }));
    }

    /// Queue an error for the next call.
    pub fn queue_error(&self, error: ClassifierError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    /// Messages this mock has been asked to classify.
    pub fn received_messages(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }

    /// Outcomes still queued.
    pub fn outcomes_remaining(&self) -> usize {
        self.outcomes.lock().unwrap().len()
    }
}

#[async_trait]
impl IntentClassifier for MockClassifier {
    fn name(&self) -> &str {
        "mock"
    }

    async fn classify(&self, message: &str) -> Result<Classification, ClassifierError> {
        self.received.lock().unwrap().push(message.to_string());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ClassifierError::Internal(
                    "no mock outcome queued".to_string(),
                ))
            })
    }
}
