//! HTTP classifier backend.
//!
//! Issues a single `POST {"text": ...}` to the configured endpoint and parses
//! the `{"intent", "confidence"}` answer. The underlying `reqwest::Client` is
//! long-lived and shared across requests so connections are reused; the
//! request timeout bounds worst-case latency for a whole call.

use async_trait::async_trait;
use parley_protocol::{Classification, ClassifyRequest};
use std::time::Duration;
use tracing::debug;

use crate::{ClassifierError, IntentClassifier};

/// Classifier client over HTTP.
pub struct HttpClassifier {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpClassifier {
    /// Create a client for `endpoint` with an overall per-request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ClassifierError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClassifierError::Internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_client(endpoint: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl IntentClassifier for HttpClassifier {
    fn name(&self) -> &str {
        "http"
    }

    async fn classify(&self, message: &str) -> Result<Classification, ClassifierError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ClassifyRequest::new(message))
            .send()
            .await
            .map_err(|e| ClassifierError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifierError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClassifierError::Transport(e.to_string()))?;

        let classification: Classification = serde_json::from_str(&body)
            .map_err(|e| ClassifierError::Protocol(e.to_string()))?;

        debug!(
            intent = %classification.intent,
            confidence = classification.confidence,
            "classifier verdict"
        );
        Ok(classification)
    }
}
