//! Intent classifier client abstraction.
//!
//! This crate provides a trait-based abstraction over the external intent
//! classification service, enabling a real HTTP backend in production and a
//! deterministic mock in tests.
//!
//! The wire contract is a single `POST` of `{"text": "<message>"}` to the
//! configured endpoint, answered with `{"intent": "<label>", "confidence": <f64>}`.

pub mod http;
pub mod mock;

use async_trait::async_trait;
use parley_protocol::Classification;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur while obtaining a classification.
///
/// `Transport` and `Status` mean the service could not be reached or refused
/// the request; `Protocol` means it answered with a body we could not use.
/// The mediator maps all three to the same user-facing apology but logs them
/// separately.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Connection failure, timeout, or any other request-level fault
    #[error("transport error: {0}")]
    Transport(String),

    /// Endpoint responded with a non-success HTTP status
    #[error("classifier returned HTTP {status}")]
    Status { status: u16 },

    /// Response body was not valid JSON or missing required fields
    #[error("invalid classifier response: {0}")]
    Protocol(String),

    /// Unanticipated internal fault (e.g. client construction)
    #[error("internal error: {0}")]
    Internal(String),
}

// ============================================================================
// Classifier Trait
// ============================================================================

/// A service that assigns an intent label and confidence to a user message.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Human-readable backend name for logs.
    fn name(&self) -> &str;

    /// Classify a single message. One attempt, no retries.
    async fn classify(&self, message: &str) -> Result<Classification, ClassifierError>;
}
