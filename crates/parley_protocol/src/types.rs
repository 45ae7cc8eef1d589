//! Wire payload types for the chat API and the classifier service.

use serde::{Deserialize, Serialize};

// ============================================================================
// Inbound chat API (server <-> end user)
// ============================================================================

/// Body of `POST /api/chat/send`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Raw user message. Must be non-blank; the server rejects empty or
    /// whitespace-only messages before the mediator runs.
    pub message: String,
}

/// Success envelope returned by the chat API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    /// User-displayable reply text. Always present; the mediator never
    /// surfaces a fault.
    pub response: String,
}

// ============================================================================
// Outbound classifier protocol (server <-> intent classifier)
// ============================================================================

/// Body POSTed to the classifier endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// The raw user message, untouched.
    pub text: String,
}

impl ClassifyRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Classifier verdict for a single message.
///
/// `intent` and `confidence` are both required on the wire; extra fields
/// from the classifier are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Categorical intent label, e.g. "greeting" or "hours".
    pub intent: String,
    /// Certainty score in [0, 1].
    pub confidence: f64,
}
