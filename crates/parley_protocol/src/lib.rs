//! Canonical wire types for the Parley chat responder.
//!
//! Two boundaries share these payloads:
//! - Inbound: the chat HTTP API (`ChatRequest` / `ChatReply`)
//! - Outbound: the intent classifier service (`ClassifyRequest` / `Classification`)
//!
//! All types serialize with serde; these are the CANONICAL definitions,
//! use them everywhere.

pub mod defaults;
pub mod types;

pub use types::{ChatReply, ChatRequest, Classification, ClassifyRequest};
