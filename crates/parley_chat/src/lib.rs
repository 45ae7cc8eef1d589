//! Core mediation logic for the Parley chat responder.
//!
//! Two components, initialization-ordered:
//! - [`ResponseTable`]: intent -> canned response mapping, built once at
//!   startup from the chat dataset.
//! - [`ChatMediator`]: per-message resolution combining the external
//!   classifier verdict, the confidence threshold, and the table lookup,
//!   with a safe textual fallback for every failure mode.

pub mod mediator;
pub mod responses;

pub use mediator::{ChatMediator, CONFIDENCE_THRESHOLD};
pub use responses::ResponseTable;
