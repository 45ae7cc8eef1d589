//! Intent -> canned response table built from the chat dataset.
//!
//! Dataset column order: `ID, Intent, User_Query, System_Instruction,
//! Ideal_Response, Source`. Only Intent (index 1) and Ideal_Response
//! (index 4) feed the table; other columns are tolerated and ignored.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// A usable row reaches at least through Ideal_Response.
const MIN_FIELDS: usize = 5;
const INTENT_FIELD: usize = 1;
const RESPONSE_FIELD: usize = 4;

/// Immutable intent -> response lookup, built once at startup and owned by
/// the mediator for the life of the process.
///
/// Keys are compared case-insensitively. Multiple training rows share an
/// intent; the first response encountered wins and later duplicates are
/// dropped.
#[derive(Debug, Default)]
pub struct ResponseTable {
    entries: HashMap<String, String>,
}

impl ResponseTable {
    /// Build the table from a delimited dataset file.
    ///
    /// Never fails: a missing or unreadable file yields an empty table and
    /// the service degrades to "no canned responses"; malformed rows are
    /// skipped.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "dataset not readable, starting with an empty response table"
                );
                return Self::default();
            }
        };

        let mut entries: HashMap<String, String> = HashMap::new();
        // First line is the header.
        for line in contents.lines().skip(1) {
            let fields = split_line(line);
            if fields.len() < MIN_FIELDS {
                debug!(fields = fields.len(), "skipping malformed dataset row");
                continue;
            }
            entries
                .entry(fields[INTENT_FIELD].to_lowercase())
                .or_insert_with(|| fields[RESPONSE_FIELD].clone());
        }

        info!(path = %path.display(), intents = entries.len(), "response table loaded");
        Self { entries }
    }

    /// Look up the canned response for an intent, case-insensitively.
    pub fn get(&self, intent: &str) -> Option<&str> {
        self.entries.get(&intent.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split one dataset line into fields.
///
/// A double quote toggles the in-quotes state and is never emitted; a comma
/// separates fields only outside quotes; everything else (embedded commas
/// included) lands in the current field. The final field flushes at end of
/// line without a trailing separator.
fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
