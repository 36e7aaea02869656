use chrono::{DateTime, Utc};

use crate::roast::{RoastInput, RoastOutput};

/// One completed roast exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub input: RoastInput,
    pub output: RoastOutput,
    pub at: DateTime<Utc>,
}

/// Ordered, append-only session history. Lives in memory for the duration of
/// the process; nothing is persisted.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, input: RoastInput, output: RoastOutput) {
        self.entries.push(HistoryEntry {
            input,
            output,
            at: Utc::now(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }
}
