//! # Journal
//!
//! A journal only holds entries. It never reads or writes files; persisting a
//! journal is the job of a [`TextStore`](crate::store::TextStore), so the two
//! can change independently.
//!
//! Entries live in an ordered map keyed by a counter that starts at 1 and only
//! grows. Removing an entry never frees its key for reuse.

use crate::error::{Result, SiftError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub key: u64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    entries: BTreeMap<u64, JournalEntry>,
    count: u64,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry and return its key.
    pub fn add_entry(&mut self, text: impl Into<String>) -> u64 {
        self.count += 1;
        let key = self.count;
        self.entries.insert(
            key,
            JournalEntry {
                key,
                text: text.into(),
                created_at: Utc::now(),
            },
        );
        tracing::info!("Journal entry {} added", key);
        key
    }

    /// Remove an entry by key, returning it.
    pub fn remove_entry(&mut self, key: u64) -> Result<JournalEntry> {
        let entry = self
            .entries
            .remove(&key)
            .ok_or(SiftError::EntryNotFound(key))?;
        tracing::info!("Journal entry {} removed", key);
        Ok(entry)
    }

    pub fn get(&self, key: u64) -> Option<&JournalEntry> {
        self.entries.get(&key)
    }

    /// Entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = &JournalEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}
