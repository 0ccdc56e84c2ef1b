//! Journal commands.
//!
//! The journal itself never touches storage. These commands load its state
//! through a [`TextStore`], apply one change, and save it back. Exporting goes
//! through the same store but writes the plain-text rendering instead.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SiftError};
use crate::journal::Journal;
use crate::store::TextStore;

/// Where the journal's own state is kept inside the store.
pub const JOURNAL_STATE: &str = "journal.json";

pub fn load_journal<S: TextStore>(store: &S) -> Result<Journal> {
    match store.load(JOURNAL_STATE) {
        Ok(content) => serde_json::from_str(&content).map_err(SiftError::Serialization),
        Err(e) if e.is_not_found() => Ok(Journal::new()),
        Err(e) => Err(e),
    }
}

pub fn save_journal<S: TextStore>(store: &mut S, journal: &Journal) -> Result<()> {
    let state = serde_json::to_string_pretty(journal).map_err(SiftError::Serialization)?;
    store.save(&state, JOURNAL_STATE)
}

pub fn add<S: TextStore>(store: &mut S, text: &str) -> Result<CmdResult> {
    if text.trim().is_empty() {
        return Err(SiftError::invalid("entry text cannot be empty"));
    }

    let mut journal = load_journal(store)?;
    let key = journal.add_entry(text);
    save_journal(store, &journal)?;

    let added = journal.get(key).cloned().into_iter().collect();
    let mut result = CmdResult::default().with_entries(added);
    result.add_message(CmdMessage::success(format!("Added entry {}", key)));
    Ok(result)
}

pub fn remove<S: TextStore>(store: &mut S, key: u64) -> Result<CmdResult> {
    let mut journal = load_journal(store)?;
    let removed = journal.remove_entry(key)?;
    save_journal(store, &journal)?;

    let mut result = CmdResult::default().with_entries(vec![removed]);
    result.add_message(CmdMessage::success(format!("Removed entry {}", key)));
    Ok(result)
}

pub fn list<S: TextStore>(store: &S) -> Result<CmdResult> {
    let journal = load_journal(store)?;
    Ok(CmdResult::default().with_entries(journal.entries().cloned().collect()))
}

/// Write the journal's text rendering to `destination`.
pub fn export<S: TextStore>(store: &mut S, destination: &str) -> Result<CmdResult> {
    let journal = load_journal(store)?;
    store.save(&journal.to_string(), destination)?;
    tracing::info!("Exported {} entries to {}", journal.len(), destination);

    let mut result = CmdResult::default();
    if journal.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Journal is empty; wrote an empty file to {}",
            destination
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Exported {} entries to {}",
            journal.len(),
            destination
        )));
    }
    Ok(result)
}
