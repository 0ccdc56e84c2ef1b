use super::{check_destination, TextStore};
use crate::error::{Result, SiftError};
use std::collections::HashMap;
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    blobs: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, destination: &str) -> bool {
        self.blobs.contains_key(destination)
    }
}

impl TextStore for InMemoryStore {
    fn save(&mut self, content: &str, destination: &str) -> Result<()> {
        check_destination(destination)?;
        self.blobs
            .insert(destination.to_string(), content.to_string());
        Ok(())
    }

    fn load(&self, destination: &str) -> Result<String> {
        check_destination(destination)?;
        self.blobs.get(destination).cloned().ok_or_else(|| {
            SiftError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("nothing saved at '{}'", destination),
            ))
        })
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::journal::Journal;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_text(mut self, destination: &str, content: &str) -> Self {
            self.store.save(content, destination).unwrap();
            self
        }

        /// Seed a saved journal state holding `count` entries.
        pub fn with_journal(mut self, destination: &str, count: usize) -> Self {
            let mut journal = Journal::new();
            for i in 0..count {
                journal.add_entry(format!("Entry {}", i + 1));
            }
            let state = serde_json::to_string(&journal).unwrap();
            self.store.save(&state, destination).unwrap();
            self
        }
    }
}
