//! # Storage Layer
//!
//! The [`TextStore`] trait is the persistence collaborator: it takes a blob of
//! text and a destination and writes it, or reads it back. It knows nothing
//! about journals or products.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: writes files under a root directory
//!   - Relative destinations resolve against the root, absolute ones are used as-is
//!   - One plain overwrite per save, no temp files, no atomic rename
//!
//! - [`memory::InMemoryStore`]: map-backed storage for testing
//!   - No persistence
//!
//! ## Failure Reporting
//!
//! Every failure is returned to the caller. An unwritable or invalid
//! destination surfaces as [`SiftError::Io`](crate::error::SiftError::Io) and a
//! missing destination on load as an `Io` error of kind `NotFound`, for both
//! implementations.

use crate::error::{Result, SiftError};

pub mod fs;
pub mod memory;

/// Abstract interface for text persistence.
pub trait TextStore {
    /// Write `content` to `destination`, replacing anything already there.
    fn save(&mut self, content: &str, destination: &str) -> Result<()>;

    /// Read the full content previously saved at `destination`.
    fn load(&self, destination: &str) -> Result<String>;
}

pub(crate) fn check_destination(destination: &str) -> Result<()> {
    if destination.trim().is_empty() {
        return Err(SiftError::invalid("destination cannot be empty"));
    }
    Ok(())
}
