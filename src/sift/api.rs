//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every UI. It dispatches to `commands/*.rs`, resolves
//! defaults from configuration, and returns structured `CmdResult`s. It does
//! no printing and holds no business logic.
//!
//! `SiftApi<S: TextStore>` is generic over the persistence collaborator:
//! - Production: `SiftApi<FileStore>`
//! - Testing: `SiftApi<InMemoryStore>`

use crate::catalog;
use crate::commands;
use crate::config::SiftConfig;
use crate::error::Result;
use crate::model::Product;
use crate::store::TextStore;
use std::path::{Path, PathBuf};

pub use commands::config::ConfigAction;
pub use commands::filter::{Criterion, FilterQuery};
pub use commands::{CmdMessage, CmdResult, MessageLevel};

pub struct SiftApi<S: TextStore> {
    store: S,
    config_dir: PathBuf,
    products: Option<Vec<Product>>,
}

impl<S: TextStore> SiftApi<S> {
    /// Build an API over `store`. The catalog is only read by the commands
    /// that need it.
    pub fn new(store: S, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            config_dir: config_dir.into(),
            products: None,
        }
    }

    /// Replace the catalog for this session (e.g. from a `--catalog` flag).
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = Some(products);
        self
    }

    /// The session catalog: the override if set, else the configured
    /// catalog, else the built-in sample.
    pub fn products(&self) -> Result<Vec<Product>> {
        if let Some(products) = &self.products {
            return Ok(products.clone());
        }
        let config = SiftConfig::load(&self.config_dir)?;
        match config.catalog_path(&self.config_dir) {
            Some(path) => catalog::load(path),
            None => Ok(catalog::sample()),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn list_products(&self) -> Result<CmdResult> {
        commands::filter::list(&self.products()?)
    }

    pub fn filter_products(&self, query: &FilterQuery) -> Result<CmdResult> {
        commands::filter::run(&self.products()?, query)
    }

    pub fn add_entry(&mut self, text: &str) -> Result<CmdResult> {
        commands::journal::add(&mut self.store, text)
    }

    pub fn remove_entry(&mut self, key: u64) -> Result<CmdResult> {
        commands::journal::remove(&mut self.store, key)
    }

    pub fn list_entries(&self) -> Result<CmdResult> {
        commands::journal::list(&self.store)
    }

    /// Export the journal, to the configured `export-file` when no
    /// destination is given.
    pub fn export_journal(&mut self, destination: Option<&str>) -> Result<CmdResult> {
        let destination = match destination {
            Some(dest) => dest.to_string(),
            None => SiftConfig::load(&self.config_dir)?.export_file,
        };
        commands::journal::export(&mut self.store, &destination)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}
