use super::{check_destination, TextStore};
use crate::error::{Result, SiftError};
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a destination against the root.
    pub fn resolve(&self, destination: &str) -> PathBuf {
        // Path::join keeps absolute destinations unchanged
        self.root.join(destination)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(SiftError::Io)?;
        }
        Ok(())
    }
}

impl TextStore for FileStore {
    fn save(&mut self, content: &str, destination: &str) -> Result<()> {
        check_destination(destination)?;
        self.ensure_dir(&self.root)?;

        let path = self.resolve(destination);
        fs::write(&path, content).map_err(SiftError::Io)?;
        tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }

    fn load(&self, destination: &str) -> Result<String> {
        check_destination(destination)?;
        let path = self.resolve(destination);
        fs::read_to_string(&path).map_err(SiftError::Io)
    }
}
