//! The key-value store that backs persisted preferences and the dataset override.
//!
//! Each preference owns a disjoint key, so there is no locking between them: writes are
//! last-write-wins per key.

use crate::{utils, Result};
use anyhow::{ensure, Context};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::trace;

/// A simple string-keyed, string-valued store.
pub trait Storage {
    /// Returns the value stored under `key`, or `None` if nothing is stored there.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a key that is not present is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Stores each key as its own file inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens the storage directory at `dir`, creating it if it does not exist.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        utils::make_dir(&dir).context("Unable to create the storage directory")?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key)?;
        trace!("get {}", path.display());
        utils::read_optional(&path)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path(key)?;
        trace!("set {}", path.display());
        utils::write(&path, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path(key)?;
        trace!("remove {}", path.display());
        utils::remove(&path)
    }
}

/// Keys become file names, so only a conservative character set is accepted.
fn validate_key(key: &str) -> Result<()> {
    ensure!(!key.is_empty(), "A storage key cannot be empty");
    ensure!(
        !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')),
        "Invalid storage key '{key}'"
    );
    Ok(())
}

/// An in-memory `Storage`, used by tests and by callers that do not want anything persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    data: BTreeMap<String, String>,
    failing: BTreeSet<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every operation on `key` fail, which lets tests check that failures stay isolated to a
    /// single key.
    pub fn with_failing_key(mut self, key: impl Into<String>) -> Self {
        self.failing.insert(key.into());
        self
    }

    fn check(&self, key: &str) -> Result<()> {
        ensure!(
            !self.failing.contains(key),
            "Storage for '{key}' is unavailable"
        );
        Ok(())
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check(key)?;
        Ok(self.data.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.check(key)?;
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.check(key)?;
        self.data.remove(key);
        Ok(())
    }
}
