// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::check::check_snapshot;
use crate::error::PersistenceError;
use rota::{Store, StoreSnapshot};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A store persisted as a single pretty-printed JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Creates storage backed by the file at `path`.
    ///
    /// Nothing is touched on disk until [`Self::load`] or [`Self::save`].
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the data file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the store.
    ///
    /// A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file is not a valid snapshot
    /// - The snapshot holds duplicates or dangling references
    pub fn load(&self) -> Result<Store, PersistenceError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "No data file found, starting empty");
            return Ok(Store::new());
        }

        let contents: String =
            fs::read_to_string(&self.path).map_err(|e| PersistenceError::io(&self.path, e))?;
        let snapshot: StoreSnapshot = serde_json::from_str(&contents)?;

        if let Err(err) = check_snapshot(&snapshot) {
            warn!(path = %self.path.display(), %err, "Rejected data file");
            return Err(err);
        }

        let store: Store = Store::from_snapshot(snapshot);
        info!(path = %self.path.display(), summary = %store.summary(), "Loaded store");
        Ok(store)
    }

    /// Saves the store, creating parent directories as needed.
    ///
    /// The snapshot is written to a sibling temporary file first and then
    /// renamed over the data file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its directory cannot be written.
    pub fn save(&self, store: &Store) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PersistenceError::io(parent, e))?;
        }

        let json: String = serde_json::to_string_pretty(&store.snapshot())?;
        let staging: PathBuf = self.path.with_extension("json.tmp");
        fs::write(&staging, json).map_err(|e| PersistenceError::io(&staging, e))?;
        fs::rename(&staging, &self.path).map_err(|e| PersistenceError::io(&self.path, e))?;

        debug!(path = %self.path.display(), summary = %store.summary(), "Saved store");
        Ok(())
    }
}
