// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving the store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The data file could not be read or written.
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// The data file is not valid JSON for a store snapshot.
    #[error("Malformed data file: {0}")]
    Json(#[from] serde_json::Error),

    /// The data file parsed but breaks a store invariant.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
