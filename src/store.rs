use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, error};

use crate::error::StoreError;
use crate::models::Todo;

/// Flat JSON file holding the whole todo collection.
///
/// There is no locking and no cache: every call goes to disk, and two writers
/// racing on the same file means the last save wins.
#[derive(Debug, Clone)]
pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full collection. A missing file is an empty collection.
    pub fn load(&self) -> Result<Vec<Todo>, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&data).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrites the file with the full collection, pretty-printed.
    pub fn save(&self, todos: &[Todo]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(todos)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = todos.len(), "Saved todos");
        Ok(())
    }

    /// Like [`load`](Self::load), but an unreadable or corrupt file is logged
    /// and treated as empty.
    pub fn load_or_empty(&self) -> Vec<Todo> {
        self.load().unwrap_or_else(|err| {
            error!(%err, "Error reading todos");
            Vec::new()
        })
    }

    /// Like [`save`](Self::save), but a failed write is logged and dropped.
    pub fn save_or_log(&self, todos: &[Todo]) {
        if let Err(err) = self.save(todos) {
            error!(%err, "Error writing todos");
        }
    }
}
