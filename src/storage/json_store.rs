//! Lock-guarded JSON array file
//!
//! Each store owns one file holding a JSON array. Reads take the shared lock,
//! mutations take the exclusive lock for the whole read-modify-write cycle so
//! two in-process writers can never lose each other's updates. Nothing here
//! guards against a second OS process touching the same file.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::error::{FintrackError, FintrackResult};

use super::file_io::{read_json_array, write_json_atomic};

/// A durable, append-oriented collection stored as one JSON array file
pub struct JsonArrayStore<T> {
    path: PathBuf,
    lock: RwLock<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonArrayStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: RwLock::new(()),
            _marker: PhantomData,
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every element in file order
    ///
    /// A missing or unparsable file reads as an empty store so the application
    /// stays usable on first run. Other I/O failures are returned.
    pub fn read_all(&self) -> FintrackResult<Vec<T>> {
        let _guard = self.read_lock()?;

        match read_json_array(&self.path) {
            Ok(items) => Ok(items),
            Err(FintrackError::Parse(reason)) => {
                warn!(path = %self.path.display(), %reason, "unreadable store, treating as empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Append one element and rewrite the file
    pub fn append(&self, item: T) -> FintrackResult<()> {
        self.update(|items| {
            items.push(item);
            Ok(())
        })
    }

    /// Run a read-modify-write cycle under the exclusive lock
    ///
    /// The closure sees the current contents; if it returns `Ok` the modified
    /// list is written back atomically, if it returns `Err` the file is left
    /// untouched. An unparsable file is never overwritten: the closure starts
    /// from an empty list and, before the write, the old file is moved aside
    /// to `<name>.corrupt-<timestamp>`.
    pub fn update<R, F>(&self, f: F) -> FintrackResult<R>
    where
        F: FnOnce(&mut Vec<T>) -> FintrackResult<R>,
    {
        let _guard = self.write_lock()?;

        let (mut items, corrupt) = match read_json_array(&self.path) {
            Ok(items) => (items, false),
            Err(FintrackError::Parse(_)) => (Vec::new(), true),
            Err(e) => return Err(e),
        };

        let result = f(&mut items)?;

        if corrupt {
            self.quarantine()?;
        }
        write_json_atomic(&self.path, &items)?;

        debug!(path = %self.path.display(), count = items.len(), "store written");
        Ok(result)
    }

    /// Move an unreadable file out of the way, keeping its bytes
    fn quarantine(&self) -> FintrackResult<PathBuf> {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".corrupt-{}", Utc::now().format("%Y%m%dT%H%M%S%9f")));
        let target = self.path.with_file_name(name);

        fs::rename(&self.path, &target).map_err(|e| {
            FintrackError::Storage(format!(
                "Failed to move unreadable {} aside: {}",
                self.path.display(),
                e
            ))
        })?;

        warn!(
            path = %self.path.display(),
            moved_to = %target.display(),
            "unreadable store moved aside, starting a new one"
        );
        Ok(target)
    }

    /// Write `items` only if the backing file does not exist yet
    ///
    /// Returns whether anything was written.
    pub fn initialize(&self, items: &[T]) -> FintrackResult<bool> {
        let _guard = self.write_lock()?;

        if self.path.exists() {
            return Ok(false);
        }

        write_json_atomic(&self.path, items)?;
        Ok(true)
    }

    fn read_lock(&self) -> FintrackResult<RwLockReadGuard<'_, ()>> {
        self.lock
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> FintrackResult<RwLockWriteGuard<'_, ()>> {
        self.lock
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
