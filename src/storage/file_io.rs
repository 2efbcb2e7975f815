//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FintrackError;

/// Read a JSON array from a file, returning an empty list if the file doesn't exist
///
/// A file holding nothing but whitespace is also read as an empty list.
/// Unparsable content yields [`FintrackError::Parse`]; any other I/O failure
/// yields [`FintrackError::Storage`].
pub fn read_json_array<T, P>(path: P) -> Result<Vec<T>, FintrackError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            return Err(FintrackError::Parse(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
        Err(e) => {
            return Err(FintrackError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&contents)
        .map_err(|e| FintrackError::Parse(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at all,
/// preventing corruption on crashes or power failures.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), FintrackError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            FintrackError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    if let Err(e) = write_temp_file(&temp_path, data) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        FintrackError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn write_temp_file<T>(temp_path: &Path, data: &T) -> Result<(), FintrackError>
where
    T: Serialize + ?Sized,
{
    let file = File::create(temp_path)
        .map_err(|e| FintrackError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| FintrackError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| FintrackError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| FintrackError::Storage(format!("Failed to sync data: {}", e)))
}
