//! Path management for FinTrack
//!
//! ## Path Resolution Order
//!
//! 1. `FINTRACK_DATA_DIR` environment variable (if set)
//! 2. The platform data directory (`~/.local/share/fintrack` on Linux,
//!    `~/Library/Application Support/fintrack` on macOS, `%APPDATA%\fintrack`
//!    on Windows)
//!
//! The embedding application can bypass resolution entirely and name both
//! store files with [`FintrackPaths::with_files`].

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::FintrackError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "FINTRACK_DATA_DIR";

/// Manages all paths used by FinTrack
#[derive(Debug, Clone)]
pub struct FintrackPaths {
    base_dir: PathBuf,
    transactions_file: PathBuf,
    categories_file: PathBuf,
}

impl FintrackPaths {
    /// Resolve paths from the environment or the platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FintrackError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self::with_base_dir(base_dir))
    }

    /// Create paths under a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        let data_dir = base_dir.join("data");
        Self {
            transactions_file: data_dir.join("transactions.json"),
            categories_file: data_dir.join("categories.json"),
            base_dir,
        }
    }

    /// Use explicit store files; settings live next to the transactions file
    pub fn with_files(transactions_file: PathBuf, categories_file: PathBuf) -> Self {
        let base_dir = transactions_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self {
            base_dir,
            transactions_file,
            categories_file,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding the store files
    pub fn data_dir(&self) -> PathBuf {
        self.transactions_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.base_dir.clone())
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn transactions_file(&self) -> &Path {
        &self.transactions_file
    }

    pub fn categories_file(&self) -> &Path {
        &self.categories_file
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FintrackError> {
        let mut dirs = vec![self.base_dir.clone(), self.data_dir()];
        if let Some(parent) = self.categories_file.parent() {
            dirs.push(parent.to_path_buf());
        }

        for dir in dirs.iter().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| {
                FintrackError::Io(format!("Failed to create directory {}: {}", dir.display(), e))
            })?;
        }

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, FintrackError> {
    ProjectDirs::from("", "", "fintrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| FintrackError::Config("Could not determine home directory".into()))
}
