//! User settings for FinTrack
//!
//! Display preferences plus the seed list of categories written on first run.

use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::FintrackError;
use crate::models::{default_categories, Category};
use crate::storage::write_json_atomic;

/// User settings for FinTrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown after amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for listings (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Categories written to the category store on first run
    #[serde(default = "default_categories")]
    pub default_categories: Vec<Category>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₽".to_string()
}

fn default_date_format() -> String {
    "%d.%m.%Y %H:%M".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_categories: default_categories(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FintrackError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FintrackError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk, replacing the file atomically
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
