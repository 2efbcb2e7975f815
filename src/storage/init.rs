//! Storage initialization
//!
//! Handles first-run setup: directories plus the seed categories

use crate::config::paths::FintrackPaths;
use crate::error::FintrackResult;
use crate::models::Category;

use super::Storage;

/// Initialize storage for a fresh installation
///
/// Writes `seed` to the category store unless a category file already exists.
/// Returns whether the seed was written.
pub fn initialize_storage(storage: &Storage, seed: &[Category]) -> FintrackResult<bool> {
    storage.paths().ensure_directories()?;
    storage.categories.seed(seed)
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &FintrackPaths) -> bool {
    !paths.categories_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_categories;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone());

        assert!(needs_initialization(&paths));

        assert!(initialize_storage(&storage, &default_categories()).unwrap());

        assert!(!needs_initialization(&paths));
        assert!(paths.categories_file().exists());
        assert!(!paths.transactions_file().exists());
    }

    #[test]
    fn test_default_categories_created() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone());

        initialize_storage(&storage, &default_categories()).unwrap();

        let content = std::fs::read_to_string(paths.categories_file()).unwrap();
        let data: Vec<Category> = serde_json::from_str(&content).unwrap();

        assert_eq!(data, default_categories());
    }

    #[test]
    fn test_second_initialization_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths);

        initialize_storage(&storage, &default_categories()).unwrap();
        assert!(!initialize_storage(&storage, &[]).unwrap());
        assert_eq!(storage.categories.count().unwrap(), 7);
    }
}
