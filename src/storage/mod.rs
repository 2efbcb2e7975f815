//! Storage layer for FinTrack
//!
//! Two independent JSON array files, one for categories and one for
//! transactions, each guarded by its own reader/writer lock and replaced
//! atomically on every mutation.

pub mod categories;
pub mod file_io;
pub mod init;
pub mod json_store;
pub mod transactions;

pub use categories::CategoryRepository;
pub use file_io::{read_json_array, write_json_atomic};
pub use init::initialize_storage;
pub use json_store::JsonArrayStore;
pub use transactions::TransactionRepository;

use crate::config::paths::FintrackPaths;

/// Shared persistence handle giving access to both repositories
pub struct Storage {
    paths: FintrackPaths,
    pub transactions: TransactionRepository,
    pub categories: CategoryRepository,
}

impl Storage {
    /// Create a new Storage instance
    ///
    /// Nothing is read or written until a repository is used; missing files
    /// read as empty stores.
    pub fn new(paths: FintrackPaths) -> Self {
        Self {
            transactions: TransactionRepository::new(paths.transactions_file().to_path_buf()),
            categories: CategoryRepository::new(paths.categories_file().to_path_buf()),
            paths,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FintrackPaths {
        &self.paths
    }

    /// Check if the category store has been seeded
    pub fn is_initialized(&self) -> bool {
        !init::needs_initialization(&self.paths)
    }
}
