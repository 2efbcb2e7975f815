//! Transaction repository for JSON storage
//!
//! Manages loading and appending transactions in transactions.json. The store
//! is append-only: nothing here edits or removes a recorded transaction.

use std::path::{Path, PathBuf};

use crate::error::FintrackResult;
use crate::models::Transaction;

use super::json_store::JsonArrayStore;

/// Repository for transaction persistence
pub struct TransactionRepository {
    store: JsonArrayStore<Transaction>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            store: JsonArrayStore::new(path),
        }
    }

    /// Get all transactions in the order they were recorded
    pub fn get_all(&self) -> FintrackResult<Vec<Transaction>> {
        self.store.read_all()
    }

    /// Append a transaction
    pub fn append(&self, txn: Transaction) -> FintrackResult<()> {
        self.store.append(txn)
    }

    /// Count transactions
    pub fn count(&self) -> FintrackResult<usize> {
        Ok(self.store.read_all()?.len())
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }
}
