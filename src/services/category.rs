//! Category service
//!
//! The only read/write gateway to categories for the rest of the system.

use tracing::debug;

use crate::error::{FintrackResult, ValidationError};
use crate::models::{Category, FlowType};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List income (`true`) or expense (`false`) categories in persisted order
    ///
    /// An empty result is not an error.
    pub fn get_categories_by_type(&self, is_income: bool) -> FintrackResult<Vec<Category>> {
        self.storage.categories.get_by_type(is_income)
    }

    /// List all categories in persisted order
    pub fn list_categories(&self) -> FintrackResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// Find categories by name (case-insensitive)
    ///
    /// More than one category can match when the same name exists under
    /// both types.
    pub fn find_by_name(&self, name: &str) -> FintrackResult<Vec<Category>> {
        self.storage.categories.find_by_name(name)
    }

    /// Add a new user-editable category
    pub fn add_category(&self, name: &str, is_income: bool) -> FintrackResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            debug!("rejected category with empty name");
            return Err(ValidationError::EmptyCategoryName.into());
        }

        self.storage
            .categories
            .add(name, FlowType::from_is_income(is_income))
    }
}
