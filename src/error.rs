//! Custom error types for FinTrack
//!
//! This module defines the error hierarchy for the application using thiserror.
//! Every failure the services can report is a variant with structured fields,
//! so callers can render their own messages without parsing strings.

use thiserror::Error;

use crate::models::{FlowType, Money};

/// Reasons a category or transaction is rejected before anything is persisted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Amount must be strictly positive
    #[error("Amount must be greater than zero, got {amount}")]
    InvalidAmount { amount: Money },

    /// Amount text could not be read as a decimal number
    #[error("Invalid amount format: '{input}'. Use a number like '100' or '100.50'")]
    MalformedAmount { input: String },

    /// Category name on a transaction was blank
    #[error("Category cannot be empty")]
    EmptyCategory,

    /// Description on a transaction was blank
    #[error("Description cannot be empty")]
    EmptyDescription,

    /// Transaction type was not exactly "income" or "expense"
    #[error("Unknown transaction type '{value}': expected 'income' or 'expense'")]
    InvalidType { value: String },

    /// Name of a new category was blank
    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    /// A category with the same name and type already exists
    #[error("{kind} category already exists: {name}")]
    DuplicateCategory { name: String, kind: FlowType },

    /// Two categories in a seed list share an ID
    #[error("Duplicate category ID: {id}")]
    DuplicateCategoryId { id: String },

    /// Category's is_income flag disagrees with its type
    #[error("Category '{name}' has inconsistent type and is_income flag")]
    InconsistentCategory { name: String },
}

/// The main error type for FinTrack operations
#[derive(Error, Debug)]
pub enum FintrackError {
    /// Input rejected by validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No stored category matches the given name
    #[error("Category not found: {name}")]
    CategoryNotFound { name: String },

    /// Transaction type disagrees with its category's type
    #[error("Category '{category}' is an {category_type} category, cannot record it as {requested}")]
    TypeMismatch {
        category: String,
        category_type: FlowType,
        requested: FlowType,
    },

    /// Underlying read/write failure of a store
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persisted JSON could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors outside the stores
    #[error("I/O error: {0}")]
    Io(String),
}

impl FintrackError {
    /// Create a "not found" error for a category name
    pub fn category_not_found(name: impl Into<String>) -> Self {
        Self::CategoryNotFound { name: name.into() }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CategoryNotFound { .. })
    }

    /// Check if this is a type mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}

impl From<std::io::Error> for FintrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for FinTrack operations
pub type FintrackResult<T> = Result<T, FintrackError>;
