//! FinTrack - a small personal finance tracker for the terminal
//!
//! Records income and expense transactions against a set of categories and
//! keeps both in JSON files on local disk.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, transactions)
//! - `storage`: JSON file storage layer
//! - `services`: Validation and business rules
//! - `display`: Text rendering for the terminal
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,no_run
//! use fintrack::config::{FintrackPaths, Settings};
//! use fintrack::models::Money;
//! use fintrack::services::TransactionService;
//! use fintrack::storage::{initialize_storage, Storage};
//!
//! # fn main() -> Result<(), fintrack::FintrackError> {
//! let paths = FintrackPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths);
//! initialize_storage(&storage, &settings.default_categories)?;
//!
//! let service = TransactionService::new(&storage);
//! service.add_transaction(Money::from_cents(10050), "Продукты", "Groceries", "expense")?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FintrackError, FintrackResult};
