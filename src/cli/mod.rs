//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod menu;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use menu::{use_terminal_styling, Menu};
pub use transaction::{handle_transaction_command, TransactionCommands};
