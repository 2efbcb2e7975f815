//! Core data models for FinTrack
//!
//! Categories, transactions, the money type and the ID newtypes that tie
//! them together.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::{default_categories, Category, FlowType};
pub use ids::{CategoryId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use transaction::Transaction;
