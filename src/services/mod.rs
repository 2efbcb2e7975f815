//! Service layer for FinTrack
//!
//! The service layer provides business logic on top of the storage layer:
//! every validation happens here, before anything is persisted.

pub mod category;
pub mod transaction;

pub use category::CategoryService;
pub use transaction::{Totals, TransactionService};
