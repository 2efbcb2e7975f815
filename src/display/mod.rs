//! Display formatting for terminal output
//!
//! Turns models into text; nothing in here touches storage.

pub mod category;
pub mod transaction;

pub use category::{format_category_list, format_category_sections};
pub use transaction::{
    flow_label, format_totals, format_transaction_details, format_transaction_register,
};
