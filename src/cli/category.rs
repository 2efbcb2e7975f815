//! Category CLI commands
//!
//! Implements CLI commands for listing and adding categories.

use clap::Subcommand;

use crate::display::category::{format_category_list, format_category_sections};
use crate::error::FintrackResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories, grouped into income and expense
    List {
        /// Only income categories
        #[arg(long, conflicts_with = "expense")]
        income: bool,
        /// Only expense categories
        #[arg(long)]
        expense: bool,
    },

    /// Add a user category
    Add {
        /// Category name
        name: String,
        /// Create an income category (default is expense)
        #[arg(long)]
        income: bool,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> FintrackResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List { income, expense } => {
            if income || expense {
                let categories = service.get_categories_by_type(income)?;
                print!("{}", format_category_list(&categories));
            } else {
                let income = service.get_categories_by_type(true)?;
                let expense = service.get_categories_by_type(false)?;
                print!("{}", format_category_sections(&income, &expense));
            }
        }

        CategoryCommands::Add { name, income } => {
            let category = service.add_category(&name, income)?;
            println!(
                "Created {} category: {} (ID {})",
                category.kind, category.name, category.id
            );
        }
    }

    Ok(())
}
