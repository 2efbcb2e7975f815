//! Transaction CLI commands
//!
//! Implements CLI commands for recording and listing transactions.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{FintrackResult, ValidationError};
use crate::models::Money;
use crate::services::TransactionService;
use crate::storage::Storage;

/// Stored in place of a description the user left blank
pub const NO_DESCRIPTION: &str = "(no description)";

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Amount (e.g., "100" or "100.50")
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Transaction type: income or expense
        #[arg(short = 't', long = "type")]
        kind: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// List all transactions with totals
    List,
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FintrackResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            kind,
            description,
        } => {
            let amount = parse_amount(&amount)?;
            let txn = service.add_transaction(
                amount,
                &category,
                description_or_placeholder(&description),
                &kind,
            )?;

            println!("Transaction recorded.");
            println!();
            print!("{}", format_transaction_details(&txn, settings));
        }

        TransactionCommands::List => {
            let transactions = service.get_all_transactions()?;
            print!("{}", format_transaction_register(&transactions, settings));
        }
    }

    Ok(())
}

/// Parse user-entered amount text
pub fn parse_amount(input: &str) -> FintrackResult<Money> {
    Money::parse(input).map_err(|_| {
        ValidationError::MalformedAmount {
            input: input.trim().to_string(),
        }
        .into()
    })
}

/// Substitute the placeholder for a blank description
pub fn description_or_placeholder(description: &str) -> &str {
    if description.trim().is_empty() {
        NO_DESCRIPTION
    } else {
        description
    }
}
