//! Transaction display formatting
//!
//! Register table, running totals and the confirmation shown after a
//! transaction is recorded.

use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{FlowType, Transaction};
use crate::services::Totals;

const FALLBACK_DATE_FORMAT: &str = "%d.%m.%Y %H:%M";

#[derive(Tabled)]
struct RegisterRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Human label for a flow type
pub fn flow_label(kind: FlowType) -> &'static str {
    match kind {
        FlowType::Income => "Income",
        FlowType::Expense => "Expense",
    }
}

/// Format all transactions as a register with a running balance, followed by totals
pub fn format_transaction_register(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut running = crate::models::Money::zero();
    let rows: Vec<RegisterRow> = transactions
        .iter()
        .map(|txn| {
            running += txn.signed_amount();
            RegisterRow {
                id: txn.id.to_string(),
                date: format_date(txn, &settings.date_format),
                kind: flow_label(txn.kind),
                category: txn.category.clone(),
                description: truncate(&txn.description, 30),
                amount: txn.signed_amount().to_string(),
                balance: running.to_string(),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());

    let mut output = table.to_string();
    output.push_str("\n\n");
    output.push_str(&format_totals(
        &Totals::from_transactions(transactions),
        &settings.currency_symbol,
    ));
    output
}

/// Format income, expense and balance totals
pub fn format_totals(totals: &Totals, currency_symbol: &str) -> String {
    format!(
        "Total income:  {}\nTotal expense: {}\nBalance:       {}\n",
        totals.income.format_with_symbol(currency_symbol),
        totals.expense.format_with_symbol(currency_symbol),
        totals.balance.format_with_symbol(currency_symbol),
    )
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("ID:          {}\n", txn.id));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Type:        {}\n", flow_label(txn.kind)));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!(
        "Date:        {}\n",
        format_date(txn, &settings.date_format)
    ));

    output
}

/// Render the transaction date in local time
///
/// A malformed strftime pattern falls back to the default instead of failing.
fn format_date(txn: &Transaction, pattern: &str) -> String {
    let pattern = if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        FALLBACK_DATE_FORMAT
    } else {
        pattern
    };

    txn.date.with_timezone(&Local).format(pattern).to_string()
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
