//! Category display formatting
//!
//! Formats categories for terminal output, split into income and expense
//! sections or as a flat table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Category;

use super::transaction::flow_label;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Editable")]
    editable: &'static str,
}

/// Format income and expense categories as two bulleted sections
pub fn format_category_sections(income: &[Category], expense: &[Category]) -> String {
    let mut output = String::new();

    output.push_str("Income:\n");
    push_section(&mut output, income, "No income categories.");

    output.push('\n');

    output.push_str("Expense:\n");
    push_section(&mut output, expense, "No expense categories.");

    output
}

fn push_section(output: &mut String, categories: &[Category], empty_message: &str) {
    if categories.is_empty() {
        output.push_str(&format!("  {}\n", empty_message));
        return;
    }

    for category in categories {
        let marker = if category.editable { "" } else { " (system)" };
        output.push_str(&format!("  • {}{}\n", category.name, marker));
    }
}

/// Format a flat table of categories
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'fintrack init' to create default categories.\n"
            .to_string();
    }

    let rows = categories.iter().map(|c| CategoryRow {
        id: c.id.to_string(),
        name: c.name.clone(),
        kind: flow_label(c.kind),
        editable: if c.editable { "yes" } else { "no" },
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}
