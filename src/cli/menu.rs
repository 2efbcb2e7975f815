//! Interactive numbered menu
//!
//! Line-oriented: every answer is one line read from the input, so the menu
//! runs the same against a terminal, a pipe or an in-memory buffer.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};
use thiserror::Error;

use crate::config::Settings;
use crate::display::category::format_category_sections;
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{FintrackError, FintrackResult, ValidationError};
use crate::models::{FlowType, Transaction};
use crate::services::{CategoryService, TransactionService};
use crate::storage::Storage;

use super::transaction::{description_or_placeholder, parse_amount};

const RULE: &str = "==================================================";

#[derive(Debug, Error)]
enum MenuError {
    /// Answer that cannot be used; the action is abandoned
    #[error("{0}")]
    Input(String),

    /// Input reached end of file
    #[error("input closed")]
    Closed,

    #[error(transparent)]
    Fintrack(#[from] FintrackError),
}

impl From<io::Error> for MenuError {
    fn from(err: io::Error) -> Self {
        MenuError::Fintrack(err.into())
    }
}

type MenuResult<T> = Result<T, MenuError>;

/// Whether stdout should receive colours and screen clearing
pub fn use_terminal_styling() -> bool {
    io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// The interactive menu over a reader and a writer
pub struct Menu<'a, R, W> {
    storage: &'a Storage,
    settings: &'a Settings,
    input: R,
    output: W,
    styled: bool,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a plain (unstyled) menu
    pub fn new(storage: &'a Storage, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            storage,
            settings,
            input,
            output,
            styled: false,
        }
    }

    /// Enable colours and screen clearing
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Run until the user picks 0 or the input ends
    pub fn run(&mut self) -> FintrackResult<()> {
        self.clear_screen()?;
        let banner = self.paint("Welcome to FinTrack!", Color::Green);
        writeln!(self.output, "{}", banner)?;

        loop {
            self.print_menu()?;

            let choice = match self.read_line() {
                Ok(choice) => choice,
                Err(MenuError::Closed) => {
                    writeln!(self.output)?;
                    writeln!(self.output, "Input closed. Exiting.")?;
                    break;
                }
                Err(err) => return Err(err.into()),
            };

            let outcome = match choice.as_str() {
                "" => continue,
                "1" => self.add_transaction().map(|_| ()),
                "2" => self.show_transactions(),
                "3" => self.show_categories(),
                "0" => {
                    self.clear_screen()?;
                    let farewell =
                        self.paint("Thank you for using FinTrack. Goodbye!", Color::Green);
                    writeln!(self.output, "{}", farewell)?;
                    break;
                }
                _ => Err(MenuError::Input(format!(
                    "Unknown option '{}'. Enter a number from 0 to 3.",
                    choice
                ))),
            };

            match outcome {
                Ok(()) => {}
                Err(MenuError::Closed) => {
                    writeln!(self.output)?;
                    writeln!(self.output, "Input closed. Exiting.")?;
                    break;
                }
                Err(MenuError::Input(message)) => self.print_error(&message)?,
                Err(MenuError::Fintrack(err)) => self.print_error(&err.to_string())?,
            }

            match self.pause() {
                Ok(()) => {}
                Err(MenuError::Closed) => break,
                Err(err) => return Err(err.into()),
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> MenuResult<()> {
        self.clear_screen()?;
        let title = self.paint(
            "=====================FinTrack=====================",
            Color::Cyan,
        );
        let rule = self.paint(RULE, Color::Cyan);

        writeln!(self.output, "{}", title)?;
        writeln!(self.output, "1. Add transaction")?;
        writeln!(self.output, "2. Show transactions")?;
        writeln!(self.output, "3. Show categories")?;
        writeln!(self.output, "0. Exit")?;
        writeln!(self.output, "{}", rule)?;
        self.prompt("Choose an option: ")
    }

    fn add_transaction(&mut self) -> MenuResult<Transaction> {
        self.clear_screen()?;
        self.heading("Add transaction")?;

        self.prompt("Amount: ")?;
        let amount = parse_amount(&self.read_line()?)?;
        if !amount.is_positive() {
            return Err(FintrackError::from(ValidationError::InvalidAmount { amount }).into());
        }

        self.prompt("Type (1 - income, 2 - expense): ")?;
        let kind = match self.read_line()?.as_str() {
            "1" => FlowType::Income,
            "2" => FlowType::Expense,
            other => {
                return Err(MenuError::Input(format!(
                    "Unknown type '{}'. Enter 1 or 2.",
                    other
                )))
            }
        };

        let categories =
            CategoryService::new(self.storage).get_categories_by_type(kind.is_income())?;
        if categories.is_empty() {
            return Err(MenuError::Input(format!("No {} categories available.", kind)));
        }

        writeln!(self.output, "Categories:")?;
        for (index, category) in categories.iter().enumerate() {
            writeln!(self.output, "  {}. {}", index + 1, category.name)?;
        }
        self.prompt("Category number: ")?;
        let answer = self.read_line()?;
        let category = answer
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| categories.get(i))
            .ok_or_else(|| {
                MenuError::Input(format!(
                    "Invalid category number '{}'. Choose 1 to {}.",
                    answer,
                    categories.len()
                ))
            })?;

        self.prompt("Description: ")?;
        let description = self.read_line()?;

        let txn = TransactionService::new(self.storage).add_transaction(
            amount,
            &category.name,
            description_or_placeholder(&description),
            kind.as_str(),
        )?;

        writeln!(self.output)?;
        let done = self.paint("Transaction added!", Color::Green);
        writeln!(self.output, "{}", done)?;
        write!(
            self.output,
            "{}",
            format_transaction_details(&txn, self.settings)
        )?;
        Ok(txn)
    }

    fn show_transactions(&mut self) -> MenuResult<()> {
        self.clear_screen()?;
        self.heading("Transactions")?;

        let transactions = TransactionService::new(self.storage).get_all_transactions()?;
        write!(
            self.output,
            "{}",
            format_transaction_register(&transactions, self.settings)
        )?;
        Ok(())
    }

    fn show_categories(&mut self) -> MenuResult<()> {
        self.clear_screen()?;
        self.heading("Categories")?;

        let service = CategoryService::new(self.storage);
        let income = service.get_categories_by_type(true)?;
        let expense = service.get_categories_by_type(false)?;
        write!(self.output, "{}", format_category_sections(&income, &expense))?;
        Ok(())
    }

    fn pause(&mut self) -> MenuResult<()> {
        writeln!(self.output)?;
        self.prompt("Press Enter to return to the menu...")?;
        self.read_line().map(|_| ())
    }

    fn heading(&mut self, title: &str) -> MenuResult<()> {
        let line = self.paint(&format!("=============== {} ===============", title), Color::Blue);
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> MenuResult<()> {
        let text = self.paint(text, Color::Cyan);
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn print_error(&mut self, message: &str) -> MenuResult<()> {
        let line = self.paint(&format!("Error: {}", message), Color::Red);
        writeln!(self.output)?;
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn read_line(&mut self) -> MenuResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MenuError::Closed);
        }
        if !self.styled {
            // Piped input is not echoed, so end the prompt line here
            writeln!(self.output)?;
        }
        Ok(line.trim().to_string())
    }

    fn clear_screen(&mut self) -> MenuResult<()> {
        if self.styled {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.styled {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

impl From<MenuError> for FintrackError {
    fn from(err: MenuError) -> Self {
        match err {
            MenuError::Fintrack(err) => err,
            other => FintrackError::Io(other.to_string()),
        }
    }
}
