use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_category_command, handle_transaction_command, use_terminal_styling, CategoryCommands,
    Menu, TransactionCommands,
};
use fintrack::config::{FintrackPaths, Settings};
use fintrack::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Terminal personal finance tracker",
    long_about = "FinTrack records income and expense transactions against a set of \
                  categories and keeps them in JSON files on local disk. Run it without \
                  a subcommand for the interactive menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu
    Menu,

    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Create the data directory, settings and default categories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    fintrack::logging::init_tracing();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // First run seeds the category store
    let storage = Storage::new(paths.clone());
    let seeded = initialize_storage(&storage, &settings.default_categories)?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Initialized FinTrack at: {}", paths.base_dir().display());
            if seeded {
                println!();
                println!("Default categories have been created:");
                for category in &settings.default_categories {
                    println!("  - {} ({})", category.name, category.kind);
                }
            } else {
                println!("Existing categories were left untouched.");
            }
            println!();
            println!("Run 'fintrack category list' to see all categories.");
        }
        Some(Commands::Config) => {
            println!("FinTrack Configuration");
            println!("======================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Categories file:   {}", paths.categories_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Date format:        {}", settings.date_format);
            println!("  Default categories: {}", settings.default_categories.len());
        }
        Some(Commands::Menu) | None => {
            let stdin = io::stdin();
            Menu::new(&storage, &settings, stdin.lock(), io::stdout())
                .styled(use_terminal_styling())
                .run()?;
        }
    }

    Ok(())
}
