use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use smartsave::cli::{
    handle_ask_command, handle_budget_command, handle_expense_command, handle_export_command,
    handle_goal_command, handle_import_command, show_categories, show_summary,
};
use smartsave::config::{paths::SmartSavePaths, settings::Settings};
use smartsave::export::ExportFormat;
use smartsave::logging::init_tracing;
use smartsave::storage::Storage;

#[derive(Parser)]
#[command(
    name = "smartsave",
    version,
    about = "Terminal budgeting for students",
    long_about = "SmartSave splits a monthly budget across spending categories, \
                  tracks expenses against them, warns you as a category fills up \
                  and keeps track of your savings goals."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly budget commands
    #[command(subcommand)]
    Budget(smartsave::cli::BudgetCommands),

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(smartsave::cli::ExpenseCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(smartsave::cli::GoalCommands),

    /// Show every category with its allocation and spend
    Categories,

    /// Show monthly totals and goal progress
    Summary,

    /// Ask the assistant about a category
    Ask {
        /// Category the question is about
        category: String,
        /// Your question
        #[arg(required = true, trailing_var_arg = true)]
        message: Vec<String>,
    },

    /// Export the ledger
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import a JSON or YAML export, merging it over the current ledger
    Import {
        /// Path to the export file
        path: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SmartSavePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    let filter = if cli.verbose {
        "smartsave=debug"
    } else {
        settings.log_filter.as_str()
    };
    init_tracing(filter);

    // Initialize storage. A saved ledger that cannot be read stops here so it
    // is never overwritten.
    let storage = Storage::new(paths.clone())?;
    let first_run = !storage.is_initialized();
    let report = storage.load_all().with_context(|| {
        format!(
            "could not load {}; fix or move the file and try again",
            paths.ledger_file().display()
        )
    })?;
    if !report.is_clean() {
        eprintln!(
            "Note: {} unreadable entries in the saved ledger were skipped.",
            report.skipped.len()
        );
    }

    match cli.command {
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&storage, &settings, cmd)?,
        Some(Commands::Categories) => show_categories(&storage, &settings)?,
        Some(Commands::Summary) => show_summary(&storage, &settings)?,
        Some(Commands::Ask { category, message }) => {
            handle_ask_command(&storage, &category, &message)?
        }
        Some(Commands::Export { format, output }) => {
            handle_export_command(&storage, &settings, format, output)?
        }
        Some(Commands::Import { path }) => handle_import_command(&storage, &path)?,
        Some(Commands::Config) => {
            println!("SmartSave Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Ledger file:      {}", paths.ledger_file().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Pretty export:   {}", settings.pretty_export);
            println!("  Log filter:      {}", settings.log_filter);
        }
        None if first_run => {
            println!("Welcome to SmartSave!");
            println!();
            println!("Start by setting your monthly budget:");
            println!("  smartsave budget set 1000");
            println!();
            println!("Then record what you spend:");
            println!("  smartsave expense add 12.50 food -d lunch");
            println!();
            println!("Run 'smartsave --help' for everything else.");
        }
        None => show_summary(&storage, &settings)?,
    }

    Ok(())
}
