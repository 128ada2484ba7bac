use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_ledger::config::{ExpenseLedgerPaths, Settings};
use expense_ledger::LedgerResult;

#[derive(Parser)]
#[command(
    name = "expense-ledger",
    author = "Kaylee Beyene",
    version,
    about = "Terminal expense tracker with a running total",
    long_about = "Expense Ledger records expenses with a name, amount and category, \
                  keeps them in a table in the order they were entered and shows \
                  a running total. Records are kept for the session only."
)]
struct Cli {
    /// Write logs to this file (the terminal is busy drawing the UI)
    #[arg(long, global = true, env = "EXPENSE_LEDGER_LOG_FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpenseLedgerPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;

    if let Some(log_file) = &cli.log_file {
        init_logging(log_file, &settings.log_level)?;
    }

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            tracing::info!(config = %paths.settings_file().display(), "starting expense ledger");
            expense_ledger::tui::run_tui(settings)?;
        }
        Commands::Init => {
            if paths.is_initialized() {
                println!(
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                tracing::info!(path = %paths.settings_file().display(), "wrote default settings");
                println!("Wrote default settings to: {}", paths.settings_file().display());
            }
        }
        Commands::Config => {
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Timestamp format: {}", settings.timestamp_format);
            println!("  Categories:       {}", settings.categories.join(", "));
            println!("  Tick rate:        {} ms", settings.tick_rate_ms);
            println!("  Toast duration:   {} s", settings.notification_secs);
            println!("  Log level:        {}", settings.log_level);
        }
    }

    Ok(())
}

/// Send tracing output to a file; `RUST_LOG` overrides the configured level
fn init_logging(path: &Path, default_level: &str) -> LedgerResult<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("expense_ledger={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
