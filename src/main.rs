use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use spendlog::shell::Shell;
use spendlog::storage::{self, Format};
use spendlog::store::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "spendlog is a terminal-based personal expense tracker. Record \
                  expenses with categories and payment methods, edit or delete \
                  them by id, and persist the collection to JSON or YAML files."
)]
struct Cli {
    /// Expense file to load before the menu starts
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Format of the expense file
    #[arg(short = 'F', long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut store = ExpenseStore::new();
    if let Some(file) = &cli.file {
        storage::load(&mut store, file, cli.format)?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::with_store(stdin.lock(), stdout.lock(), store);
    shell.run()?;

    Ok(())
}
