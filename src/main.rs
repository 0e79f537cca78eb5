use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{
    handle_add, handle_categories, handle_export, handle_list, handle_recent, handle_summary,
    handle_total, AddArgs, ExportArgs, ListArgs, RecentArgs, SummaryArgs, TotalArgs,
};
use spendlog::config::Settings;
use spendlog::ledger::{seed, Ledger};
use spendlog::tui;

#[derive(Parser)]
#[command(
    name = "spendlog",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense tracking dashboard",
    long_about = "spendlog is a terminal dashboard for tracking personal expenses: \
                  category summaries, a scrollable expense history, and a quick \
                  add-expense form. The ledger lives in memory for the session and \
                  starts out seeded with a small demo dataset."
)]
struct Cli {
    /// Currency symbol used when formatting amounts
    #[arg(long, global = true, env = "SPENDLOG_CURRENCY", default_value = "$")]
    currency: String,

    /// Start with an empty ledger instead of the demo dataset
    #[arg(long, global = true, env = "SPENDLOG_NO_DEMO")]
    no_demo: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// Add a new expense
    Add(AddArgs),

    /// List expenses
    List(ListArgs),

    /// Show the most recent expenses
    Recent(RecentArgs),

    /// Show the total spent, overall or for one category
    Total(TotalArgs),

    /// Spending breakdown by category
    Summary(SummaryArgs),

    /// List the available categories
    Categories,

    /// Export the session ledger as CSV or JSON
    Export(ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings {
        currency_symbol: cli.currency.clone(),
        demo_data: !cli.no_demo,
        ..Settings::default()
    };

    let mut ledger = Ledger::new();
    if settings.demo_data {
        for expense in seed::demo_expenses() {
            ledger.add(expense)?;
        }
    }

    match cli.command {
        None | Some(Commands::Tui) => tui::run_tui(ledger, settings)?,
        Some(Commands::Add(args)) => handle_add(&mut ledger, &settings, args)?,
        Some(Commands::List(args)) => handle_list(&ledger, &settings, args)?,
        Some(Commands::Recent(args)) => handle_recent(&ledger, &settings, args)?,
        Some(Commands::Total(args)) => handle_total(&ledger, &settings, args)?,
        Some(Commands::Summary(args)) => handle_summary(&ledger, &settings, args)?,
        Some(Commands::Categories) => handle_categories()?,
        Some(Commands::Export(args)) => handle_export(&ledger, args)?,
    }

    Ok(())
}
