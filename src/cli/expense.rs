//! Expense CLI commands
//!
//! Implements the add, list, recent, and total commands.

use clap::Args;

use crate::config::Settings;
use crate::display::{format_expense_register, format_expense_row};
use crate::error::{SpendlogError, SpendlogResult};
use crate::ledger::Ledger;
use crate::models::{Category, Expense};
use crate::services::ExpenseForm;

use super::{parse_day_end, parse_day_start};

/// Arguments for the add command
#[derive(Args)]
pub struct AddArgs {
    /// Amount spent, e.g. "12.50"
    pub amount: String,

    /// What the money was spent on
    pub description: String,

    /// Category: food, transport, utilities, entertainment, other
    #[arg(short, long)]
    pub category: String,

    /// Expense date (YYYY-MM-DD); defaults to now
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for the list command
#[derive(Args)]
pub struct ListArgs {
    /// Only show this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only show expenses on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Only show expenses on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Output as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the recent command
#[derive(Args)]
pub struct RecentArgs {
    /// How many expenses to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the total command
#[derive(Args)]
pub struct TotalArgs {
    /// Restrict the total to one category
    pub category: Option<String>,
}

/// Handle the add command
pub fn handle_add(ledger: &mut Ledger, settings: &Settings, args: AddArgs) -> SpendlogResult<()> {
    let mut form = ExpenseForm::new(args.amount, args.description, args.category);
    if let Some(date) = args.date {
        form = form.with_date(date);
    }

    let id = form.submit(ledger)?;
    if let Some(expense) = ledger.expenses().iter().find(|e| e.id == id) {
        println!("Added: {}", format_expense_row(expense, settings));
    }
    println!(
        "Ledger total: {}",
        ledger
            .total_all()
            .format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

/// Handle the list command
pub fn handle_list(ledger: &Ledger, settings: &Settings, args: ListArgs) -> SpendlogResult<()> {
    let mut expenses: Vec<Expense> = match &args.category {
        Some(raw) => {
            let category: Category = raw
                .parse()
                .map_err(|_| SpendlogError::unknown_category(raw.trim()))?;
            ledger.expenses_for(category)
        }
        None => ledger.expenses().to_vec(),
    };

    if let Some(from) = &args.from {
        let start = parse_day_start(from)?;
        expenses.retain(|e| e.date >= start);
    }
    if let Some(to) = &args.to {
        let end = parse_day_end(to)?;
        expenses.retain(|e| e.date <= end);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&expenses)?);
    } else {
        print!("{}", format_expense_register(&expenses, settings));
    }
    Ok(())
}

/// Handle the recent command
pub fn handle_recent(ledger: &Ledger, settings: &Settings, args: RecentArgs) -> SpendlogResult<()> {
    let limit = args.limit.unwrap_or(settings.recent_limit);
    let expenses = ledger.recent(limit);
    print!("{}", format_expense_register(&expenses, settings));
    Ok(())
}

/// Handle the total command
pub fn handle_total(ledger: &Ledger, settings: &Settings, args: TotalArgs) -> SpendlogResult<()> {
    match args.category {
        Some(raw) => {
            let category: Category = raw
                .parse()
                .map_err(|_| SpendlogError::unknown_category(raw.trim()))?;
            println!(
                "{} total: {}",
                category,
                ledger
                    .total_for(category)
                    .format_with_symbol(&settings.currency_symbol)
            );
        }
        None => {
            println!(
                "Total: {}",
                ledger
                    .total_all()
                    .format_with_symbol(&settings.currency_symbol)
            );
        }
    }
    Ok(())
}
