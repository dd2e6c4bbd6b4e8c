//! Expense CLI commands

use clap::Subcommand;

use crate::backend::Backend;
use crate::display::{format_expense_table, DisplayOptions};
use crate::engine::{day_expenses, filter_by_range};
use crate::error::{TallyError, TallyResult};
use crate::models::{Expense, ExpenseCategory, ExpenseDraft, ExpenseId};
use crate::state::AppState;

use super::{entry_timestamp, parse_amount, parse_date, parse_month};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// What the money was spent on
        title: String,
        /// Amount (e.g. 12.50)
        amount: String,
        /// Category (Food, Transport, Shopping, Entertainment, Bills,
        /// Healthcare, Education, Other)
        #[arg(short, long, default_value = "Food")]
        category: String,
        /// Date (YYYY-MM-DD); defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List expenses for a day, a month, or everything
    List {
        /// Show a single day (YYYY-MM-DD)
        #[arg(short, long, conflicts_with = "month")]
        date: Option<String>,
        /// Show a month (YYYY-MM, prev, next, or an offset like -1)
        #[arg(short, long, allow_hyphen_values = true)]
        month: Option<String>,
    },
    /// Edit an expense
    Edit {
        /// Expense ID
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
    },
    /// Delete every expense on a day
    ClearDay {
        /// Date (YYYY-MM-DD)
        date: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command<B: Backend>(
    state: &mut AppState<B>,
    opts: &DisplayOptions,
    cmd: ExpenseCommands,
) -> TallyResult<()> {
    match cmd {
        ExpenseCommands::Add {
            title,
            amount,
            category,
            date,
        } => {
            let category = parse_category(&category)?;
            let draft = ExpenseDraft::new(
                title,
                category,
                parse_amount(&amount)?,
                entry_timestamp(date.as_deref())?,
            );
            let expense = state.create_expense(&draft)?;

            println!("Added expense: {}", expense.title);
            println!("  Amount:   {}", opts.money(expense.amount));
            println!("  Category: {}", expense.category);
            println!("  Date:     {}", opts.timestamp(expense.date));
            println!("  ID:       {}", expense.id);
        }

        ExpenseCommands::List { date, month } => {
            if let Some(date) = date {
                let day = parse_date(&date)?;
                let (list, total) = day_expenses(state.expenses(), day);
                println!("Expenses for {} (total {})", opts.date(day), opts.money(total));
                print!("{}", format_expense_table(&list, opts));
            } else if month.is_some() {
                let range = parse_month(month.as_deref())?;
                let filtered = filter_by_range(state.expenses(), &range);
                println!("Expenses for {}", opts.month(&range));
                print!("{}", format_expense_table(&newest_first(filtered.records), opts));
                if filtered.skipped > 0 {
                    println!("{} expense(s) with an unreadable date were left out.", filtered.skipped);
                }
            } else {
                let all: Vec<&Expense> = state.expenses().iter().collect();
                print!("{}", format_expense_table(&newest_first(all), opts));
            }
        }

        ExpenseCommands::Edit {
            id,
            title,
            amount,
            category,
            date,
        } => {
            let id = ExpenseId::new(id);
            let current = state
                .find_expense(&id)
                .ok_or_else(|| TallyError::expense_not_found(id.as_str()))?;

            let mut draft = match ExpenseDraft::from_expense(current) {
                Some(draft) => draft,
                None if date.is_some() => ExpenseDraft::new(
                    current.title.clone(),
                    current.category,
                    current.amount,
                    entry_timestamp(date.as_deref())?,
                ),
                None => {
                    return Err(TallyError::Validation(
                        "This expense has no readable date; pass --date to fix it".into(),
                    ))
                }
            };

            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(amount) = amount {
                draft.amount = parse_amount(&amount)?;
            }
            if let Some(category) = category {
                draft.category = parse_category(&category)?;
            }
            if let Some(date) = date {
                draft.date = entry_timestamp(Some(&date))?;
            }

            let updated = state.update_expense(&id, &draft)?;
            println!("Updated expense: {}", updated);
        }

        ExpenseCommands::Delete { id } => {
            let id = ExpenseId::new(id);
            state.delete_expense(&id)?;
            println!("Deleted expense {}", id);
        }

        ExpenseCommands::ClearDay { date } => {
            let day = parse_date(&date)?;
            let removed = state.clear_day(day)?;
            println!("Deleted {} expense(s) on {}", removed, opts.date(day));
        }
    }

    Ok(())
}

fn parse_category(input: &str) -> TallyResult<ExpenseCategory> {
    ExpenseCategory::parse(input).ok_or_else(|| {
        let names: Vec<&str> = ExpenseCategory::ALL.iter().map(|c| c.name()).collect();
        TallyError::Validation(format!(
            "Unknown category '{}'. Choose one of: {}",
            input,
            names.join(", ")
        ))
    })
}

fn newest_first(mut expenses: Vec<&Expense>) -> Vec<&Expense> {
    expenses.sort_by(|a, b| b.date.cmp(&a.date));
    expenses
}
