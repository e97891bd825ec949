//! Mutation commands: append one record to the in-memory store, then print
//! the recomputed project summary. Nothing is persisted; the point is to
//! show the derived figures a mutation would produce.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{costs, summary};
use crate::errors::{AppError, AppResult};
use crate::models::PaymentStatus;
use crate::store::Store;
use crate::ui::messages::{info, success};
use crate::utils::colors::colorize_profit;
use crate::utils::date;
use crate::utils::money::{format_currency, parse_amount};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut store = super::open_store(cfg)?;
    let sym = cfg.currency_symbol.as_str();

    let project_id = match cmd {
        Commands::LogTime {
            project,
            worker,
            hours,
            date: entry_date,
        } => {
            let hours = parse_amount(hours)?;
            let entry_date = date::parse_optional(entry_date.as_ref())?;
            let id = store.log_time(project, worker, hours, entry_date)?;
            success(format!("Logged {} hrs on {} ({})", hours.normalize(), project, id));
            project.clone()
        }

        Commands::LogUsage {
            project,
            material,
            qty,
            date: usage_date,
        } => {
            let qty = parse_amount(qty)?;
            let usage_date = date::parse_optional(usage_date.as_ref())?;
            let id = store.log_usage(project, material, qty, usage_date)?;
            success(format!(
                "Logged {} x {} on {} ({})",
                qty.normalize(),
                material,
                project,
                id
            ));
            project.clone()
        }

        Commands::AddExpense {
            project,
            desc,
            amount,
            date: expense_date,
        } => {
            let amount = parse_amount(amount)?;
            let expense_date = date::parse_optional(expense_date.as_ref())?;
            let id = store.add_expense(project, desc, amount, expense_date)?;
            success(format!(
                "Recorded expense {} on {} ({})",
                format_currency(amount, sym),
                project,
                id
            ));
            project.clone()
        }

        Commands::AddReceipt {
            project,
            file_name,
            amount,
            date: receipt_date,
        } => {
            let amount = parse_amount(amount)?;
            let receipt_date = date::parse_optional(receipt_date.as_ref())?;
            let id = store.add_receipt(project, file_name, amount, receipt_date)?;
            success(format!(
                "Filed receipt '{}' for {} on {} ({})",
                file_name,
                format_currency(amount, sym),
                project,
                id
            ));
            project.clone()
        }

        Commands::AddPayment {
            project,
            amount,
            status,
            date: payment_date,
        } => {
            let amount = parse_amount(amount)?;
            let payment_date = date::parse_optional(payment_date.as_ref())?;
            let status_str = status.as_deref().unwrap_or(&cfg.default_payment_status);
            let status = PaymentStatus::from_str(status_str)
                .ok_or_else(|| AppError::InvalidStatus(status_str.to_string()))?;
            let id = store.add_payment(project, amount, status, payment_date)?;
            success(format!(
                "Recorded {} payment of {} on {} ({})",
                status.as_str(),
                format_currency(amount, sym),
                project,
                id
            ));
            project.clone()
        }

        Commands::AddTask {
            project,
            title,
            assignees,
            due,
        } => {
            let due = date::parse_optional(due.as_ref())?;
            let id = store.add_task(project, title, assignees.clone(), due)?;
            success(format!("Created task '{}' on {} ({})", title, project, id));
            project.clone()
        }

        _ => return Ok(()),
    };

    info("Dataset is in-memory only; recomputed figures below.");
    print_recomputed(&store, &project_id, sym)
}

fn print_recomputed(store: &Store, project_id: &str, sym: &str) -> AppResult<()> {
    let row = summary::project_summary(store, project_id)?;
    let paid = costs::paid_total(project_id, &store.payments);
    let outstanding = costs::outstanding(row.price, paid);

    println!("\n{} — {}", row.name, row.status_label);
    println!("  Labor:       {}", format_currency(row.labor_cost, sym));
    println!("  Materials:   {}", format_currency(row.material_cost, sym));
    println!("  Total cost:  {}", format_currency(row.total_cost, sym));
    println!(
        "  Profit:      {}",
        colorize_profit(&format_currency(row.profit, sym), row.profit)
    );
    println!("  Paid:        {}", format_currency(paid, sym));
    println!(
        "  Outstanding: {}",
        colorize_profit(&format_currency(outstanding, sym), outstanding)
    );

    Ok(())
}
