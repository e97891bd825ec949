use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{costs, summary};
use crate::errors::{AppError, AppResult};
use crate::store::Store;
use crate::utils::colors::{GREY, RESET, colorize_profit};
use crate::utils::money::format_currency;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Project { id, payments, tasks } = cmd {
        let store = super::open_store(cfg)?;
        let sym = cfg.currency_symbol.as_str();
        print_detail(&store, id, sym)?;

        if *payments {
            print_payments(&store, id, sym);
        }
        if *tasks {
            print_tasks(&store, id);
        }
    }
    Ok(())
}

fn print_detail(store: &Store, id: &str, sym: &str) -> AppResult<()> {
    let project = store
        .project(id)
        .ok_or_else(|| AppError::ProjectNotFound(id.to_string()))?;
    let breakdown = summary::cost_breakdown(project, store);
    let row = summary::build_summary(project, store);

    let paid = costs::paid_total(id, &store.payments);
    let outstanding = costs::outstanding(project.price, paid);

    println!("\n=== {} ({}) ===", project.name, row.status_label);
    println!("{}{}{}", GREY, project.address, RESET);
    println!("Client: {}", project.client_name);
    if let Some(stage) = &project.stage {
        println!("Stage:  {}", stage);
    }
    if let Some(progress) = project.progress {
        println!("Progress: {}%", progress);
    }

    println!("\nContract price:    {}", format_currency(project.price, sym));
    println!("Labor:             {}", format_currency(breakdown.labor, sym));
    println!("Materials:         {}", format_currency(breakdown.material, sym));
    println!("Manual expenses:   {}", format_currency(breakdown.manual_expense, sym));
    println!("Receipts:          {}", format_currency(breakdown.receipt, sym));
    println!("Total cost:        {}", format_currency(breakdown.total, sym));
    println!(
        "Profit:            {}",
        colorize_profit(&format_currency(breakdown.profit, sym), breakdown.profit)
    );

    println!("\nPaid:              {}", format_currency(paid, sym));
    println!(
        "Outstanding:       {}",
        colorize_profit(&format_currency(outstanding, sym), outstanding)
    );

    Ok(())
}

fn print_payments(store: &Store, id: &str, sym: &str) {
    let rows: Vec<_> = store.payments.iter().filter(|p| p.project_id == id).collect();

    println!("\nPayments:");
    if rows.is_empty() {
        println!("  (none)");
        return;
    }
    for payment in rows {
        println!(
            "  {} | {} | {} | {}",
            payment.id,
            payment.date,
            format_currency(payment.amount, sym),
            payment.status.as_str()
        );
    }
}

fn print_tasks(store: &Store, id: &str) {
    let rows: Vec<_> = store.tasks.iter().filter(|t| t.project_id == id).collect();

    println!("\nTasks:");
    if rows.is_empty() {
        println!("  (none)");
        return;
    }
    for task in rows {
        let assignees: Vec<&str> = task
            .assignee_ids
            .iter()
            .map(|wid| store.worker(wid).map_or("?", |w| w.name.as_str()))
            .collect();
        let due = task
            .due_date
            .map_or("-".to_string(), |d| d.format("%Y-%m-%d").to_string());

        println!(
            "  {} | {} | due {} | {} | {}",
            task.id,
            task.status.label(),
            due,
            task.title,
            if assignees.is_empty() {
                "unassigned".to_string()
            } else {
                assignees.join(", ")
            }
        );
    }
}
