use ansi_term::Colour;

use crate::config::Config;
use crate::core::rollup;
use crate::errors::AppResult;
use crate::utils::formatting::format_hours;
use crate::utils::money::format_currency;
use crate::utils::table::Table;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = super::open_store(cfg)?;
    let stats = rollup::portfolio_stats(&store);
    let sym = cfg.currency_symbol.as_str();

    println!("📊 {}\n", Colour::Blue.bold().paint("Dashboard"));

    // Stat cards, one line each
    println!(
        "  {}  {} active",
        Colour::Blue.paint("Projects   "),
        stats.active_projects
    );
    println!(
        "  {}  {} working",
        Colour::Green.paint("Workers    "),
        stats.working_workers
    );
    println!(
        "  {}  {}",
        Colour::Purple.paint("Revenue    "),
        format_currency(stats.total_revenue, sym)
    );
    println!(
        "  {}  {}",
        Colour::Yellow.paint("Profit/Loss"),
        format_currency(stats.total_profit, sym)
    );
    println!(
        "  {}  {} received, {} outstanding",
        Colour::Cyan.paint("Payments   "),
        format_currency(stats.payments_received, sym),
        format_currency(stats.outstanding, sym)
    );

    let hours = rollup::worker_hours(&store);
    if !hours.is_empty() {
        println!("\n⏱️  Worker hours:\n");
        let mut table = Table::new(&["Worker", "Project", "Hours", "Earnings"]);
        for row in hours {
            table.add_row(vec![
                format!("{} {}", row.initials, row.worker),
                row.project,
                format_hours(row.hours),
                format_currency(row.earnings, sym),
            ]);
        }
        print!("{}", table.render());
    }

    let spend = rollup::material_spend(&store);
    if !spend.is_empty() {
        println!("\n🧱 Material expenses:\n");
        let mut table = Table::new(&["Material", "Project", "Cost"]);
        for row in spend {
            table.add_row(vec![row.material, row.project, format_currency(row.cost, sym)]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
