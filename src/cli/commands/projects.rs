use crate::config::Config;
use crate::core::summary;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_status_label, colorize_profit};
use crate::utils::money::format_currency;
use crate::utils::table::Table;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = super::open_store(cfg)?;
    let rows = summary::all_summaries(&store);
    let sym = cfg.currency_symbol.as_str();

    if rows.is_empty() {
        println!("No projects in the dataset.");
        return Ok(());
    }

    let mut table = Table::new(&[
        "ID", "Project", "Status", "Price", "Labor", "Materials", "Total Cost", "Profit",
    ]);

    for row in rows {
        let status = format!(
            "{}{}{}",
            color_for_status_label(row.status_label),
            row.status_label,
            RESET
        );
        table.add_row(vec![
            row.project_id.clone(),
            row.name.clone(),
            status,
            format_currency(row.price, sym),
            format_currency(row.labor_cost, sym),
            format_currency(row.material_cost, sym),
            format_currency(row.total_cost, sym),
            colorize_profit(&format_currency(row.profit, sym), row.profit),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
