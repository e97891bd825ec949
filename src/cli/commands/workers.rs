use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::money::format_currency;
use crate::utils::table::Table;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = super::open_store(cfg)?;

    if store.workers.is_empty() {
        println!("No workers in the dataset.");
        return Ok(());
    }

    let mut table = Table::new(&["ID", "Name", "Initials", "Hourly Rate", "Phone"]);
    for worker in &store.workers {
        table.add_row(vec![
            worker.id.clone(),
            worker.name.clone(),
            worker.initials.clone(),
            format_currency(worker.hourly_rate, &cfg.currency_symbol),
            worker.phone.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
