use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::money::format_currency;
use crate::utils::table::Table;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = super::open_store(cfg)?;

    if store.materials.is_empty() {
        println!("No materials in the dataset.");
        return Ok(());
    }

    let mut table = Table::new(&["ID", "Name", "Unit Price", "Stock"]);
    for material in &store.materials {
        table.add_row(vec![
            material.id.clone(),
            material.name.clone(),
            format_currency(material.unit_price, &cfg.currency_symbol),
            material
                .stock_qty
                .map_or("-".to_string(), |q| q.normalize().to_string()),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
