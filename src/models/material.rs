use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stock material. Like worker rates, `unit_price` is applied at lookup
/// time when costing usage rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub name: String,
    pub unit_price: Decimal,
    #[serde(default)]
    pub stock_qty: Option<Decimal>,
    #[serde(default)]
    pub low_stock_threshold: Option<Decimal>,
    #[serde(default)]
    pub supplier: Option<String>,
}
