use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A crew member. The hourly rate is applied at lookup time when costing
/// time entries, never snapshotted on the entry itself, so a rate change
/// retroactively re-prices logged hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub hourly_rate: Decimal,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub project_ids: Vec<String>,
}
