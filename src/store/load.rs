//! Dataset input. A dataset file is read-only source material for one
//! invocation; the store never writes anything back.

use std::fs;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::{
    ManualExpense, Material, MaterialUsage, Payment, Project, Receipt, Task, TimeEntry, Worker,
};

/// The full record sets, as found in a JSON dataset file. Every collection
/// is optional in the file; missing ones default to empty.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub projects: Vec<Project>,
    pub workers: Vec<Worker>,
    pub materials: Vec<Material>,
    pub time_entries: Vec<TimeEntry>,
    pub material_usage: Vec<MaterialUsage>,
    pub manual_expenses: Vec<ManualExpense>,
    pub receipts: Vec<Receipt>,
    pub payments: Vec<Payment>,
    pub tasks: Vec<Task>,
}

impl Dataset {
    /// Total number of records across all collections, used to seed the id
    /// allocator past anything already present.
    pub fn record_count(&self) -> usize {
        self.projects.len()
            + self.workers.len()
            + self.materials.len()
            + self.time_entries.len()
            + self.material_usage.len()
            + self.manual_expenses.len()
            + self.receipts.len()
            + self.payments.len()
            + self.tasks.len()
    }
}

pub fn read_dataset(path: &str) -> AppResult<Dataset> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| AppError::Dataset(format!("{}: {}", path, e)))
}
