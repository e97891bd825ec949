mod fs_utils;
pub mod logic;
mod model;

mod csv;
mod json;

pub use logic::ExportLogic;
pub use model::{ExportDocument, SummaryExport};

use std::path::Path;

use crate::ui::messages::success;
use clap::ValueEnum;

/// Completion message shared by every format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{} export completed: {}", label, path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
