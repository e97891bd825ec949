use std::path::Path;

use crate::core::{rollup, summary};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::model::{ExportDocument, SummaryExport};
use crate::export::{ExportFormat, csv::write_csv, json::write_json, notify_export_success};
use crate::store::Store;
use crate::ui::messages::warning;
use crate::utils::date;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the current project summaries.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    pub fn export(store: &Store, format: ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                file
            )));
        }

        ensure_writable(path, force)?;

        let rows: Vec<SummaryExport> = summary::all_summaries(store)
            .iter()
            .map(SummaryExport::from)
            .collect();

        if rows.is_empty() {
            warning("No projects found; nothing to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => write_csv(path, &rows)?,
            ExportFormat::Json => {
                let stats = rollup::portfolio_stats(store);
                let document = ExportDocument {
                    generated: date::today().format("%Y-%m-%d").to_string(),
                    summaries: rows,
                    portfolio: (&stats).into(),
                };
                write_json(path, &document)?;
            }
        }

        notify_export_success(format.as_str(), path);
        Ok(())
    }
}
