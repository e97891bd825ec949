use std::fs;
use std::path::Path;

use crate::errors::AppResult;
use crate::export::model::ExportDocument;

/// Write the export document as pretty-printed JSON.
pub(crate) fn write_json(path: &Path, document: &ExportDocument) -> AppResult<()> {
    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json)?;
    Ok(())
}
