use std::path::Path;

use csv::Writer;

use crate::errors::AppResult;
use crate::export::model::{SummaryExport, headers, summary_to_row};

/// Write the summary rows as CSV.
pub(crate) fn write_csv(path: &Path, rows: &[SummaryExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(headers())?;
    for row in rows {
        wtr.write_record(summary_to_row(row))?;
    }

    wtr.flush()?;
    Ok(())
}
