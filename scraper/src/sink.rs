use crate::row::ChartRow;
use anyhow::{Context, Result};
use log::warn;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Written ahead of the CSV so spreadsheet tools pick UTF-8 for non-ASCII names.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write the rows, in order, to a CSV file at `path` and return how many were
/// written. Nothing is created when `rows` is empty.
pub fn save_chart_rows(rows: &[ChartRow], path: &Path) -> Result<usize> {
    if rows.is_empty() {
        warn!("No chart rows to save, not writing {}", path.display());
        return Ok(0);
    }

    let mut file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    file.write_all(UTF8_BOM)
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    // The header row comes from the serde field names of ChartRow
    let mut writer = csv::Writer::from_writer(file);
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("Failed to write chart row {}", row.rank))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    Ok(rows.len())
}
