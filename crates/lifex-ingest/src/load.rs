//! Delimited-text loading for wide Eurostat tables.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use lifex_model::{LoadError, SourceTable};

/// Picks the field delimiter by sniffing the header line. Eurostat publishes
/// both comma- and tab-separated variants of the same table; a well-formed
/// file uses one delimiter throughout, so a tab in the header settles it.
pub fn detect_delimiter(header_line: &str) -> u8 {
    if header_line.contains('\t') { b'\t' } else { b',' }
}

/// Reads a comma- or tab-delimited file into a [`SourceTable`].
///
/// The first non-empty record becomes the header row. Cells and headers are
/// trimmed and BOM-stripped; short records are padded to the header width
/// and long ones truncated. A missing file or unparseable content is a
/// [`LoadError`], fatal to the run.
pub fn load_table(path: &Path) -> Result<SourceTable, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let delimiter = detect_delimiter(contents.lines().next().unwrap_or(""));

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(contents.as_bytes());

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| LoadError::Parse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    let headers: Vec<String> = raw_rows.remove(0);
    let mut table = SourceTable::new(headers);
    for record in raw_rows {
        let mut row = Vec::with_capacity(table.headers.len());
        for idx in 0..table.headers.len() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(value.to_string());
        }
        table.push_row(row);
    }
    debug!(
        path = %path.display(),
        rows = table.height(),
        columns = table.headers.len(),
        delimiter = if delimiter == b'\t' { "tab" } else { "comma" },
        "raw table loaded"
    );
    Ok(table)
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}
