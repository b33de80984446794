//! Wide-to-long reshaping.

use lifex_model::{CleanError, GEO_TIME_HEADER, MeltedRow, SourceTable};

/// Normalizes the geography header to `region`. No other column is renamed,
/// and a table that already carries `region` passes through unchanged.
pub fn rename_geo_column(table: &mut SourceTable) {
    for header in &mut table.headers {
        if header == GEO_TIME_HEADER {
            *header = "region".to_string();
        }
    }
}

/// Unpivots the year columns into long format.
///
/// Every column that is not one of `unit`, `sex`, `age`, `region` is treated
/// as a year column; its header becomes the `year` cell and its value the
/// `value` cell of one [`MeltedRow`]. Output is year-column-major: all rows
/// for the first year column, then the next. No rows are dropped here, so the
/// result always holds `rows × year_columns` records.
pub fn unpivot(table: &SourceTable) -> Result<Vec<MeltedRow>, CleanError> {
    let unit = required_column(table, "unit")?;
    let sex = required_column(table, "sex")?;
    let age = required_column(table, "age")?;
    let region = required_column(table, "region")?;
    let id_indices = [unit, sex, age, region];

    let year_columns: Vec<usize> = (0..table.headers.len())
        .filter(|idx| !id_indices.contains(idx))
        .collect();

    let mut melted = Vec::with_capacity(table.height() * year_columns.len());
    for &column in &year_columns {
        let year = table.headers[column].clone();
        for row in &table.rows {
            melted.push(MeltedRow {
                unit: cell(row, unit),
                sex: cell(row, sex),
                age: cell(row, age),
                region: cell(row, region),
                year: year.clone(),
                value: cell(row, column),
            });
        }
    }
    Ok(melted)
}

fn required_column(table: &SourceTable, name: &str) -> Result<usize, CleanError> {
    table
        .column_index(name)
        .ok_or_else(|| CleanError::MissingColumn(name.to_string()))
}

fn cell(row: &[String], idx: usize) -> String {
    row.get(idx).cloned().unwrap_or_default()
}
