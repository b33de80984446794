//! Column type coercion with best-effort numeric recovery.
//!
//! Eurostat cells periodically carry footnote markers ("75.4 b"), `:`
//! placeholders for missing figures, or stray whitespace. Coercion runs in
//! two phases per column: a strict parse of every cell (the common case, and
//! what makes re-runs on clean data a no-op), and a recovery pass that keeps
//! the leading numeric text of each cell and drops the rows where nothing
//! numeric remains.

use lifex_model::{CleanError, MeltedRow, Observation};

/// The two numeric columns of the melted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericColumn {
    /// Calendar year, cast to integer.
    Year,
    /// Life-expectancy figure, cast to float.
    Value,
}

impl NumericColumn {
    fn get(self, row: &MeltedRow) -> &str {
        match self {
            Self::Year => &row.year,
            Self::Value => &row.value,
        }
    }

    fn set(self, row: &mut MeltedRow, text: String) {
        match self {
            Self::Year => row.year = text,
            Self::Value => row.value = text,
        }
    }

    fn parses(self, text: &str) -> bool {
        match self {
            Self::Year => text.trim().parse::<i32>().is_ok(),
            Self::Value => text.trim().parse::<f64>().is_ok_and(f64::is_finite),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Value => "value",
        }
    }
}

/// Coerces one column of the melted table to its numeric type.
///
/// When every cell already parses strictly, the rows come back untouched.
/// Otherwise each cell is reduced to its leading numeric text; rows whose
/// cell has no usable numeric prefix are dropped entirely. Surviving cells
/// are rewritten so the final strict cast in [`finalize`] cannot fail.
pub fn coerce_column(rows: Vec<MeltedRow>, column: NumericColumn) -> Vec<MeltedRow> {
    if rows.iter().all(|row| column.parses(column.get(row))) {
        return rows;
    }
    let mut kept = Vec::with_capacity(rows.len());
    for mut row in rows {
        let Some(recovered) = recover_numeric(column.get(&row), column) else {
            continue;
        };
        column.set(&mut row, recovered);
        kept.push(row);
    }
    kept
}

/// Final strict cast from recovered text to typed observations.
///
/// Runs after both columns have been coerced, so every remaining cell parses;
/// a failure here means a caller skipped [`coerce_column`] and is reported as
/// a [`CleanError`] rather than a panic.
pub(crate) fn finalize(rows: Vec<MeltedRow>) -> Result<Vec<Observation>, CleanError> {
    rows.into_iter()
        .map(|row| {
            let year = row
                .year
                .trim()
                .parse::<i32>()
                .map_err(|_| untyped(NumericColumn::Year, &row.year))?;
            let value = row
                .value
                .trim()
                .parse::<f64>()
                .map_err(|_| untyped(NumericColumn::Value, &row.value))?;
            Ok(Observation {
                unit: row.unit,
                sex: row.sex,
                age: row.age,
                region: row.region,
                year,
                value,
            })
        })
        .collect()
}

fn untyped(column: NumericColumn, cell: &str) -> CleanError {
    CleanError::Unrecovered {
        column: column.name().to_string(),
        cell: cell.to_string(),
    }
}

/// Reduces a cell to canonical numeric text, or `None` when the row should
/// be dropped. Year prefixes with a fractional tail are truncated toward
/// zero, matching an integer cast of the parsed number.
fn recover_numeric(raw: &str, column: NumericColumn) -> Option<String> {
    let prefix = numeric_prefix(raw.trim());
    let number: f64 = prefix.parse().ok()?;
    match column {
        NumericColumn::Year => Some((number as i64).to_string()),
        NumericColumn::Value => Some(prefix.to_string()),
    }
}

/// Longest prefix of `text` shaped like `digits [ . digits ]`: zero or more
/// digits, at most one decimal point. The empty prefix and a lone `.` fail
/// the later parse, which is what drops footnote-only and `:` cells.
pub fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;
    let mut seen_dot = false;
    while end < bytes.len() {
        let byte = bytes[end];
        if byte.is_ascii_digit() {
            end += 1;
        } else if byte == b'.' && !seen_dot {
            seen_dot = true;
            end += 1;
        } else {
            break;
        }
    }
    &text[..end]
}
