//! CSV persistence for cleaned observations.

use std::path::Path;

use csv::WriterBuilder;
use tracing::debug;

use lifex_model::{ID_COLUMNS, Observation, SaveError};

/// Writes the cleaned table as comma-separated text: header row
/// `unit,sex,age,region,year,value`, one row per observation, no positional
/// index column. The header is written even when the table is empty.
///
/// Any failure comes back as a typed [`SaveError`] carrying the underlying
/// reason; callers treat it as non-fatal and skip their success confirmation.
pub fn save_observations(observations: &[Observation], path: &Path) -> Result<(), SaveError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|error| write_error(path, &error))?;

    let header = ID_COLUMNS.iter().copied().chain(["year", "value"]);
    writer
        .write_record(header)
        .map_err(|error| write_error(path, &error))?;
    for observation in observations {
        writer
            .serialize(observation)
            .map_err(|error| write_error(path, &error))?;
    }
    writer.flush().map_err(|error| write_error(path, &error))?;

    debug!(path = %path.display(), rows = observations.len(), "cleaned table saved");
    Ok(())
}

fn write_error(path: &Path, error: &dyn std::fmt::Display) -> SaveError {
    SaveError {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
