//! End-to-end run: load, clean, save.
//!
//! Stage results are returned as typed values so the summary printer and the
//! tests can inspect them. Only the load and the structural clean errors
//! propagate; a save failure is carried in the summary, not thrown.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info, info_span};

use lifex_ingest::{load_table, save_observations};
use lifex_model::{GEO_TIME_HEADER, ID_COLUMNS, SaveError, SourceTable};
use lifex_transform::clean_table;

/// File locations and filter for one cleaning run. Defaults come from the
/// CLI layer; the engine itself has no built-in paths.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub region: String,
}

/// Outcome of a run, for the summary printer.
#[derive(Debug)]
pub struct RunSummary {
    pub region: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows_in: usize,
    pub year_columns: usize,
    pub observations: usize,
    pub save_error: Option<SaveError>,
}

impl RunSummary {
    pub fn saved(&self) -> bool {
        self.save_error.is_none()
    }
}

/// Loads the raw table, cleans it for the configured region, and saves the
/// result. Load and clean failures are fatal; a save failure is reported in
/// the returned summary with the run left intact.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let span = info_span!("clean", region = %config.region);
    let _guard = span.enter();
    let start = Instant::now();

    let table = load_table(&config.input)
        .with_context(|| format!("load {}", config.input.display()))?;
    let rows_in = table.height();
    let year_columns = year_column_count(&table);
    info!(
        rows = rows_in,
        year_columns,
        path = %config.input.display(),
        "raw table loaded"
    );

    let observations = clean_table(&table, &config.region)
        .with_context(|| format!("clean {}", config.input.display()))?;
    info!(
        observations = observations.len(),
        duration_ms = start.elapsed().as_millis(),
        "table cleaned"
    );

    let save_error = match save_observations(&observations, &config.output) {
        Ok(()) => {
            info!(path = %config.output.display(), "cleaned table saved");
            None
        }
        Err(save_error) => {
            error!(
                path = %config.output.display(),
                reason = %save_error,
                "save failed"
            );
            Some(save_error)
        }
    };

    Ok(RunSummary {
        region: config.region.clone(),
        input: config.input.clone(),
        output: config.output.clone(),
        rows_in,
        year_columns,
        observations: observations.len(),
        save_error,
    })
}

fn year_column_count(table: &SourceTable) -> usize {
    table
        .headers
        .iter()
        .filter(|header| {
            !ID_COLUMNS.contains(&header.as_str()) && *header != GEO_TIME_HEADER
        })
        .count()
}
