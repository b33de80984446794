//! Orchestration of the reshape-and-clean stages.

use tracing::debug;

use lifex_model::{CleanError, Observation, SourceTable};

use crate::coerce::{NumericColumn, coerce_column, finalize};
use crate::reshape::{rename_geo_column, unpivot};

/// Runs the full transformation: rename, unpivot, coerce `year`, coerce
/// `value`, filter by region.
///
/// Pure function of the input table and the filter string. The caller's
/// table is borrowed and never mutated; reshaping happens on a working copy.
/// Relative row order survives every stage, and an empty result is valid.
pub fn clean_table(table: &SourceTable, region: &str) -> Result<Vec<Observation>, CleanError> {
    let mut working = table.clone();
    rename_geo_column(&mut working);

    let melted = unpivot(&working)?;
    debug!(rows = melted.len(), "unpivoted to long format");

    let melted = coerce_column(melted, NumericColumn::Year);
    let melted = coerce_column(melted, NumericColumn::Value);
    let observations = finalize(melted)?;
    debug!(rows = observations.len(), "numeric columns coerced");

    let total = observations.len();
    let observations: Vec<Observation> = observations
        .into_iter()
        .filter(|observation| observation.region == region)
        .collect();
    debug!(
        total,
        kept = observations.len(),
        region,
        "region filter applied"
    );
    Ok(observations)
}
