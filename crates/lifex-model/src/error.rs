use std::path::PathBuf;

use thiserror::Error;

/// Reading the raw file failed. Fatal: callers propagate this and the run
/// stops.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
    #[error("{}: no header row", .path.display())]
    Empty { path: PathBuf },
}

/// The reshape-and-clean engine found a structurally invalid table. Malformed
/// cells never raise this; they are recovered or dropped row by row.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("missing identifier column `{0}`")]
    MissingColumn(String),
    #[error("column `{column}` still untyped after recovery: `{cell}`")]
    Unrecovered { column: String, cell: String },
}

/// Writing the cleaned table failed. Non-fatal: callers report the reason and
/// skip the success confirmation instead of crashing the run.
#[derive(Debug, Error)]
#[error("write {}: {message}", .path.display())]
pub struct SaveError {
    pub path: PathBuf,
    pub message: String,
}
