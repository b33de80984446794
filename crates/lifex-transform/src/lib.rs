//! Reshape-and-clean engine for wide Eurostat life-expectancy tables.
//!
//! The engine is a pure transformation: it borrows a [`SourceTable`], never
//! touches the filesystem, and returns typed observations. The stages run in
//! a fixed order:
//!
//! 1. **Rename**: the raw `geo\time` header becomes `region`
//! 2. **Unpivot**: one row per (identifier combination, year column) pair
//! 3. **Coerce**: `year` to integer and `value` to float, recovering
//!    annotated cells and dropping unrecoverable rows
//! 4. **Filter**: keep a single region, exact match
//!
//! [`SourceTable`]: lifex_model::SourceTable

pub mod coerce;
pub mod pipeline;
pub mod reshape;

pub use coerce::{NumericColumn, coerce_column, numeric_prefix};
pub use pipeline::clean_table;
pub use reshape::{rename_geo_column, unpivot};
