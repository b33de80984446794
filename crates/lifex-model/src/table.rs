#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Raw header of the geography column in Eurostat wide exports. The backslash
/// is a literal character in the published file, not an escape.
pub const GEO_TIME_HEADER: &str = r"geo\time";

/// Identifier columns of the long format, in persisted order.
pub const ID_COLUMNS: [&str; 4] = ["unit", "sex", "age", "region"];

/// A wide table as read from disk: one header per column, every cell still a
/// string. One row per unit/sex/age/geography combination, one column per
/// calendar year.
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SourceTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Position of a column by exact header match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// One record of the unpivoted intermediate table. `year` and `value` are
/// still raw text; coercion happens afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeltedRow {
    pub unit: String,
    pub sex: String,
    pub age: String,
    pub region: String,
    pub year: String,
    pub value: String,
}

/// One fully typed output row. Field order matches the persisted column
/// order `unit,sex,age,region,year,value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub unit: String,
    pub sex: String,
    pub age: String,
    pub region: String,
    pub year: i32,
    pub value: f64,
}
