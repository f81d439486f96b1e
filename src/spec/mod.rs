//! Spec layer: JSON shapes + validation for the inputs.
//!
//! It owns:
//! - Dataset (entity -> cohort -> "group.field" -> value)
//! - Trace descriptor (columns + props)
//! - Table descriptor (display props + embedded trace + column specs)

pub mod dataset;
pub mod table;
pub mod trace;

pub use dataset::{COLUMNS_GROUP, CohortData, Cohorts, Dataset, PROPS_GROUP};
pub use table::{ColumnSpec, TableSpec};
pub use trace::TraceSpec;

use anyhow::Context;
use serde::de::DeserializeOwned;
use std::fs;

/// Read and decode a JSON input file.
pub fn read_json<T: DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    serde_json::from_str(&text).with_context(|| format!("decode JSON in {}", path))
}
