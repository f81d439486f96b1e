//! Table descriptor.
//!
//! JSON shape:
//! {
//!   "name": "awesome-table",
//!   "props": { "enableColumnDragging": true },     // opaque, for the widget
//!   "trace": { ...trace descriptor... },
//!   "columns": [ { "header": "X Data", "column": "x_data" } ]
//! }
//!
//! `columns[*].column` are physical column names.

use crate::spec::TraceSpec;
use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ColumnSpec {
    #[serde(default)]
    pub header: String,
    pub column: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableSpec {
    pub name: String,

    #[serde(default)]
    pub props: Value,

    pub trace: TraceSpec,

    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
}

impl TableSpec {
    /// Validate the embedded trace and the column list:
    /// - column names are non-empty
    /// - column names are unique (they become row keys)
    pub fn validate(&self) -> anyhow::Result<()> {
        self.trace
            .validate()
            .with_context(|| format!("table '{}'", self.name))?;

        let mut seen = BTreeSet::new();
        for spec in &self.columns {
            if spec.column.trim().is_empty() {
                bail!("table '{}': column '{}' has no column name", self.name, spec.header);
            }
            if !seen.insert(spec.column.as_str()) {
                bail!("table '{}': duplicate column {}", self.name, spec.column);
            }
        }

        Ok(())
    }

    pub fn headers(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|c| {
                if c.header.is_empty() {
                    c.column.as_str()
                } else {
                    c.header.as_str()
                }
            })
            .collect()
    }
}
