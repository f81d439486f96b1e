//! Trace descriptor.
//!
//! JSON shape:
//! {
//!   "name": "traceName",                 // entity in the dataset
//!   "columns": { "x": "x_data" },        // logical -> physical column
//!   "props": {
//!     "type": "scatter",                 // literal, passed through
//!     "x": "column(x)",                  // whole column
//!     "y": ["column(x)[1:]", null]       // nested refs resolve leaf by leaf
//!   }
//! }

use crate::resolve::PropValue;
use anyhow::bail;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TraceSpec {
    pub name: String,

    #[serde(default)]
    pub columns: BTreeMap<String, String>,

    #[serde(default)]
    pub props: BTreeMap<String, PropValue>,
}

impl TraceSpec {
    /// Physical column for a referenced name. A logical key is mapped through
    /// `columns`; a name that already is one of the mapped physical columns is
    /// accepted as is.
    pub fn physical_name<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        if let Some(physical) = self.columns.get(name) {
            return Some(physical.as_str());
        }
        self.columns
            .values()
            .find(|physical| physical.as_str() == name)
            .map(String::as_str)
    }

    /// Check that every reference in `props` names a known column.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            bail!("trace name must not be empty");
        }

        for (field, value) in &self.props {
            for reference in value.column_refs() {
                if self.physical_name(&reference.name).is_none() {
                    bail!(
                        "trace '{}': prop '{}' references column '{}', which is not in columns definition",
                        self.name,
                        field,
                        reference.name
                    );
                }
            }
        }

        Ok(())
    }
}
