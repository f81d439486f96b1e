//! Dataset as produced by the external loader.
//!
//! JSON shape:
//! {
//!   "traceName": {                     // entity
//!     "cohortName": {                  // cohort
//!       "columns.x_data": [1, 2, 3],   // column, stored by physical name
//!       "props.text": ["a", "b", "c"]  // data-side prop
//!     }
//!   }
//! }
//!
//! Keys are looked up by exact string match; the dot is never parsed except to
//! split off the group prefix.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub const COLUMNS_GROUP: &str = "columns";
pub const PROPS_GROUP: &str = "props";

/// One cohort's flat "group.field" -> value map.
pub type CohortData = BTreeMap<String, Value>;

/// Cohort name -> data, in key order.
pub type Cohorts = BTreeMap<String, CohortData>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    entities: BTreeMap<String, Cohorts>,
}

impl Dataset {
    pub fn new(entities: BTreeMap<String, Cohorts>) -> Self {
        Self { entities }
    }

    pub fn cohorts(&self, entity: &str) -> Option<&Cohorts> {
        self.entities.get(entity)
    }

    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }
}

/// Dataset key for a physical column, e.g. `columns.x_data`.
pub fn column_key(physical: &str) -> String {
    format!("{}.{}", COLUMNS_GROUP, physical)
}

/// Fields of `group` in a cohort, with the `group.` prefix stripped.
pub fn group_fields<'a>(
    data: &'a CohortData,
    group: &'a str,
) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
    data.iter().filter_map(move |(key, value)| {
        key.strip_prefix(group)
            .and_then(|rest| rest.strip_prefix('.'))
            .map(|field| (field, value))
    })
}
