use crate::error::ResolveError;
use crate::model::entity_cohorts;
use crate::resolve::Resolver;
use crate::spec::dataset::{COLUMNS_GROUP, column_key, group_fields};
use crate::spec::{CohortData, ColumnSpec, Dataset, TableSpec};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

/// One table row. Keys keep the order in which the table declared its columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow(Vec<(String, Value)>);

impl TableRow {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == column).map(|(_, v)| v)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl From<Vec<(String, Value)>> for TableRow {
    fn from(cells: Vec<(String, Value)>) -> Self {
        Self(cells)
    }
}

impl Serialize for TableRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Table ready for the widget: name, its display props, headers and rows.
#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub name: String,
    pub props: Value,
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<TableRow>,
}

impl TableView {
    pub fn build(dataset: &Dataset, table: &TableSpec) -> Result<Self, ResolveError> {
        Ok(Self {
            name: table.name.clone(),
            props: table.props.clone(),
            columns: table.columns.clone(),
            rows: cleaned_table_data(dataset, table)?,
        })
    }
}

/// Build one row per data index from the first cohort of the table's trace.
///
/// Column specs name physical columns and are looked up in the resolved trace:
/// the cohort's stored columns, then the trace's resolved props. All declared
/// columns must have the same length as the first one.
pub fn cleaned_table_data(
    dataset: &Dataset,
    table: &TableSpec,
) -> Result<Vec<TableRow>, ResolveError> {
    let trace = &table.trace;
    let cohorts = entity_cohorts(dataset, &trace.name)?;
    let Some((cohort, data)) = cohorts.iter().next() else {
        return Ok(Vec::new());
    };
    debug!(table = %table.name, trace = %trace.name, cohort = %cohort, "resolving table columns");

    let resolver = Resolver::new(trace, cohort, data);
    let resolved = materialize(&resolver, data)?;

    let mut series: Vec<(&str, &Vec<Value>)> = Vec::with_capacity(table.columns.len());
    for spec in &table.columns {
        let column = spec.column.as_str();
        match resolved.get(column) {
            Some(Value::Array(items)) => series.push((column, items)),
            Some(_) => {
                return Err(ResolveError::NotASequence {
                    reference: column.to_string(),
                });
            }
            None => {
                return Err(ResolveError::MissingData {
                    entity: trace.name.clone(),
                    cohort: cohort.clone(),
                    key: column_key(column),
                });
            }
        }
    }

    let row_count = series.first().map_or(0, |(_, items)| items.len());
    for (column, items) in &series {
        if items.len() != row_count {
            return Err(ResolveError::ColumnLengthMismatch {
                column: column.to_string(),
                expected: row_count,
                actual: items.len(),
            });
        }
    }

    Ok((0..row_count)
        .map(|i| {
            TableRow(
                series
                    .iter()
                    .map(|(column, items)| (column.to_string(), items[i].clone()))
                    .collect(),
            )
        })
        .collect())
}

/// Stored columns by physical name plus resolved props; stored columns win.
fn materialize(
    resolver: &Resolver<'_>,
    data: &CohortData,
) -> Result<Map<String, Value>, ResolveError> {
    let mut out = resolver.resolve_props()?;
    for (field, value) in group_fields(data, COLUMNS_GROUP) {
        out.insert(field.to_string(), value.clone());
    }
    Ok(out)
}
