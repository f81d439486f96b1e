//! Reference resolution: turn a trace's props into concrete JSON values for
//! one cohort.
//!
//! Resolution is a pure transform. Neither the dataset nor the descriptor is
//! touched; callers get new values back and assign them where they need them.

mod value;

pub use value::PropValue;

use crate::error::ResolveError;
use crate::reference::{ColumnRef, select};
use crate::spec::dataset::{CohortData, column_key};
use crate::spec::TraceSpec;
use serde_json::{Map, Value};

/// Resolves references of one trace against one cohort's data.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    trace: &'a TraceSpec,
    cohort: &'a str,
    data: &'a CohortData,
}

impl<'a> Resolver<'a> {
    pub fn new(trace: &'a TraceSpec, cohort: &'a str, data: &'a CohortData) -> Self {
        Self {
            trace,
            cohort,
            data,
        }
    }

    /// Resolve every reference reachable from `node`. Literals (including
    /// `null` and non-matching strings) come back unchanged.
    pub fn resolve(&self, node: &PropValue) -> Result<Value, ResolveError> {
        match node {
            PropValue::Literal(v) => Ok(v.clone()),
            PropValue::ColumnRef(reference) => self.resolve_ref(reference),
            PropValue::Sequence(items) => items
                .iter()
                .map(|item| self.resolve(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
        }
    }

    /// Resolve raw JSON, e.g. config that was never decoded into a descriptor.
    pub fn resolve_value(&self, raw: &Value) -> Result<Value, ResolveError> {
        self.resolve(&PropValue::from(raw.clone()))
    }

    /// All of the trace's props, resolved, keyed by prop name.
    pub fn resolve_props(&self) -> Result<Map<String, Value>, ResolveError> {
        let mut out = Map::new();
        for (field, node) in &self.trace.props {
            out.insert(field.clone(), self.resolve(node)?);
        }
        Ok(out)
    }

    /// Stored value of a physical column in this cohort.
    pub fn column(&self, physical: &str) -> Result<&'a Value, ResolveError> {
        let key = column_key(physical);
        self.data.get(&key).ok_or_else(|| ResolveError::MissingData {
            entity: self.trace.name.clone(),
            cohort: self.cohort.to_string(),
            key,
        })
    }

    fn resolve_ref(&self, reference: &ColumnRef) -> Result<Value, ResolveError> {
        let physical = self.trace.physical_name(&reference.name).ok_or_else(|| {
            ResolveError::UnknownColumn {
                trace: self.trace.name.clone(),
                name: reference.name.clone(),
            }
        })?;
        select::apply(reference, self.column(physical)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn trace() -> TraceSpec {
        serde_json::from_value(json!({
            "name": "t",
            "columns": { "x": "x", "y": "y", "z": "z_data", "gone": "gone" }
        }))
        .expect("trace decodes")
    }

    fn data() -> CohortData {
        serde_json::from_value(json!({
            "columns.x": [0, 1, 2],
            "columns.y": [2, 5, 9],
            "columns.z_data": [1, 2, 3, 4, 5],
            "props.text": ["a", "b", "c"]
        }))
        .expect("cohort decodes")
    }

    fn resolve(raw: Value) -> Result<Value, ResolveError> {
        let (t, d) = (trace(), data());
        Resolver::new(&t, "c", &d).resolve_value(&raw)
    }

    #[test]
    fn literals_pass_through() {
        for raw in [
            json!("scatter"),
            json!(null),
            json!(3.5),
            json!(true),
            json!({ "color": "column(x)" }),
            json!("column(x)[]"),
        ] {
            assert_eq!(resolve(raw.clone()), Ok(raw));
        }
    }

    #[test]
    fn whole_column_and_arrays_of_refs() {
        assert_eq!(resolve(json!("column(x)")), Ok(json!([0, 1, 2])));
        assert_eq!(
            resolve(json!(["column(x)", "column(y)"])),
            Ok(json!([[0, 1, 2], [2, 5, 9]]))
        );
    }

    #[test]
    fn selectors_against_a_mapped_column() {
        assert_eq!(resolve(json!("column(z)[1]")), Ok(json!(2)));
        assert_eq!(resolve(json!("column(z)[-1]")), Ok(json!(5)));
        assert_eq!(resolve(json!("column(z)[-3]")), Ok(json!(3)));
        assert_eq!(resolve(json!("column(z)[:-2]")), Ok(json!([1, 2, 3])));
        assert_eq!(resolve(json!("column(z)[1:-1]")), Ok(json!([2, 3, 4])));
        assert_eq!(resolve(json!("column(z)[2:]")), Ok(json!([3, 4, 5])));
        assert_eq!(
            resolve(json!(["column(z)[1:3]", "column(z)[2:4]"])),
            Ok(json!([[2, 3], [3, 4]]))
        );
    }

    #[test]
    fn deeply_nested_refs_resolve_leaf_by_leaf() {
        assert_eq!(
            resolve(json!([[["column(z)[0]", "lit"], null], "column(x)[-1]"])),
            Ok(json!([[[1, "lit"], null], 2]))
        );
    }

    #[test]
    fn unknown_column_is_an_error() {
        assert_eq!(
            resolve(json!("column(nope)")),
            Err(ResolveError::UnknownColumn {
                trace: "t".to_string(),
                name: "nope".to_string(),
            })
        );
    }

    #[test]
    fn missing_data_is_an_error() {
        assert_eq!(
            resolve(json!(["column(x)", "column(gone)"])),
            Err(ResolveError::MissingData {
                entity: "t".to_string(),
                cohort: "c".to_string(),
                key: "columns.gone".to_string(),
            })
        );
    }

    #[test]
    fn out_of_range_index_is_an_error_but_slices_are_not() {
        assert!(matches!(
            resolve(json!("column(x)[3]")),
            Err(ResolveError::IndexOutOfRange { index: 3, len: 3, .. })
        ));
        assert_eq!(resolve(json!("column(x)[1:99]")), Ok(json!([1, 2])));
    }

    #[test]
    fn re_resolving_resolved_output_is_a_no_op() {
        let once = resolve(json!(["column(x)", "column(z)[0]"])).expect("resolves");
        assert_eq!(resolve(once.clone()), Ok(once));
    }

    #[test]
    fn resolve_props_returns_a_new_map() {
        let mut t = trace();
        t.props = serde_json::from_value(json!({
            "type": "bar",
            "x": "column(x)",
            "y": "column(y)[0]"
        }))
        .expect("props decode");
        let d = data();

        let resolved = Resolver::new(&t, "c", &d).resolve_props().expect("resolves");
        assert_eq!(
            Value::Object(resolved),
            json!({ "type": "bar", "x": [0, 1, 2], "y": 2 })
        );
        assert_eq!(t.props["x"], PropValue::from(json!("column(x)")));
    }
}
