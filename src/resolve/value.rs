use crate::reference::ColumnRef;
use serde::Deserialize;
use serde_json::Value;

/// Shape of a prop value, classified once when the descriptor is decoded.
///
/// Objects are literals: references are only looked for in strings and
/// (nested) arrays.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum PropValue {
    Literal(Value),
    ColumnRef(ColumnRef),
    Sequence(Vec<PropValue>),
}

impl From<Value> for PropValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => match ColumnRef::parse(&s) {
                Some(reference) => PropValue::ColumnRef(reference),
                None => PropValue::Literal(Value::String(s)),
            },
            Value::Array(items) => {
                PropValue::Sequence(items.into_iter().map(PropValue::from).collect())
            }
            other => PropValue::Literal(other),
        }
    }
}

impl PropValue {
    /// Every reference in this value, depth first.
    pub fn column_refs(&self) -> Vec<&ColumnRef> {
        let mut out = Vec::new();
        self.collect_refs(&mut out);
        out
    }

    fn collect_refs<'a>(&'a self, out: &mut Vec<&'a ColumnRef>) {
        match self {
            PropValue::Literal(_) => {}
            PropValue::ColumnRef(reference) => out.push(reference),
            PropValue::Sequence(items) => {
                for item in items {
                    item.collect_refs(out);
                }
            }
        }
    }
}
