use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use trace_data::{
    Dataset, ResolveError, Resolver, TableSpec, TraceSpec, cleaned_plot_data, cleaned_table_data,
};

fn example_data() -> Dataset {
    serde_json::from_value(json!({
        "traceName": {
            "cohortName": {
                "columns.x_data": [1, 2, 3, 4, 5, 6],
                "columns.y_data": [4, -1, 6, -3, 12, -8],
                "props.text": ["4", "-1", "6", "-3", "12", "-8"]
            }
        }
    }))
    .expect("dataset decodes")
}

fn trace(value: Value) -> TraceSpec {
    serde_json::from_value(value).expect("trace decodes")
}

fn records(dataset: &Dataset, trace: &TraceSpec) -> Value {
    let records = cleaned_plot_data(dataset, trace).expect("plot data builds");
    Value::Array(records.into_iter().map(Value::Object).collect())
}

#[test]
fn resolves_references_in_a_props_like_object() {
    let t = trace(json!({
        "name": "traceName",
        "columns": { "x": "x", "y": "y", "z": "z" }
    }));
    let data = serde_json::from_value(json!({
        "columns.x": [0, 1, 2],
        "columns.y": [2, 5, 9],
        "columns.z": [1, 2, 3, 4, 5]
    }))
    .expect("cohort decodes");
    let resolver = Resolver::new(&t, "cohortName", &data);

    let props = json!({
        "x": ["column(x)", "column(y)"],
        "y": null,
        "z": "column(z)[1]",
        "a": "column(z)[:-2]",
        "b": "column(z)[1:-1]",
        "c": "column(z)[2:]",
        "d": "column(z)[-3]",
        "e": ["column(z)[1:3]", "column(z)[2:4]"],
        "f": "column(z)[-1]"
    });
    // Objects are literals; a props map is resolved field by field.
    assert_eq!(resolver.resolve_value(&props), Ok(props.clone()));

    let field = |name: &str| resolver.resolve_value(&props[name]).expect("resolves");
    assert_eq!(field("x"), json!([[0, 1, 2], [2, 5, 9]]));
    assert_eq!(field("y"), Value::Null);
    assert_eq!(field("z"), json!(2));
    assert_eq!(field("a"), json!([1, 2, 3]));
    assert_eq!(field("b"), json!([2, 3, 4]));
    assert_eq!(field("c"), json!([3, 4, 5]));
    assert_eq!(field("d"), json!(3));
    assert_eq!(field("e"), json!([[2, 3], [3, 4]]));
    assert_eq!(field("f"), json!(5));
}

#[test]
fn cleaned_plot_data_copies_data_props_through() {
    let dataset = example_data();
    let t = trace(json!({
        "name": "traceName",
        "columns": { "x": "x_data" },
        "props": { "x": "column(x_data)" }
    }));

    assert_eq!(
        records(&dataset, &t),
        json!([{
            "name": "cohortName",
            "x": [1, 2, 3, 4, 5, 6],
            "text": ["4", "-1", "6", "-3", "12", "-8"]
        }])
    );
}

#[test]
fn cleaned_indicator_data_holds_a_scalar() {
    let dataset = example_data();
    let t = trace(json!({
        "name": "traceName",
        "columns": { "x": "x_data" },
        "props": { "x": "column(x_data)[0]" }
    }));

    assert_eq!(
        records(&dataset, &t),
        json!([{
            "name": "cohortName",
            "x": 1,
            "text": ["4", "-1", "6", "-3", "12", "-8"]
        }])
    );
}

#[test]
fn cleaned_table_data_pairs_columns_by_index() {
    let table: TableSpec = serde_json::from_value(json!({
        "name": "awesome-table",
        "props": { "enableColumnDragging": true },
        "trace": {
            "name": "traceName",
            "columns": { "x": "x_data", "y": "y_data" },
            "props": { "x": "column(x_data)" }
        },
        "columns": [
            { "header": "X Data", "column": "x_data" },
            { "header": "Y Data", "column": "y_data" }
        ]
    }))
    .expect("table decodes");
    table.validate().expect("table is valid");

    let rows = cleaned_table_data(&example_data(), &table).expect("table data builds");

    assert_eq!(
        serde_json::to_value(&rows).expect("serializes"),
        json!([
            { "x_data": 1, "y_data": 4 },
            { "x_data": 2, "y_data": -1 },
            { "x_data": 3, "y_data": 6 },
            { "x_data": 4, "y_data": -3 },
            { "x_data": 5, "y_data": 12 },
            { "x_data": 6, "y_data": -8 }
        ])
    );
}

#[test]
fn unknown_reference_surfaces_from_the_builder() {
    let t = trace(json!({
        "name": "traceName",
        "columns": { "x": "x_data" },
        "props": { "y": "column(y)" }
    }));

    assert!(t.validate().is_err());
    assert_eq!(
        cleaned_plot_data(&example_data(), &t),
        Err(ResolveError::UnknownColumn {
            trace: "traceName".to_string(),
            name: "y".to_string(),
        })
    );
}
