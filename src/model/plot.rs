use crate::error::ResolveError;
use crate::model::entity_cohorts;
use crate::resolve::Resolver;
use crate::spec::dataset::{PROPS_GROUP, group_fields};
use crate::spec::{Dataset, TraceSpec};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// One series: `name` plus every prop, resolved for a single cohort.
pub type PlotRecord = Map<String, Value>;

/// Build one record per cohort of the trace's entity, in dataset key order.
///
/// Per record:
/// - `name` is the cohort name
/// - data-side `props.<field>` entries are copied in as `<field>`
/// - trace props are resolved and override anything copied above
///
/// An index selector yields a scalar, so indicator-style traces come out of
/// the same path as full series.
pub fn cleaned_plot_data(
    dataset: &Dataset,
    trace: &TraceSpec,
) -> Result<Vec<PlotRecord>, ResolveError> {
    let cohorts = entity_cohorts(dataset, &trace.name)?;
    if cohorts.is_empty() {
        warn!(trace = %trace.name, "entity has no cohorts");
    }

    let mut records = Vec::with_capacity(cohorts.len());
    for (cohort, data) in cohorts {
        debug!(trace = %trace.name, cohort = %cohort, "resolving plot props");

        let mut record = PlotRecord::new();
        record.insert("name".to_string(), Value::String(cohort.clone()));
        for (field, value) in group_fields(data, PROPS_GROUP) {
            record.insert(field.to_string(), value.clone());
        }

        let resolved = Resolver::new(trace, cohort, data).resolve_props()?;
        record.extend(resolved);

        records.push(record);
    }

    Ok(records)
}
