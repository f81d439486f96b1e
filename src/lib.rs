//! Resolve `column(..)` references in trace/table descriptors against a
//! per-entity, per-cohort dataset and build flat plot/table records.

pub mod error;
pub mod model;
pub mod reference;
pub mod resolve;
pub mod spec;

pub use error::ResolveError;
pub use model::{PlotRecord, TableRow, TableView, cleaned_plot_data, cleaned_table_data};
pub use reference::{ColumnRef, Selector};
pub use resolve::{PropValue, Resolver};
pub use spec::{CohortData, ColumnSpec, Dataset, TableSpec, TraceSpec};

pub type Result<T> = anyhow::Result<T>;
