//! Output model: flat records handed to the plot and table renderers.

pub mod plot;
pub mod table;

pub use plot::{PlotRecord, cleaned_plot_data};
pub use table::{TableRow, TableView, cleaned_table_data};

use crate::error::ResolveError;
use crate::spec::{Cohorts, Dataset};

/// Cohorts of `entity`, or an error if the dataset never saw it.
fn entity_cohorts<'a>(dataset: &'a Dataset, entity: &str) -> Result<&'a Cohorts, ResolveError> {
    dataset
        .cohorts(entity)
        .ok_or_else(|| ResolveError::MissingEntity {
            entity: entity.to_string(),
        })
}
