use thiserror::Error;

/// Failures while resolving references or building plot/table data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("trace '{trace}' references column '{name}', which is not in its columns definition")]
    UnknownColumn { trace: String, name: String },

    #[error("no data for key '{key}' in {entity}/{cohort}")]
    MissingData {
        entity: String,
        cohort: String,
        key: String,
    },

    #[error("{reference}: index {index} out of range for column of length {len}")]
    IndexOutOfRange {
        reference: String,
        index: i64,
        len: usize,
    },

    #[error("{reference}: selector applied to a value that is not a column")]
    NotASequence { reference: String },

    #[error("dataset has no entity named '{entity}'")]
    MissingEntity { entity: String },

    #[error("table column '{column}' has {actual} values, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
}
