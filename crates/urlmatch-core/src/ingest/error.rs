//! Errors raised while reading URL pairs.

use std::path::PathBuf;

/// The input has no identifiable live/staging columns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not identify Live and Staging URL columns: {reason} (found {columns:?})")]
pub struct SchemaError {
    pub reason: String,
    pub columns: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV parse error at row {row}: {source}")]
    Parse {
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
