//! CSV reader with live/staging column detection.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::{IngestError, SchemaError};
use crate::model::UrlPair;

/// Header of the live URL column.
pub const LIVE_COLUMN: &str = "Live_URL";
/// Header of the staging URL column.
pub const STAGING_COLUMN: &str = "Staging_URL";

/// Positions of the live and staging columns in a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub live: usize,
    pub staging: usize,
}

impl Columns {
    /// Named columns win; otherwise a two-column file is read positionally
    /// as live, staging.
    pub fn identify(headers: &[String]) -> Result<Columns, SchemaError> {
        let named = |name: &str| headers.iter().position(|h| h.trim() == name);
        if let (Some(live), Some(staging)) = (named(LIVE_COLUMN), named(STAGING_COLUMN)) {
            return Ok(Columns { live, staging });
        }
        if headers.len() == 2 {
            return Ok(Columns { live: 0, staging: 1 });
        }
        Err(SchemaError {
            reason: format!(
                "expected {LIVE_COLUMN} and {STAGING_COLUMN} headers or exactly 2 columns"
            ),
            columns: headers.to_vec(),
        })
    }
}

/// Reads URL pairs from a CSV file with a header row.
pub fn load_pairs(path: &Path) -> Result<Vec<UrlPair>, IngestError> {
    tracing::info!("loading data from {}", path.display());
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let pairs = read_pairs(file)?;
    tracing::info!("loaded {} rows of data", pairs.len());
    Ok(pairs)
}

/// Reads URL pairs from CSV data with a header row.
///
/// Empty cells and missing trailing cells become `None`. Rows are indexed
/// from 0 in file order, header excluded.
pub fn read_pairs<R: Read>(input: R) -> Result<Vec<UrlPair>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| IngestError::Parse { row: 0, source })?
        .iter()
        .map(String::from)
        .collect();
    let columns = Columns::identify(&headers)?;
    tracing::debug!("using columns {:?} of {:?}", columns, headers);

    let mut pairs = Vec::new();
    for (row_index, result) in reader.records().enumerate() {
        let record = result.map_err(|source| IngestError::Parse {
            row: row_index + 1,
            source,
        })?;
        pairs.push(UrlPair::new(
            row_index,
            non_empty_cell(&record, columns.live),
            non_empty_cell(&record, columns.staging),
        ));
    }
    Ok(pairs)
}

fn non_empty_cell(record: &csv::StringRecord, i: usize) -> Option<&str> {
    record.get(i).filter(|v| !v.is_empty())
}
