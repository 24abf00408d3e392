//! CSV ingestion: turns a two-column file into ordered [`UrlPair`]s.
//!
//! Column identification happens here and only here. The matcher receives
//! pairs that are already shaped; it never sees a schema problem.
//!
//! [`UrlPair`]: crate::model::UrlPair

mod error;
mod reader;

pub use error::{IngestError, SchemaError};
pub use reader::{load_pairs, read_pairs, Columns, LIVE_COLUMN, STAGING_COLUMN};
