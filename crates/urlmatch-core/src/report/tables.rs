//! CSV report tables.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

use crate::ingest::{LIVE_COLUMN, STAGING_COLUMN};
use crate::model::{ClassifiedResult, ExactMatch, MatchKind, MatchRecord, UrlPair};

fn open(path: &Path) -> Result<csv::Writer<std::fs::File>> {
    csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))
}

fn finish(mut writer: csv::Writer<std::fs::File>, path: &Path) -> Result<()> {
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))
}

/// Every raw input row with its match type. Rows dropped before matching get
/// an empty match type.
pub fn write_full_results(path: &Path, raw: &[UrlPair], result: &ClassifiedResult) -> Result<()> {
    let kinds: HashMap<usize, MatchKind> = result
        .rows
        .iter()
        .map(|r| (r.row_index, r.kind))
        .collect();

    let mut w = open(path)?;
    w.write_record([LIVE_COLUMN, STAGING_COLUMN, "Match_Type"])?;
    for pair in raw {
        let kind = kinds.get(&pair.row_index).map_or("", |k| k.as_str());
        w.write_record([
            pair.live_url.as_deref().unwrap_or(""),
            pair.staging_url.as_deref().unwrap_or(""),
            kind,
        ])?;
    }
    finish(w, path)
}

pub fn write_exact_matches(path: &Path, matches: &[ExactMatch]) -> Result<()> {
    let mut w = open(path)?;
    w.write_record([LIVE_COLUMN, STAGING_COLUMN])?;
    for m in matches {
        w.write_record([m.live_url.as_str(), m.staging_url.as_str()])?;
    }
    finish(w, path)
}

pub fn write_partial_matches(path: &Path, matches: &[MatchRecord]) -> Result<()> {
    let mut w = open(path)?;
    w.write_record([LIVE_COLUMN, STAGING_COLUMN, "Similarity", "Match_Type"])?;
    for m in matches {
        let score = m.score.to_string();
        w.write_record([
            m.live_url.as_str(),
            m.staging_url.as_str(),
            score.as_str(),
            m.kind.as_str(),
        ])?;
    }
    finish(w, path)
}

/// Single-column table of URLs under `header`.
pub fn write_url_column(path: &Path, header: &str, urls: &[String]) -> Result<()> {
    let mut w = open(path)?;
    w.write_record([header])?;
    for url in urls {
        w.write_record([url.as_str()])?;
    }
    finish(w, path)
}
