//! Report files for a finished matching run.
//!
//! All files of one run share a local `%Y%m%d_%H%M%S` timestamp so repeated
//! runs into the same directory never overwrite each other.

mod summary;
mod tables;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{ClassifiedResult, UrlPair};
use crate::stats::Summary;

pub use summary::render_summary;
pub use tables::{
    write_exact_matches, write_full_results, write_partial_matches, write_url_column,
};

/// Paths of every file written by [`write_reports`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub summary: PathBuf,
    pub summary_json: PathBuf,
    pub full_results: PathBuf,
    pub exact_matches: PathBuf,
    pub partial_matches: PathBuf,
    pub unmatched_live: PathBuf,
    pub unmatched_staging: PathBuf,
}

impl ReportPaths {
    pub fn new(output_dir: &Path, timestamp: &str) -> Self {
        let file = |stem: &str, ext: &str| output_dir.join(format!("{stem}_{timestamp}.{ext}"));
        Self {
            summary: file("url_matching_summary", "txt"),
            summary_json: file("url_matching_summary", "json"),
            full_results: file("url_matching_results", "csv"),
            exact_matches: file("exact_matches", "csv"),
            partial_matches: file("partial_matches", "csv"),
            unmatched_live: file("unmatched_live", "csv"),
            unmatched_staging: file("unmatched_staging", "csv"),
        }
    }

    pub fn all(&self) -> [&Path; 7] {
        [
            &self.summary,
            &self.summary_json,
            &self.full_results,
            &self.exact_matches,
            &self.partial_matches,
            &self.unmatched_live,
            &self.unmatched_staging,
        ]
    }
}

/// Current local time formatted for report file names.
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Writes every report for one run into `output_dir`, creating it if needed.
///
/// `raw` is the ingested input; the full-results file lists every raw row,
/// with an empty match type for rows dropped as blank.
pub fn write_reports(
    output_dir: &Path,
    raw: &[UrlPair],
    result: &ClassifiedResult,
    summary: &Summary,
) -> Result<ReportPaths> {
    write_reports_with_timestamp(output_dir, &timestamp(), raw, result, summary)
}

pub fn write_reports_with_timestamp(
    output_dir: &Path,
    timestamp: &str,
    raw: &[UrlPair],
    result: &ClassifiedResult,
    summary: &Summary,
) -> Result<ReportPaths> {
    tracing::info!("generating reports in {}", output_dir.display());
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;
    let paths = ReportPaths::new(output_dir, timestamp);

    write_full_results(&paths.full_results, raw, result)?;
    fs::write(&paths.summary, render_summary(summary))
        .with_context(|| format!("write {}", paths.summary.display()))?;
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(&paths.summary_json, json)
        .with_context(|| format!("write {}", paths.summary_json.display()))?;
    write_exact_matches(&paths.exact_matches, &result.exact_matches)?;
    write_partial_matches(&paths.partial_matches, &result.partial_matches)?;
    write_url_column(&paths.unmatched_live, "Live_URL", &result.unmatched_live)?;
    write_url_column(&paths.unmatched_staging, "Staging_URL", &result.unmatched_staging)?;

    tracing::info!("reports saved to {}", output_dir.display());
    Ok(paths)
}
