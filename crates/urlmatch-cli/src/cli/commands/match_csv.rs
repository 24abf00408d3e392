//! `urlmatch match <csv>` – full run with reports.

use anyhow::Result;
use std::path::Path;
use urlmatch_core::report::{render_summary, write_reports};
use urlmatch_core::{engine, ingest};

use super::warn_unusual_threshold;

pub fn run_match(csv_file: &Path, output_dir: &Path, threshold: f64, json: bool) -> Result<()> {
    warn_unusual_threshold(threshold);
    tracing::info!("starting URL matching for {}", csv_file.display());

    let raw = ingest::load_pairs(csv_file)?;
    let (result, summary) = engine::run(&raw, threshold);
    let paths = write_reports(output_dir, &raw, &result, &summary)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render_summary(&summary));
        println!();
        println!("Reports written to {}:", output_dir.display());
        for p in paths.all() {
            println!("  {}", p.display());
        }
    }

    tracing::info!("URL matching completed; summary at {}", paths.summary.display());
    Ok(())
}
