//! Plain-text rendering of a [`Summary`].

use std::fmt::Write;

use crate::stats::Summary;

/// Renders the human-readable summary report.
pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_summary(&mut out, summary);
    out
}

fn write_summary(out: &mut String, s: &Summary) -> std::fmt::Result {
    let pct = s.percentages;

    writeln!(out, "URL MATCHING SUMMARY")?;
    writeln!(out, "====================")?;
    writeln!(out)?;
    writeln!(out, "Total URLs analyzed: {}", s.total_rows)?;
    writeln!(
        out,
        "Exact matches: {}{}",
        s.exact_matches,
        share(pct.map(|p| p.exact))
    )?;
    writeln!(
        out,
        "Partial matches: {}{}",
        s.partial_matches,
        share(pct.map(|p| p.partial))
    )?;
    writeln!(
        out,
        "Unmatched Live URLs: {}{}",
        s.unmatched_live,
        share(pct.map(|p| p.unmatched))
    )?;
    writeln!(out, "Unmatched Staging URLs: {}", s.unmatched_staging)?;
    writeln!(out)?;
    writeln!(out, "PARTIAL MATCHES BY TYPE")?;
    writeln!(out, "=======================")?;
    writeln!(out)?;
    for (kind, count) in &s.partial_by_kind {
        writeln!(out, "{kind}: {count}")?;
    }
    Ok(())
}

fn share(percent: Option<f64>) -> String {
    percent
        .map(|p| format!(" ({p:.2}% of Live URLs)"))
        .unwrap_or_default()
}
