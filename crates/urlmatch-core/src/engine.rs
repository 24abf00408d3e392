//! End-to-end matching over one batch of URL pairs.
//!
//! raw pairs → normalize (drop blank rows) → exact pass → partial pass →
//! unmatched collection. The engine keeps no state between runs.

use crate::matcher::{find_exact_matches, find_partial_matches, identify_unmatched};
use crate::model::{ClassifiedResult, NormalizedUrlPair, RowClassification, UrlPair};
use crate::stats::{summarize, Summary};

/// Similarity threshold used when none is configured.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;

/// Normalizes every pair and drops rows where both sides end up empty.
pub fn normalize_pairs(pairs: &[UrlPair]) -> Vec<NormalizedUrlPair> {
    let normalized: Vec<NormalizedUrlPair> = pairs
        .iter()
        .map(NormalizedUrlPair::from_raw)
        .filter(|p| !p.is_blank())
        .collect();
    tracing::info!(
        "after cleaning, {} of {} rows remain",
        normalized.len(),
        pairs.len()
    );
    normalized
}

/// Classifies already-normalized pairs.
///
/// `similarity_threshold` is not validated; a value of 1 or more makes
/// partial matches impossible.
pub fn classify(pairs: &[NormalizedUrlPair], similarity_threshold: f64) -> ClassifiedResult {
    let exact = find_exact_matches(pairs);
    let partial = find_partial_matches(pairs, &exact, similarity_threshold);
    let unmatched = identify_unmatched(pairs, &partial.labels, &exact.matches, &partial.matches);

    let rows = pairs
        .iter()
        .zip(&partial.labels)
        .map(|(p, kind)| RowClassification {
            row_index: p.row_index,
            live_url: p.live_url.clone(),
            staging_url: p.staging_url.clone(),
            kind: *kind,
        })
        .collect();

    ClassifiedResult {
        rows,
        exact_matches: exact.matches,
        partial_matches: partial.matches,
        unmatched_live: unmatched.live,
        unmatched_staging: unmatched.staging,
    }
}

/// Runs the whole pipeline on raw pairs and returns the result with its
/// summary.
pub fn run(pairs: &[UrlPair], similarity_threshold: f64) -> (ClassifiedResult, Summary) {
    tracing::info!(
        "matching {} rows with similarity threshold {}",
        pairs.len(),
        similarity_threshold
    );
    let normalized = normalize_pairs(pairs);
    let result = classify(&normalized, similarity_threshold);
    let summary = summarize(&result);
    (result, summary)
}
