//! Best-candidate search for live URLs without an exact match.

use std::collections::HashMap;

use super::exact::ExactPass;
use super::similarity::{calculate_similarity, Similarity};
use crate::model::{MatchKind, MatchRecord, NormalizedUrlPair};

/// Output of the partial pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialPass {
    /// One record per matched residual row, in row order.
    pub matches: Vec<MatchRecord>,
    /// Per-row labels after both passes, parallel to the input slice.
    pub labels: Vec<MatchKind>,
}

/// Best staging candidate for `live` over the whole pool.
///
/// A candidate only replaces the current best when strictly better, so on a
/// tie the earliest staging URL (pool order) wins.
pub fn best_candidate<'a>(
    live: &str,
    staging_pool: &[&'a str],
    threshold: f64,
) -> Option<(&'a str, Similarity)> {
    let mut best: Option<(&'a str, Similarity)> = None;
    let mut best_score = 0.0;
    for &staging in staging_pool {
        let sim = calculate_similarity(live, staging, threshold);
        if sim.score > best_score {
            best_score = sim.score;
            best = Some((staging, sim));
        }
    }
    best.filter(|(_, sim)| sim.score > threshold)
}

/// Scores every residual row's live URL against every non-empty staging URL
/// in the dataset and keeps the best candidate above `threshold`.
///
/// Each residual row with a match yields its own record, so a live URL
/// repeated on several rows is reported once per row.
pub fn find_partial_matches(
    pairs: &[NormalizedUrlPair],
    exact: &ExactPass,
    threshold: f64,
) -> PartialPass {
    let staging_pool: Vec<&str> = pairs
        .iter()
        .map(|p| p.staging_url.as_str())
        .filter(|s| !s.is_empty())
        .collect();

    let mut labels = exact.labels.clone();
    let mut matches = Vec::new();
    let mut cache: HashMap<&str, Option<(&str, Similarity)>> = HashMap::new();

    for (pair, label) in pairs.iter().zip(labels.iter_mut()) {
        if *label == MatchKind::Exact || pair.live_url.is_empty() {
            continue;
        }
        let live = pair.live_url.as_str();
        let best = *cache
            .entry(live)
            .or_insert_with(|| best_candidate(live, &staging_pool, threshold));
        let Some((staging, sim)) = best else {
            tracing::debug!("no partial candidate for {}", live);
            continue;
        };
        tracing::debug!(
            "partial match {} -> {} ({}, {:.4})",
            live,
            staging,
            sim.kind,
            sim.score
        );
        *label = sim.kind;
        matches.push(MatchRecord {
            live_url: live.to_string(),
            staging_url: staging.to_string(),
            kind: sim.kind,
            score: sim.score,
        });
    }

    tracing::info!("found {} partial matches", matches.len());
    PartialPass { matches, labels }
}
