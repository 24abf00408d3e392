//! Residual URLs left after both matching passes.

use std::collections::HashSet;

use crate::model::{ExactMatch, MatchKind, MatchRecord, NormalizedUrlPair};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Unmatched {
    pub live: Vec<String>,
    pub staging: Vec<String>,
}

/// Collects unmatched URLs, one entry per row in row order.
///
/// A live URL is unmatched when its row is still `NoMatch`. A staging URL is
/// unmatched when its value is not the staging side of any exact or partial
/// record; one match consumes every row carrying that value.
pub fn identify_unmatched(
    pairs: &[NormalizedUrlPair],
    labels: &[MatchKind],
    exact: &[ExactMatch],
    partial: &[MatchRecord],
) -> Unmatched {
    let live = pairs
        .iter()
        .zip(labels)
        .filter(|(p, kind)| !p.live_url.is_empty() && **kind == MatchKind::NoMatch)
        .map(|(p, _)| p.live_url.clone())
        .collect::<Vec<_>>();

    let matched_staging: HashSet<&str> = exact
        .iter()
        .map(|m| m.staging_url.as_str())
        .chain(partial.iter().map(|m| m.staging_url.as_str()))
        .collect();

    let staging = pairs
        .iter()
        .map(|p| p.staging_url.as_str())
        .filter(|s| !s.is_empty() && !matched_staging.contains(s))
        .map(String::from)
        .collect::<Vec<_>>();

    tracing::info!(
        "found {} unmatched live URLs and {} unmatched staging URLs",
        live.len(),
        staging.len()
    );

    Unmatched { live, staging }
}
