//! Exact-match resolution, same-row then cross-row.

use std::collections::HashSet;

use crate::model::{ExactMatch, MatchKind, NormalizedUrlPair};

/// Output of the exact pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExactPass {
    /// Distinct exact pairs in first-appearance order.
    pub matches: Vec<ExactMatch>,
    /// Per-row label, parallel to the input slice: `Exact` or `NoMatch`.
    pub labels: Vec<MatchKind>,
    /// Rows whose live and staging URLs were already equal.
    pub same_row: usize,
    /// Distinct live URLs resolved against a staging URL on another row.
    pub cross_row: usize,
}

impl ExactPass {
    /// Rows still lacking a match, in input order.
    pub fn residual<'a>(
        &'a self,
        pairs: &'a [NormalizedUrlPair],
    ) -> impl Iterator<Item = &'a NormalizedUrlPair> + 'a {
        pairs
            .iter()
            .zip(&self.labels)
            .filter(|(_, kind)| **kind != MatchKind::Exact)
            .map(|(pair, _)| pair)
    }
}

/// Resolves exact matches.
///
/// 1. A row whose live and staging URLs are equal is exact.
/// 2. Among the remaining rows, a live URL that appears as a staging URL
///    anywhere in the dataset is exact on every row carrying it, and is
///    recorded paired with itself.
///
/// Empty URLs never match.
pub fn find_exact_matches(pairs: &[NormalizedUrlPair]) -> ExactPass {
    let mut labels = vec![MatchKind::NoMatch; pairs.len()];
    let mut found: Vec<ExactMatch> = Vec::new();

    let mut same_row = 0;
    for (pair, label) in pairs.iter().zip(labels.iter_mut()) {
        if !pair.live_url.is_empty() && pair.live_url == pair.staging_url {
            *label = MatchKind::Exact;
            found.push(ExactMatch {
                live_url: pair.live_url.clone(),
                staging_url: pair.staging_url.clone(),
            });
            same_row += 1;
        }
    }

    let staging: HashSet<&str> = pairs
        .iter()
        .map(|p| p.staging_url.as_str())
        .filter(|s| !s.is_empty())
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let candidates: Vec<&str> = pairs
        .iter()
        .zip(&labels)
        .filter(|(p, kind)| !p.live_url.is_empty() && **kind != MatchKind::Exact)
        .map(|(p, _)| p.live_url.as_str())
        .filter(|live| seen.insert(*live))
        .collect();

    let mut cross_row = 0;
    for live in candidates {
        if !staging.contains(live) {
            continue;
        }
        for (pair, label) in pairs.iter().zip(labels.iter_mut()) {
            if pair.live_url == live {
                *label = MatchKind::Exact;
            }
        }
        found.push(ExactMatch {
            live_url: live.to_string(),
            staging_url: live.to_string(),
        });
        cross_row += 1;
    }

    let mut distinct: HashSet<ExactMatch> = HashSet::new();
    let matches: Vec<ExactMatch> = found
        .into_iter()
        .filter(|m| distinct.insert(m.clone()))
        .collect();

    tracing::info!(
        "found {} exact matches ({} same-row, {} cross-row)",
        matches.len(),
        same_row,
        cross_row
    );

    ExactPass {
        matches,
        labels,
        same_row,
        cross_row,
    }
}
