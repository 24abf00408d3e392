//! Pairwise similarity scoring.
//!
//! [`calculate_similarity`] runs its heuristics in a fixed order and returns
//! the first one that clears the threshold. It does not look for the best of
//! the three: a pair whose path overlap qualifies at 0.75 is reported as a
//! path match even if its sequence ratio is 0.9.

mod sequence;

use std::collections::HashSet;

use crate::model::MatchKind;
use crate::url_model::path_segments;

pub use sequence::sequence_ratio;

/// Score and kind for one live/staging comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Similarity {
    pub score: f64,
    pub kind: MatchKind,
}

impl Similarity {
    pub const NONE: Similarity = Similarity {
        score: 0.0,
        kind: MatchKind::NoMatch,
    };

    const EXACT: Similarity = Similarity {
        score: 1.0,
        kind: MatchKind::Exact,
    };

    fn qualifying(score: f64, kind: MatchKind, threshold: f64) -> Option<Similarity> {
        (score > threshold).then_some(Similarity { score, kind })
    }
}

/// Scores two normalized URLs.
///
/// Order: empty input, identity, path-segment overlap, sequence ratio,
/// substring containment. Each heuristic qualifies only when its score is
/// strictly greater than `threshold`.
pub fn calculate_similarity(url1: &str, url2: &str, threshold: f64) -> Similarity {
    if url1.is_empty() || url2.is_empty() {
        return Similarity::NONE;
    }
    if url1 == url2 {
        return Similarity::EXACT;
    }

    path_overlap(url1, url2)
        .and_then(|s| Similarity::qualifying(s, MatchKind::PartialPath, threshold))
        .or_else(|| {
            Similarity::qualifying(sequence_ratio(url1, url2), MatchKind::PartialSequence, threshold)
        })
        .or_else(|| {
            substring_ratio(url1, url2)
                .and_then(|s| Similarity::qualifying(s, MatchKind::PartialSubstring, threshold))
        })
        .unwrap_or(Similarity::NONE)
}

/// Shared distinct segments over the longer segment list. `None` when the
/// paths share nothing.
fn path_overlap(url1: &str, url2: &str) -> Option<f64> {
    let segs1 = path_segments(url1);
    let segs2 = path_segments(url2);
    let set1: HashSet<&str> = segs1.iter().copied().collect();
    let common = segs2
        .iter()
        .copied()
        .collect::<HashSet<&str>>()
        .intersection(&set1)
        .count();
    if common == 0 {
        return None;
    }
    Some(common as f64 / segs1.len().max(segs2.len()) as f64)
}

/// Length ratio when one string contains the other.
fn substring_ratio(url1: &str, url2: &str) -> Option<f64> {
    if !(url1.contains(url2) || url2.contains(url1)) {
        return None;
    }
    let len1 = url1.chars().count();
    let len2 = url2.chars().count();
    Some(len1.min(len2) as f64 / len1.max(len2) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_no_match() {
        assert_eq!(calculate_similarity("", "http://a.com", 0.0), Similarity::NONE);
        assert_eq!(calculate_similarity("http://a.com", "", 0.0), Similarity::NONE);
        assert_eq!(calculate_similarity("", "", 0.0), Similarity::NONE);
    }

    #[test]
    fn identical_is_exact_even_above_threshold() {
        let s = calculate_similarity("http://a.com/x", "http://a.com/x", 5.0);
        assert_eq!(s.kind, MatchKind::Exact);
        assert_eq!(s.score, 1.0);
    }

    #[test]
    fn path_overlap_wins_over_better_sequence() {
        let s = calculate_similarity(
            "http://site.com/products/shoes",
            "http://stage.site.com/catalog/products/shoes",
            0.5,
        );
        assert_eq!(s.kind, MatchKind::PartialPath);
        assert!((s.score - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn sequence_when_path_does_not_qualify() {
        // Path overlap is 2/3, below 0.7; the sequence ratio is ~0.81.
        let s = calculate_similarity(
            "http://site.com/products/shoes",
            "http://stage.site.com/catalog/products/shoes",
            0.7,
        );
        assert_eq!(s.kind, MatchKind::PartialSequence);
        assert!((s.score - 60.0 / 74.0).abs() < 1e-12);
    }

    #[test]
    fn root_paths_share_the_empty_segment() {
        let s = calculate_similarity("http://a.com", "http://b.com/", 0.7);
        assert_eq!(s.kind, MatchKind::PartialPath);
        assert_eq!(s.score, 1.0);
    }

    #[test]
    fn containment_usually_scores_as_sequence() {
        let live = "http://a.co/x";
        let staging = "http://a.co/x-archived-2019-old";
        let s = calculate_similarity(live, staging, 0.4);
        assert_eq!(s.kind, MatchKind::PartialSequence);
        assert!((s.score - 26.0 / 44.0).abs() < 1e-12);
        // Substring ratio is 13/31, also below 0.6.
        assert_eq!(calculate_similarity(live, staging, 0.6), Similarity::NONE);
    }

    #[test]
    fn substring_reached_when_sequence_has_no_seed() {
        // In a long second string every `x` is too common to seed a block.
        let short = "x".repeat(150);
        let long = format!("z{}", "x".repeat(299));
        assert_eq!(sequence_ratio(&short, &long), 0.0);
        let s = calculate_similarity(&short, &long, 0.4);
        assert_eq!(s.kind, MatchKind::PartialSubstring);
        assert_eq!(s.score, 0.5);
        // Argument order matters: with the long string first it is a sequence match.
        let s = calculate_similarity(&long, &short, 0.4);
        assert_eq!(s.kind, MatchKind::PartialSequence);
    }

    #[test]
    fn no_match_scenario() {
        let s = calculate_similarity(
            "http://a.com/unique-page-xyz",
            "http://b.com/totally-different",
            0.7,
        );
        assert_eq!(s, Similarity::NONE);
    }

    #[test]
    fn score_equal_to_threshold_does_not_qualify() {
        // Path overlap is exactly 1/2.
        let s = calculate_similarity("http://a.com/x/y", "http://b.com/x/z", 0.5);
        assert_eq!(s.kind, MatchKind::PartialSequence);
        let s = calculate_similarity("abcd", "bcde", 0.75);
        assert_eq!(s, Similarity::NONE);
        let s = calculate_similarity("abcd", "bcde", 0.74);
        assert_eq!(s.kind, MatchKind::PartialSequence);
    }

    #[test]
    fn threshold_of_one_disables_partials() {
        let s = calculate_similarity("http://a.com/x", "http://b.com/x", 1.0);
        assert_eq!(s, Similarity::NONE);
    }
}
