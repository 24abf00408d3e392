//! Universal properties of the scorer and the exact pass.

use proptest::prelude::*;
use urlmatch_core::matcher::{calculate_similarity, find_exact_matches};
use urlmatch_core::model::{MatchKind, NormalizedUrlPair};
use urlmatch_core::url_model::normalize_url;

fn url() -> impl Strategy<Value = String> {
    "(https?://)?[a-c]{1,3}\\.com(/[a-c%0-9 ]{0,4}){0,4}"
}

proptest! {
    #[test]
    fn identical_urls_are_exact(a in url(), t in 0.0f64..1.0) {
        let a = normalize_url(Some(&a));
        let s = calculate_similarity(&a, &a, t);
        prop_assert_eq!(s.kind, MatchKind::Exact);
        prop_assert_eq!(s.score, 1.0);
    }

    #[test]
    fn scores_stay_in_unit_range(a in url(), b in url(), t in -0.5f64..1.5) {
        let s = calculate_similarity(&normalize_url(Some(&a)), &normalize_url(Some(&b)), t);
        prop_assert!((0.0..=1.0).contains(&s.score));
    }

    #[test]
    fn qualifying_kinds_beat_threshold(a in url(), b in url(), t in 0.0f64..1.0) {
        let (a, b) = (normalize_url(Some(&a)), normalize_url(Some(&b)));
        let s = calculate_similarity(&a, &b, t);
        if s.kind.is_partial() {
            prop_assert!(s.score > t);
        }
        if s.kind == MatchKind::NoMatch {
            prop_assert_eq!(s.score, 0.0);
        }
    }

    #[test]
    fn normalization_is_stable(a in url()) {
        let once = normalize_url(Some(&a));
        prop_assert!(!once.contains("///"));
        prop_assert!(once.is_empty() || once.starts_with("http"));
    }

    #[test]
    fn exact_pass_is_idempotent(rows in prop::collection::vec((url(), url()), 0..8)) {
        let pairs: Vec<NormalizedUrlPair> = rows
            .iter()
            .enumerate()
            .map(|(i, (l, s))| NormalizedUrlPair {
                row_index: i,
                live_url: normalize_url(Some(l)),
                staging_url: normalize_url(Some(s)),
            })
            .collect();
        let first = find_exact_matches(&pairs);
        let replay: Vec<NormalizedUrlPair> = first
            .matches
            .iter()
            .enumerate()
            .map(|(i, m)| NormalizedUrlPair {
                row_index: i,
                live_url: m.live_url.clone(),
                staging_url: m.staging_url.clone(),
            })
            .collect();
        let second = find_exact_matches(&replay);
        prop_assert_eq!(second.matches, first.matches);
    }
}
