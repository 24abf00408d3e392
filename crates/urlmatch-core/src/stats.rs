//! Summary counts and percentages over a classified result.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{ClassifiedResult, MatchKind};

/// Shares of live URLs, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Percentages {
    pub exact: f64,
    pub partial: f64,
    pub unmatched: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_rows: usize,
    pub exact_matches: usize,
    pub partial_matches: usize,
    pub unmatched_live: usize,
    pub unmatched_staging: usize,
    /// Non-empty live URLs; denominator of the percentages.
    pub live_urls: usize,
    pub partial_by_kind: BTreeMap<MatchKind, usize>,
    /// Absent when there are no live URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentages: Option<Percentages>,
}

/// Aggregates `result`.
pub fn summarize(result: &ClassifiedResult) -> Summary {
    let live_urls = result
        .rows
        .iter()
        .filter(|r| !r.live_url.is_empty())
        .count();

    let mut partial_by_kind = BTreeMap::new();
    for m in &result.partial_matches {
        *partial_by_kind.entry(m.kind).or_insert(0) += 1;
    }

    let exact_matches = result.exact_matches.len();
    let partial_matches = result.partial_matches.len();
    let unmatched_live = result.unmatched_live.len();

    let percentages = (live_urls > 0).then(|| {
        let pct = |n: usize| n as f64 / live_urls as f64 * 100.0;
        Percentages {
            exact: pct(exact_matches),
            partial: pct(partial_matches),
            unmatched: pct(unmatched_live),
        }
    });

    Summary {
        total_rows: result.rows.len(),
        exact_matches,
        partial_matches,
        unmatched_live,
        unmatched_staging: result.unmatched_staging.len(),
        live_urls,
        partial_by_kind,
        percentages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExactMatch, MatchRecord, RowClassification};

    fn row(i: usize, live: &str, kind: MatchKind) -> RowClassification {
        RowClassification {
            row_index: i,
            live_url: live.to_string(),
            staging_url: String::new(),
            kind,
        }
    }

    #[test]
    fn percentages_relative_to_live_urls() {
        let result = ClassifiedResult {
            rows: vec![
                row(0, "http://a.com", MatchKind::Exact),
                row(1, "http://b.com", MatchKind::PartialPath),
                row(2, "http://c.com", MatchKind::NoMatch),
                row(3, "http://d.com", MatchKind::NoMatch),
                row(4, "", MatchKind::NoMatch),
            ],
            exact_matches: vec![ExactMatch {
                live_url: "http://a.com".into(),
                staging_url: "http://a.com".into(),
            }],
            partial_matches: vec![MatchRecord {
                live_url: "http://b.com".into(),
                staging_url: "http://b2.com".into(),
                kind: MatchKind::PartialPath,
                score: 1.0,
            }],
            unmatched_live: vec!["http://c.com".into(), "http://d.com".into()],
            unmatched_staging: vec![],
        };
        let s = summarize(&result);
        assert_eq!(s.total_rows, 5);
        assert_eq!(s.live_urls, 4);
        let p = s.percentages.unwrap();
        assert_eq!(p.exact, 25.0);
        assert_eq!(p.partial, 25.0);
        assert_eq!(p.unmatched, 50.0);
        assert_eq!(s.partial_by_kind.get(&MatchKind::PartialPath), Some(&1));
    }

    #[test]
    fn no_live_urls_omits_percentages() {
        let result = ClassifiedResult {
            rows: vec![row(0, "", MatchKind::NoMatch)],
            unmatched_staging: vec!["http://s.com".into()],
            ..Default::default()
        };
        let s = summarize(&result);
        assert!(s.percentages.is_none());
        let json = serde_json::to_value(&s).unwrap();
        assert!(json.get("percentages").is_none());
        assert_eq!(json["unmatched_staging"], 1);
    }
}
