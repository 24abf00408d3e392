//! Records passed between the matching stages.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::url_model::normalize_url;

/// One input row as supplied by ingestion. Either side may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlPair {
    pub row_index: usize,
    pub live_url: Option<String>,
    pub staging_url: Option<String>,
}

impl UrlPair {
    pub fn new(row_index: usize, live_url: Option<&str>, staging_url: Option<&str>) -> Self {
        Self {
            row_index,
            live_url: live_url.map(String::from),
            staging_url: staging_url.map(String::from),
        }
    }
}

/// A [`UrlPair`] after normalization. Empty strings stand for absent values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrlPair {
    pub row_index: usize,
    pub live_url: String,
    pub staging_url: String,
}

impl NormalizedUrlPair {
    pub fn from_raw(pair: &UrlPair) -> Self {
        Self {
            row_index: pair.row_index,
            live_url: normalize_url(pair.live_url.as_deref()),
            staging_url: normalize_url(pair.staging_url.as_deref()),
        }
    }

    /// True when both sides normalized to empty; such rows are dropped.
    pub fn is_blank(&self) -> bool {
        self.live_url.is_empty() && self.staging_url.is_empty()
    }
}

/// Outcome of comparing a live URL against staging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MatchKind {
    #[serde(rename = "Exact")]
    Exact,
    #[serde(rename = "Partial - Path")]
    PartialPath,
    #[serde(rename = "Partial - Sequence")]
    PartialSequence,
    #[serde(rename = "Partial - Substring")]
    PartialSubstring,
    #[serde(rename = "No Match")]
    NoMatch,
}

impl MatchKind {
    /// Label used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::Exact => "Exact",
            MatchKind::PartialPath => "Partial - Path",
            MatchKind::PartialSequence => "Partial - Sequence",
            MatchKind::PartialSubstring => "Partial - Substring",
            MatchKind::NoMatch => "No Match",
        }
    }

    pub fn is_partial(self) -> bool {
        matches!(
            self,
            MatchKind::PartialPath | MatchKind::PartialSequence | MatchKind::PartialSubstring
        )
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An exact pairing. Cross-row matches pair a live URL with itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExactMatch {
    pub live_url: String,
    pub staging_url: String,
}

/// A scored pairing produced by the partial matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub live_url: String,
    pub staging_url: String,
    pub kind: MatchKind,
    pub score: f64,
}

/// Final label of one retained input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowClassification {
    pub row_index: usize,
    pub live_url: String,
    pub staging_url: String,
    pub kind: MatchKind,
}

/// Everything the engine hands to reporting.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedResult {
    pub rows: Vec<RowClassification>,
    pub exact_matches: Vec<ExactMatch>,
    pub partial_matches: Vec<MatchRecord>,
    pub unmatched_live: Vec<String>,
    pub unmatched_staging: Vec<String>,
}

impl ClassifiedResult {
    /// Kind assigned to the input row with `row_index`, if it was retained.
    pub fn kind_of_row(&self, row_index: usize) -> Option<MatchKind> {
        self.rows
            .iter()
            .find(|r| r.row_index == row_index)
            .map(|r| r.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_both_sides() {
        let raw = UrlPair::new(3, Some(" a.com//x "), None);
        let n = NormalizedUrlPair::from_raw(&raw);
        assert_eq!(n.row_index, 3);
        assert_eq!(n.live_url, "http://a.com/x");
        assert_eq!(n.staging_url, "");
        assert!(!n.is_blank());
    }

    #[test]
    fn whitespace_only_row_is_blank() {
        let n = NormalizedUrlPair::from_raw(&UrlPair::new(0, Some("  "), Some("")));
        assert!(n.is_blank());
    }

    #[test]
    fn kind_labels_serialize_as_report_labels() {
        let json = serde_json::to_string(&MatchKind::PartialSubstring).unwrap();
        assert_eq!(json, "\"Partial - Substring\"");
        assert_eq!(MatchKind::NoMatch.to_string(), "No Match");
        assert!(MatchKind::PartialPath.is_partial());
        assert!(!MatchKind::Exact.is_partial());
    }
}
