//! `urlmatch score <live> <staging>` – score one pair.

use urlmatch_core::matcher::calculate_similarity;
use urlmatch_core::url_model::normalize_url;

use super::warn_unusual_threshold;

pub fn run_score(live: &str, staging: &str, threshold: f64) {
    warn_unusual_threshold(threshold);
    let live = normalize_url(Some(live));
    let staging = normalize_url(Some(staging));
    let sim = calculate_similarity(&live, &staging, threshold);
    println!("live:    {live}");
    println!("staging: {staging}");
    println!("{} ({:.4})", sim.kind, sim.score);
}
