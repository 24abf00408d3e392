//! CLI command handlers, one per file.

mod match_csv;
mod normalize;
mod score;

pub use match_csv::run_match;
pub use normalize::run_normalize;
pub use score::run_score;

/// Logs a warning for thresholds outside `[0, 1]`. The value is still used.
pub(crate) fn warn_unusual_threshold(threshold: f64) {
    if !(0.0..=1.0).contains(&threshold) {
        tracing::warn!(
            "similarity threshold {} is outside [0, 1]; partial matching may behave unexpectedly",
            threshold
        );
    }
}
