//! Matching stages.
//!
//! Each stage reads the normalized pairs plus the previous stage's output and
//! returns a fresh value; nothing is mutated in place across stages.

mod exact;
mod partial;
mod similarity;
mod unmatched;

pub use exact::{find_exact_matches, ExactPass};
pub use partial::{best_candidate, find_partial_matches, PartialPass};
pub use similarity::{calculate_similarity, sequence_ratio, Similarity};
pub use unmatched::{identify_unmatched, Unmatched};
