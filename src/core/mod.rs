pub mod query_outcome;
pub mod scored_candidate;

pub use query_outcome::QueryOutcome;
pub use scored_candidate::{RankingResult, ScoredCandidate};
