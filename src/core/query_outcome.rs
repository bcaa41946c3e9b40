use serde::{Deserialize, Serialize};

use crate::core::RankingResult;

/// Outcome of one scheduled query, delivered to the result sink.
///
/// Either the ranked matches plus the pipeline's elapsed time, or a failure
/// description. One value is produced per submission and consumed once;
/// superseded submissions produce no value at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum QueryOutcome {
    /// Ranking completed and this was still the newest submission
    Success {
        query: String,
        result: RankingResult,
    },

    /// The unit of work failed; still delivered so the caller can show a
    /// failure state instead of stale results
    Failure {
        query: String,
        error: String,
        elapsed_ms: f64,
    },
}

impl QueryOutcome {
    /// Query string this outcome belongs to
    pub fn query(&self) -> &str {
        match self {
            QueryOutcome::Success { query, .. } => query,
            QueryOutcome::Failure { query, .. } => query,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryOutcome::Success { .. })
    }

    /// Elapsed wall-clock time in milliseconds, for either outcome kind
    pub fn elapsed_ms(&self) -> f64 {
        match self {
            QueryOutcome::Success { result, .. } => result.elapsed_ms,
            QueryOutcome::Failure { elapsed_ms, .. } => *elapsed_ms,
        }
    }
}
