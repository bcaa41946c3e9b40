use serde::{Deserialize, Serialize};

/// A candidate paired with its similarity score against the query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// Candidate text, exactly as it appears in the dataset
    pub text: String,

    /// Similarity score (0.0 - 100.0)
    pub score: f64,
}

impl ScoredCandidate {
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }

    /// Check whether the candidate equals the query under case folding
    pub fn is_exact(&self) -> bool {
        self.score == 100.0
    }
}

/// Ordered top-K matches for one ranking invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingResult {
    /// Matches sorted by score, highest first; equal scores keep dataset order
    pub matches: Vec<ScoredCandidate>,

    /// Scoring + selection wall-clock time in milliseconds
    pub elapsed_ms: f64,
}

impl RankingResult {
    /// Result with no matches (empty dataset)
    pub fn empty() -> Self {
        Self {
            matches: Vec::new(),
            elapsed_ms: 0.0,
        }
    }

    /// Highest-scoring match, if any
    pub fn best(&self) -> Option<&ScoredCandidate> {
        self.matches.first()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        match self.best() {
            Some(best) => format!(
                "{} - {:.1}% (+{} more, {:.2}ms)",
                best.text,
                best.score,
                self.matches.len().saturating_sub(1),
                self.elapsed_ms
            ),
            None => format!("no matches ({:.2}ms)", self.elapsed_ms),
        }
    }
}
