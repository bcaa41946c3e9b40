use std::sync::Arc;
use std::time::Instant;

use crate::core::{RankingResult, ScoredCandidate};
use crate::distance::{similarity_with, DistanceKernel, RollingKernel};
use crate::error::Result;

/// Default number of matches returned by the pipeline
pub const DEFAULT_TOP_K: usize = 10;

/// Scores a query against a candidate dataset and selects the top K.
///
/// The kernel is pluggable; the pipeline itself never looks past the
/// [`DistanceKernel`] trait.
pub struct RankingPipeline {
    kernel: Arc<dyn DistanceKernel>,
}

impl RankingPipeline {
    pub fn new(kernel: Arc<dyn DistanceKernel>) -> Self {
        Self { kernel }
    }

    /// Kernel name for logging
    pub fn kernel_name(&self) -> &str {
        self.kernel.name()
    }

    /// Rank `candidates` against `query`, returning at most `k` matches
    /// sorted by score, highest first. Equal scores keep dataset order.
    ///
    /// An empty dataset yields an empty result; an empty query scores every
    /// candidate 0.0 but still ranks and truncates. Kernel failures
    /// (oversized operands) abort the whole invocation.
    pub fn rank(&self, query: &str, candidates: &[String], k: usize) -> Result<RankingResult> {
        let start = Instant::now();

        let mut matches = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let score = similarity_with(self.kernel.as_ref(), query, candidate)?;
            matches.push(ScoredCandidate::new(candidate.clone(), score));
        }

        // Vec::sort_by is stable: ties keep their dataset order
        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        matches.truncate(k);

        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        tracing::debug!(
            "Ranked {} candidates with {} in {:.2}ms, kept {}",
            candidates.len(),
            self.kernel.name(),
            elapsed_ms,
            matches.len()
        );

        Ok(RankingResult { matches, elapsed_ms })
    }
}

impl Default for RankingPipeline {
    fn default() -> Self {
        Self::new(Arc::new(RollingKernel::new()))
    }
}
