use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::core::QueryOutcome;
use crate::dataset::DatasetSnapshot;
use crate::error::MatchEngineError;
use crate::ranking::RankingPipeline;

/// Dispatches ranking work off the caller's context with last-query-wins
/// delivery.
///
/// Every [`submit`] starts an independent unit of work immediately - there
/// is no blocking between submissions. When a unit completes, its outcome is
/// sent into the channel only if no newer submission has been issued since;
/// superseded outcomes are dropped silently. Superseded work is not
/// interrupted, it runs to completion and loses at the delivery gate.
///
/// The consumer drains the receiving end on whatever execution context it
/// owns, which keeps the scheduler independent of any presentation-side
/// threading model.
///
/// [`submit`]: QueryScheduler::submit
pub struct QueryScheduler {
    pipeline: Arc<RankingPipeline>,
    top_k: usize,
    latest: Arc<AtomicU64>,
    sink: mpsc::UnboundedSender<QueryOutcome>,
}

/// Handle for one submission
pub struct QueryHandle {
    /// Submission id; newer submissions get strictly larger ids
    pub id: u64,
    task: JoinHandle<()>,
}

impl QueryHandle {
    /// Wait until the unit of work has finished (delivered or discarded).
    /// Mostly useful for tests and orderly shutdown.
    pub async fn finished(self) {
        let _ = self.task.await;
    }
}

impl QueryScheduler {
    /// Create a scheduler together with the receiving end of its outcome
    /// channel
    pub fn new(
        pipeline: Arc<RankingPipeline>,
        top_k: usize,
    ) -> (Self, mpsc::UnboundedReceiver<QueryOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::with_sink(pipeline, top_k, tx), rx)
    }

    /// Create a scheduler delivering into a caller-owned channel
    pub fn with_sink(
        pipeline: Arc<RankingPipeline>,
        top_k: usize,
        sink: mpsc::UnboundedSender<QueryOutcome>,
    ) -> Self {
        Self {
            pipeline,
            top_k,
            latest: Arc::new(AtomicU64::new(0)),
            sink,
        }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Submit a query against a dataset snapshot.
    ///
    /// Returns immediately. The scoring runs on the blocking pool; the
    /// outcome (success or failure) is delivered through the channel unless
    /// a newer submission supersedes it first. Failures inside the unit of
    /// work - including panics - become [`QueryOutcome::Failure`] and never
    /// take the scheduler down.
    pub fn submit(&self, query: impl Into<String>, dataset: Arc<DatasetSnapshot>) -> QueryHandle {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let query = query.into();
        let pipeline = Arc::clone(&self.pipeline);
        let latest = Arc::clone(&self.latest);
        let sink = self.sink.clone();
        let top_k = self.top_k;

        let task = tokio::spawn(async move {
            let start = Instant::now();

            let q = query.clone();
            let computed = tokio::task::spawn_blocking(move || {
                pipeline.rank(&q, &dataset.candidates, top_k)
            })
            .await;

            let outcome = match computed {
                Ok(Ok(result)) => QueryOutcome::Success { query, result },
                Ok(Err(e)) => QueryOutcome::Failure {
                    query,
                    error: e.to_string(),
                    elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
                },
                // The unit of work panicked; report it, scheduler stays up
                Err(e) => QueryOutcome::Failure {
                    query,
                    error: MatchEngineError::ComputationFailed(e.to_string()).to_string(),
                    elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
                },
            };

            if latest.load(Ordering::SeqCst) == id {
                if sink.send(outcome).is_err() {
                    tracing::debug!("Outcome receiver dropped, discarding submission {}", id);
                }
            } else {
                tracing::debug!("Submission {} superseded, discarding outcome", id);
            }
        });

        QueryHandle { id, task }
    }
}
