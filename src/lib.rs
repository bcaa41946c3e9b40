//! # FuzzMatch Engine
//!
//! Fuzzy string matching engine with:
//! - Edit-distance scoring behind interchangeable kernels (full-table,
//!   rolling, rapidfuzz)
//! - Normalized 0-100 similarity scores
//! - Top-K ranking with a stable tie-break on dataset order
//! - Last-query-wins scheduling: rapid successive submissions supersede
//!   each other and only the newest outcome is ever delivered
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use fuzzmatch_engine::{DatasetSnapshot, QueryScheduler, RankingPipeline, DEFAULT_TOP_K};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pipeline = Arc::new(RankingPipeline::default());
//!     let (scheduler, mut outcomes) = QueryScheduler::new(pipeline, DEFAULT_TOP_K);
//!
//!     let dataset = Arc::new(DatasetSnapshot::new(
//!         vec!["kitten".into(), "sitting".into(), "mitten".into()],
//!         "inline",
//!     ));
//!
//!     scheduler.submit("kitten", dataset);
//!
//!     if let Some(outcome) = outcomes.recv().await {
//!         println!("{:?}", outcome);
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod dataset;
pub mod distance;
pub mod error;
pub mod ranking;
pub mod scheduler;

// Re-export primary types
pub use core::{QueryOutcome, RankingResult, ScoredCandidate};
pub use dataset::{DatasetProvider, DatasetSnapshot, FileDatasetProvider, HttpDatasetProvider};
pub use distance::{
    distance, kernel_by_name, similarity, similarity_with, DistanceKernel, FullTableKernel,
    RapidfuzzKernel, RollingKernel, MAX_INPUT_LEN,
};
pub use error::{MatchEngineError, Result};
pub use ranking::{RankingPipeline, DEFAULT_TOP_K};
pub use scheduler::{QueryHandle, QueryScheduler};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
