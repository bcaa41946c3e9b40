pub mod file;
pub mod http;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;

pub use file::FileDatasetProvider;
pub use http::HttpDatasetProvider;

/// Trait for candidate dataset sources
#[async_trait]
pub trait DatasetProvider: Send + Sync {
    /// Fetch the full candidate list, in source order
    async fn fetch(&self) -> Result<Vec<String>>;

    /// Get provider name for logging
    fn name(&self) -> &str;
}

/// Immutable, timestamped view of the candidate dataset.
///
/// Shared by reference among concurrent units of work; nothing mutates a
/// snapshot after construction. An empty snapshot is the explicit
/// "no data yet / source unavailable" value - there is no separate loaded
/// flag anywhere.
#[derive(Debug, Clone)]
pub struct DatasetSnapshot {
    /// Candidates in source order (the ranking tie-break order)
    pub candidates: Vec<String>,

    /// Name of the provider this snapshot came from
    pub source: String,

    /// When the snapshot was taken
    pub fetched_at: DateTime<Utc>,
}

impl DatasetSnapshot {
    pub fn new(candidates: Vec<String>, source: impl Into<String>) -> Self {
        Self {
            candidates,
            source: source.into(),
            fetched_at: Utc::now(),
        }
    }

    /// Snapshot with no candidates
    pub fn empty(source: impl Into<String>) -> Self {
        Self::new(Vec::new(), source)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Load a snapshot from a provider.
///
/// Fetch or parse failures degrade to an empty snapshot with a warning;
/// callers always get a dataset value to work with, never an error.
pub async fn load_snapshot(provider: &dyn DatasetProvider) -> Arc<DatasetSnapshot> {
    match provider.fetch().await {
        Ok(candidates) => {
            tracing::info!(
                "Loaded {} candidates from provider {}",
                candidates.len(),
                provider.name()
            );
            Arc::new(DatasetSnapshot::new(candidates, provider.name()))
        }
        Err(e) => {
            tracing::warn!(
                "Provider {} failed: {}, starting with empty dataset",
                provider.name(),
                e
            );
            Arc::new(DatasetSnapshot::empty(provider.name()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchEngineError;

    struct StaticProvider(Vec<String>);

    #[async_trait]
    impl DatasetProvider for StaticProvider {
        async fn fetch(&self) -> Result<Vec<String>> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &str {
            "static"
        }
    }

    struct BrokenProvider;

    #[async_trait]
    impl DatasetProvider for BrokenProvider {
        async fn fetch(&self) -> Result<Vec<String>> {
            Err(MatchEngineError::Dataset("source unreachable".to_string()))
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    #[tokio::test]
    async fn test_load_snapshot() {
        let provider = StaticProvider(vec!["alpha".to_string(), "beta".to_string()]);

        let snapshot = load_snapshot(&provider).await;

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.source, "static");
        assert_eq!(snapshot.candidates[0], "alpha");
    }

    #[tokio::test]
    async fn test_failed_fetch_yields_empty_snapshot() {
        let snapshot = load_snapshot(&BrokenProvider).await;

        assert!(snapshot.is_empty());
        assert_eq!(snapshot.source, "broken");
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = DatasetSnapshot::empty("none");
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
    }
}
