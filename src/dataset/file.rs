use std::path::PathBuf;

use async_trait::async_trait;

use crate::dataset::http::parse_lines;
use crate::dataset::DatasetProvider;
use crate::error::Result;

/// Reads the candidate dataset from a local file, one candidate per line
pub struct FileDatasetProvider {
    path: PathBuf,
}

impl FileDatasetProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetProvider for FileDatasetProvider {
    async fn fetch(&self) -> Result<Vec<String>> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        Ok(parse_lines(&body))
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::load_snapshot;

    #[tokio::test]
    async fn test_reads_lines_from_file() {
        let path = std::env::temp_dir().join("fuzzmatch_dataset_test.txt");
        std::fs::write(&path, "kitten\nsitting\n\nmitten\n").unwrap();

        let provider = FileDatasetProvider::new(&path);
        let candidates = provider.fetch().await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(candidates, ["kitten", "sitting", "mitten"]);
    }

    #[tokio::test]
    async fn test_missing_file_degrades_to_empty_snapshot() {
        let provider = FileDatasetProvider::new("/definitely/not/a/real/path.txt");

        let snapshot = load_snapshot(&provider).await;

        assert!(snapshot.is_empty());
        assert_eq!(snapshot.source, "file");
    }
}
