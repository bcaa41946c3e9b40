use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::dataset::DatasetProvider;
use crate::error::{MatchEngineError, Result};

/// Fetches the candidate dataset from a remote endpoint.
///
/// Accepts either a JSON array of strings or a plain-text body with one
/// candidate per line.
pub struct HttpDatasetProvider {
    client: Client,
    url: String,
}

impl HttpDatasetProvider {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl DatasetProvider for HttpDatasetProvider {
    async fn fetch(&self) -> Result<Vec<String>> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(MatchEngineError::Dataset(format!(
                "HTTP {} from {}",
                response.status(),
                self.url
            )));
        }

        let body = response.text().await?;

        // JSON array first, plain lines as the fallback format
        if let Ok(candidates) = serde_json::from_str::<Vec<String>>(&body) {
            return Ok(candidates);
        }

        Ok(parse_lines(&body))
    }

    fn name(&self) -> &str {
        "http"
    }
}

pub(crate) fn parse_lines(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
