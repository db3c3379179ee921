use tracing::{debug, instrument};
use url::Url;

use super::WordSource;
use crate::error::FetchError;

/// Client for a random-word service answering `GET {endpoint}?number=N` with a
/// JSON array of strings.
#[derive(Debug, Clone)]
pub struct RandomWordApi {
    client: reqwest::Client,
    endpoint: Url,
}

impl RandomWordApi {
    pub fn new(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

impl WordSource for RandomWordApi {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_words(&self, count: usize) -> Result<Vec<String>, FetchError> {
        let words: Vec<String> = self
            .client
            .get(self.endpoint.clone())
            .query(&[("number", count)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(received = words.len(), "fetched word batch");
        Ok(words)
    }
}
