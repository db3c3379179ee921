use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, instrument};
use url::Url;

use crate::error::FetchError;
use crate::models::{cell_text, ScoreSubmission};

/// Remote store for player names and scores.
pub trait ScoreBoard: Send + Sync {
    /// Known player names.
    fn roster(&self) -> impl Future<Output = Result<Vec<String>, FetchError>> + Send;

    /// Record one finished quiz. The reply body is ignored.
    fn submit(&self, score: &ScoreSubmission) -> impl Future<Output = Result<(), FetchError>> + Send;

    /// Raw leaderboard rows, header first.
    fn rows(&self) -> impl Future<Output = Result<Vec<Vec<Value>>, FetchError>> + Send;
}

/// Client for the spreadsheet script endpoint.
///
/// `GET` answers the roster, `GET ?action=leaderboard` the score rows and
/// `POST ?name=..&correct=..&total=..` appends a score.
#[derive(Debug, Clone)]
pub struct SheetClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl SheetClient {
    pub fn new(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    async fn get_json<T: DeserializeOwned>(&self, query: &[(&str, &str)]) -> Result<T, FetchError> {
        let body = self
            .client
            .get(self.endpoint.clone())
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }
}

impl ScoreBoard for SheetClient {
    #[instrument(skip(self))]
    async fn roster(&self) -> Result<Vec<String>, FetchError> {
        let names: Vec<Value> = self.get_json(&[]).await?;
        let names: Vec<String> = names
            .iter()
            .map(|name| cell_text(Some(name)))
            .filter(|name| !name.trim().is_empty())
            .collect();

        debug!(count = names.len(), "fetched roster");
        Ok(names)
    }

    #[instrument(skip(self))]
    async fn submit(&self, score: &ScoreSubmission) -> Result<(), FetchError> {
        self.client
            .post(self.endpoint.clone())
            .query(score)
            .send()
            .await?
            .error_for_status()?;

        info!("score submitted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn rows(&self) -> Result<Vec<Vec<Value>>, FetchError> {
        let rows: Vec<Vec<Value>> = self.get_json(&[("action", "leaderboard")]).await?;
        debug!(count = rows.len(), "fetched leaderboard rows");
        Ok(rows)
    }
}
