//! Error types for the quiz.

use std::io;

use thiserror::Error;

/// A request to one of the remote services failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected reply: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A command line value could not be turned into a usable configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name} url '{value}': {source}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
}

/// A player name was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Please enter or select your name!")]
    TooShort,
}

/// Top-level error returned by [`crate::run`].
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to set up logging: {0}")]
    Logging(#[source] io::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
