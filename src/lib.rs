//! # vocab-quiz
//!
//! A terminal vocabulary quiz. Random words are looked up in a public
//! dictionary, turned into multiple-choice questions and graded on submit.
//! Scores can optionally go to a spreadsheet-backed leaderboard.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clap::Parser;
//! use vocab_quiz::{Args, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     vocab_quiz::run(Args::parse()).await
//! }
//! ```
//!
//! The building blocks are public as well, so a quiz can be assembled without
//! the terminal UI:
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), vocab_quiz::FetchError> {
//! use vocab_quiz::config::{QuizSettings, DEFAULT_DICTIONARY_API, DEFAULT_WORD_API};
//! use vocab_quiz::quiz::{grade, QuizBuilder};
//! use vocab_quiz::sources::{DictionaryApi, RandomWordApi};
//!
//! let client = reqwest::Client::new();
//! let builder = QuizBuilder::new(
//!     RandomWordApi::new(client.clone(), DEFAULT_WORD_API.parse().unwrap()),
//!     DictionaryApi::new(client, DEFAULT_DICTIONARY_API.parse().unwrap()),
//!     QuizSettings::default(),
//! );
//!
//! let session = builder.build().await?;
//! let result = grade(&session, &vec![Some(0); session.len()]);
//! println!("{}", result.summary());
//! # Ok(())
//! # }
//! ```

mod app;
pub mod config;
mod driver;
mod error;
pub mod leaderboard;
mod logging;
pub mod models;
pub mod players;
pub mod quiz;
pub mod sources;
pub mod terminal;
#[cfg(test)]
mod testing;
mod ui;

use tracing::info;

pub use app::{App, AppState, LeaderboardPanel, NameEntry};
pub use config::{Args, Config, Variant};
pub use error::{ConfigError, FetchError, NameError, QuizError};
pub use models::{Question, QuizSession};

/// Resolve the configuration, start logging and run the quiz in the terminal.
///
/// This takes over the terminal and returns when the player quits.
pub async fn run(args: Args) -> Result<(), QuizError> {
    let config = Config::from_args(args)?;
    logging::init_tracing(&config.log_file).map_err(QuizError::Logging)?;

    info!(
        questions = config.quiz.question_count,
        words = config.quiz.word_batch,
        leaderboard = config.leaderboard_enabled(),
        "starting quiz"
    );

    driver::run(config).await
}
