//! Command line arguments and the resolved quiz configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_WORD_API: &str = "https://random-word-api.herokuapp.com/word";
pub const DEFAULT_DICTIONARY_API: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
pub const DEFAULT_SHEET_URL: &str = "https://script.google.com/macros/s/AKfycbwCt-8WgjGZg8G2e1HEMgWpARp4M7BxDh0VedNFJUUtgp3Doarsa-jrO6yCUV_Paz_Q/exec";
pub const DEFAULT_NAME_FILE: &str = ".quiz_player_name";
pub const DEFAULT_LOG_FILE: &str = "vocab-quiz.log";

/// Quiz presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// 4 questions drawn from 10 words.
    Classic,
    /// 10 questions drawn from 30 words of at least 5 letters.
    Filtered,
    /// 6 questions drawn from 30 words, with player names and a leaderboard.
    Ranked,
}

impl Variant {
    fn question_count(self) -> usize {
        match self {
            Variant::Classic => 4,
            Variant::Filtered => 10,
            Variant::Ranked => 6,
        }
    }

    fn word_batch(self) -> usize {
        match self {
            Variant::Classic => 10,
            Variant::Filtered | Variant::Ranked => 30,
        }
    }

    fn min_word_length(self) -> Option<usize> {
        match self {
            Variant::Filtered => Some(5),
            Variant::Classic | Variant::Ranked => None,
        }
    }

    fn has_leaderboard(self) -> bool {
        matches!(self, Variant::Ranked)
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Multiple-choice vocabulary quiz in the terminal", long_about = None)]
pub struct Args {
    /// Quiz preset
    #[arg(short, long, value_enum, default_value_t = Variant::Ranked)]
    pub variant: Variant,

    /// Number of questions (overrides the preset)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(4..=10))]
    pub questions: Option<u8>,

    /// Number of random words to draw (overrides the preset)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(10..=30))]
    pub words: Option<u8>,

    /// Skip words shorter than this (overrides the preset)
    #[arg(long)]
    pub min_word_length: Option<usize>,

    /// Definition lookups in flight at once
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=8))]
    pub concurrency: u8,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    #[arg(long, default_value = DEFAULT_WORD_API)]
    pub word_api: String,

    #[arg(long, default_value = DEFAULT_DICTIONARY_API)]
    pub dictionary_api: String,

    /// Spreadsheet endpoint for the roster and leaderboard
    #[arg(long)]
    pub sheet_url: Option<String>,

    /// Disable player names and the leaderboard
    #[arg(long)]
    pub no_leaderboard: bool,

    /// File holding the last used player name
    #[arg(long, default_value = DEFAULT_NAME_FILE)]
    pub name_file: PathBuf,

    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

/// Settings for assembling one quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    pub question_count: usize,
    pub word_batch: usize,
    pub min_word_length: Option<usize>,
    pub concurrency: usize,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            question_count: Variant::Ranked.question_count(),
            word_batch: Variant::Ranked.word_batch(),
            min_word_length: None,
            concurrency: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub quiz: QuizSettings,
    pub word_api: Url,
    pub dictionary_api: Url,
    /// `None` when names and the leaderboard are disabled.
    pub sheet_url: Option<Url>,
    pub timeout: Duration,
    pub name_file: PathBuf,
    pub log_file: PathBuf,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let variant = args.variant;

        let quiz = QuizSettings {
            question_count: args
                .questions
                .map(usize::from)
                .unwrap_or_else(|| variant.question_count()),
            word_batch: args
                .words
                .map(usize::from)
                .unwrap_or_else(|| variant.word_batch()),
            min_word_length: args.min_word_length.or(variant.min_word_length()),
            concurrency: usize::from(args.concurrency),
        };

        let sheet_url = if args.no_leaderboard {
            None
        } else {
            match args.sheet_url {
                Some(raw) => Some(parse_url("sheet", &raw)?),
                None if variant.has_leaderboard() => Some(parse_url("sheet", DEFAULT_SHEET_URL)?),
                None => None,
            }
        };

        Ok(Self {
            quiz,
            word_api: parse_url("word api", &args.word_api)?,
            dictionary_api: parse_url("dictionary api", &args.dictionary_api)?,
            sheet_url,
            timeout: Duration::from_secs(args.timeout_secs),
            name_file: args.name_file,
            log_file: args.log_file,
        })
    }

    pub fn leaderboard_enabled(&self) -> bool {
        self.sheet_url.is_some()
    }
}

fn parse_url(name: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
        name,
        value: value.to_string(),
        source,
    })
}
