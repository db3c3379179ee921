//! Remote word and definition providers.

mod dictionary;
mod words;

use std::future::Future;

use crate::error::FetchError;

pub use dictionary::{first_definition, DictionaryApi};
pub use words::RandomWordApi;

/// Supplies batches of candidate words.
pub trait WordSource: Send + Sync {
    fn fetch_words(&self, count: usize) -> impl Future<Output = Result<Vec<String>, FetchError>> + Send;
}

/// Looks up the primary definition of a word.
///
/// Any failure, including a well-formed "not found" reply, is `None`.
pub trait DefinitionSource: Send + Sync {
    fn define(&self, word: &str) -> impl Future<Output = Option<String>> + Send;
}
