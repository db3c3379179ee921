//! Quiz assembly: pick words, find their definitions, build the options.

use std::pin::pin;

use futures_util::{stream, StreamExt};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

use crate::config::QuizSettings;
use crate::error::FetchError;
use crate::models::{Question, QuizSession};
use crate::sources::{DefinitionSource, WordSource};

/// Options per question, the correct one included.
pub const MAX_OPTIONS: usize = 4;

/// A word accepted into the quiz together with its definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDefinition {
    pub word: String,
    pub definition: String,
}

pub struct QuizBuilder<W, D> {
    words: W,
    dictionary: D,
    settings: QuizSettings,
}

impl<W: WordSource, D: DefinitionSource> QuizBuilder<W, D> {
    pub fn new(words: W, dictionary: D, settings: QuizSettings) -> Self {
        Self {
            words,
            dictionary,
            settings,
        }
    }

    /// Build a fresh quiz. An empty session means no usable word was found.
    pub async fn build(&self) -> Result<QuizSession, FetchError> {
        let pairs = self.collect_pairs().await?;
        let mut rng = StdRng::from_entropy();
        Ok(assemble(pairs, &mut rng))
    }

    /// Draw one batch of words and keep the first `question_count` that have a
    /// definition, in word order.
    #[instrument(skip(self), fields(target = self.settings.question_count))]
    pub async fn collect_pairs(&self) -> Result<Vec<WordDefinition>, FetchError> {
        let target = self.settings.question_count;
        let words = self.words.fetch_words(self.settings.word_batch).await?;

        let candidates: Vec<String> = words
            .into_iter()
            .filter(|word| self.accepts(word))
            .collect();
        debug!(candidates = candidates.len(), "filtered word batch");

        let dictionary = &self.dictionary;
        let mut lookups = pin!(
            stream::iter(candidates)
                .map(move |word| async move {
                    let definition = dictionary.define(&word).await;
                    (word, definition)
                })
                .buffered(self.settings.concurrency.max(1))
        );

        let mut pairs = Vec::with_capacity(target);
        while pairs.len() < target {
            let Some((word, definition)) = lookups.next().await else {
                break;
            };
            match definition {
                Some(definition) => pairs.push(WordDefinition { word, definition }),
                None => debug!(%word, "skipping word without a definition"),
            }
        }

        info!(found = pairs.len(), "collected definitions");
        Ok(pairs)
    }

    fn accepts(&self, word: &str) -> bool {
        let word = word.trim();
        !word.is_empty()
            && self
                .settings
                .min_word_length
                .map_or(true, |min| word.chars().count() >= min)
    }
}

/// Turn accepted pairs into questions.
///
/// Distractors are drawn without repetition from the other distinct definitions, so
/// a question gets fewer than [`MAX_OPTIONS`] options when fewer than three exist.
/// Option order is a uniform Fisher–Yates shuffle.
pub fn assemble<R: Rng + ?Sized>(pairs: Vec<WordDefinition>, rng: &mut R) -> QuizSession {
    let mut distinct: Vec<&str> = Vec::with_capacity(pairs.len());
    for pair in &pairs {
        if !distinct.contains(&pair.definition.as_str()) {
            distinct.push(&pair.definition);
        }
    }

    let questions = pairs
        .iter()
        .map(|pair| {
            let pool: Vec<&str> = distinct
                .iter()
                .copied()
                .filter(|candidate| *candidate != pair.definition)
                .collect();

            let mut options = Vec::with_capacity(MAX_OPTIONS);
            options.push(pair.definition.clone());
            options.extend(
                pool.choose_multiple(rng, MAX_OPTIONS - 1)
                    .map(|distractor| distractor.to_string()),
            );
            options.shuffle(rng);

            Question {
                word: pair.word.clone(),
                definition: pair.definition.clone(),
                options,
            }
        })
        .collect();

    QuizSession::new(questions)
}
