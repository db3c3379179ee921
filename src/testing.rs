//! In-memory stand-ins for the remote services, shared by the unit tests.

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use serde_json::Value;

use crate::error::FetchError;
use crate::leaderboard::ScoreBoard;
use crate::models::ScoreSubmission;
use crate::players::NameStore;
use crate::sources::{DefinitionSource, WordSource};

/// A decode error to stand in for any failed request.
pub fn fetch_error() -> FetchError {
    serde_json::from_str::<Vec<String>>("oops").unwrap_err().into()
}

pub struct FixedWords(pub Vec<&'static str>);

impl WordSource for FixedWords {
    async fn fetch_words(&self, count: usize) -> Result<Vec<String>, FetchError> {
        Ok(self.0.iter().take(count).map(|w| w.to_string()).collect())
    }
}

pub struct OfflineWords;

impl WordSource for OfflineWords {
    async fn fetch_words(&self, _count: usize) -> Result<Vec<String>, FetchError> {
        Err(fetch_error())
    }
}

#[derive(Default)]
pub struct FakeDictionary {
    entries: HashMap<&'static str, &'static str>,
    lookups: AtomicUsize,
}

impl FakeDictionary {
    pub fn with(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            entries: entries.iter().copied().collect(),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl DefinitionSource for FakeDictionary {
    async fn define(&self, word: &str) -> Option<String> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.entries.get(word).map(|d| d.to_string())
    }
}

#[derive(Default)]
pub struct MemoryStore(Mutex<Option<String>>);

impl NameStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.0.lock().unwrap().clone()
    }

    fn save(&self, name: &str) -> io::Result<()> {
        *self.0.lock().unwrap() = Some(name.to_string());
        Ok(())
    }
}

/// A scoreboard with a fixed roster and rows that records submissions.
#[derive(Default)]
pub struct FakeBoard {
    /// `None` makes the roster request fail.
    pub roster: Option<Vec<&'static str>>,
    pub rows: Vec<Vec<Value>>,
    pub reject_submissions: bool,
    pub submitted: Mutex<Vec<ScoreSubmission>>,
}

impl FakeBoard {
    pub fn with_roster(names: &[&'static str]) -> Self {
        Self {
            roster: Some(names.to_vec()),
            ..Self::default()
        }
    }

    pub fn submissions(&self) -> Vec<ScoreSubmission> {
        self.submitted.lock().unwrap().clone()
    }
}

impl ScoreBoard for FakeBoard {
    async fn roster(&self) -> Result<Vec<String>, FetchError> {
        match &self.roster {
            Some(names) => Ok(names.iter().map(|n| n.to_string()).collect()),
            None => Err(fetch_error()),
        }
    }

    async fn submit(&self, score: &ScoreSubmission) -> Result<(), FetchError> {
        if self.reject_submissions {
            return Err(fetch_error());
        }
        self.submitted.lock().unwrap().push(score.clone());
        Ok(())
    }

    async fn rows(&self) -> Result<Vec<Vec<Value>>, FetchError> {
        Ok(self.rows.clone())
    }
}
