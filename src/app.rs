//! Session state: everything one run of the quiz knows, and the transitions
//! between its stages.

use crate::error::NameError;
use crate::models::{QuizSession, RankedRow, ScoreSubmission};
use crate::players::{validate_name, NameResolution, NAME_MIN_LENGTH};
use crate::quiz::view::{question_views, result_view, QuestionView, ResultView};
use crate::quiz::{grade, Grade};

const NAME_MAX_LENGTH: usize = 24;

/// How the player supplies a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameEntry {
    Select { roster: Vec<String>, cursor: usize },
    FreeText { input: String },
}

/// Where the session is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    Idle,
    /// Waiting for the saved name and the roster.
    NameResolving,
    NameEntry {
        entry: NameEntry,
        error: Option<String>,
    },
    /// Fetching words and definitions.
    Building,
    /// No word with a usable definition was found.
    Empty,
    QuizReady,
    Graded,
    Failed { message: String },
}

impl AppState {
    /// Only quitting leaves these states.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Empty | Self::Graded | Self::Failed { .. })
    }
}

/// Status of the leaderboard panel, independent of the quiz stages.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LeaderboardPanel {
    #[default]
    Hidden,
    Loading,
    Submitting,
    Shown(Vec<RankedRow>),
    Failed(String),
}

pub struct App {
    pub state: AppState,
    pub leaderboard: LeaderboardPanel,
    pub should_quit: bool,
    player: Option<String>,
    leaderboard_enabled: bool,
    session: QuizSession,
    selections: Vec<Option<usize>>,
    current_question: usize,
    cursor: usize,
    grade: Option<Grade>,
    result_scroll: usize,
    leaderboard_request: u64,
}

impl App {
    pub fn new(leaderboard_enabled: bool) -> Self {
        Self {
            state: AppState::Idle,
            leaderboard: LeaderboardPanel::Hidden,
            should_quit: false,
            player: None,
            leaderboard_enabled,
            session: QuizSession::default(),
            selections: Vec::new(),
            current_question: 0,
            cursor: 0,
            grade: None,
            result_scroll: 0,
            leaderboard_request: 0,
        }
    }

    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }

    pub fn leaderboard_enabled(&self) -> bool {
        self.leaderboard_enabled
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn grade(&self) -> Option<&Grade> {
        self.grade.as_ref()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    // Name resolution

    pub fn begin_name_resolution(&mut self) {
        self.state = AppState::NameResolving;
    }

    /// Apply a resolution. Returns true when the quiz can be built right away.
    pub fn apply_resolution(&mut self, resolution: NameResolution) -> bool {
        let entry = match resolution {
            NameResolution::AutoStart(name) => {
                self.player = Some(name);
                self.begin_building();
                return true;
            }
            NameResolution::Select(roster) => NameEntry::Select { roster, cursor: 0 },
            NameResolution::FreeText => NameEntry::FreeText {
                input: String::new(),
            },
        };

        self.state = AppState::NameEntry { entry, error: None };
        false
    }

    pub fn name_input_push(&mut self, c: char) {
        if let AppState::NameEntry {
            entry: NameEntry::FreeText { input },
            error,
        } = &mut self.state
        {
            if input.chars().count() < NAME_MAX_LENGTH {
                input.push(c);
            }
            *error = None;
        }
    }

    pub fn name_input_pop(&mut self) {
        if let AppState::NameEntry {
            entry: NameEntry::FreeText { input },
            error,
        } = &mut self.state
        {
            input.pop();
            *error = None;
        }
    }

    pub fn name_input_is_empty(&self) -> bool {
        match &self.state {
            AppState::NameEntry {
                entry: NameEntry::FreeText { input },
                ..
            } => input.is_empty(),
            _ => true,
        }
    }

    pub fn select_next_name(&mut self) {
        if let AppState::NameEntry {
            entry: NameEntry::Select { roster, cursor },
            ..
        } = &mut self.state
        {
            if !roster.is_empty() {
                *cursor = (*cursor + 1) % roster.len();
            }
        }
    }

    pub fn select_previous_name(&mut self) {
        if let AppState::NameEntry {
            entry: NameEntry::Select { roster, cursor },
            ..
        } = &mut self.state
        {
            if !roster.is_empty() {
                *cursor = (*cursor + roster.len() - 1) % roster.len();
            }
        }
    }

    /// Validate the typed or selected name. On success the player is set and the
    /// session moves on to building; the caller persists the name and starts the
    /// build.
    pub fn confirm_name(&mut self) -> Result<String, NameError> {
        let AppState::NameEntry { entry, error } = &mut self.state else {
            return Err(NameError::TooShort);
        };

        let raw = match entry {
            NameEntry::FreeText { input } => input.as_str(),
            NameEntry::Select { roster, cursor } => {
                roster.get(*cursor).map(String::as_str).unwrap_or_default()
            }
        };

        match validate_name(raw) {
            Ok(name) => {
                self.player = Some(name.clone());
                self.begin_building();
                Ok(name)
            }
            Err(err) => {
                *error = Some(err.to_string());
                Err(err)
            }
        }
    }

    // Quiz

    pub fn begin_building(&mut self) {
        self.state = AppState::Building;
    }

    /// Install a freshly built quiz, replacing any previous one.
    pub fn load_session(&mut self, session: QuizSession) {
        self.selections = vec![None; session.len()];
        self.current_question = 0;
        self.cursor = 0;
        self.grade = None;
        self.result_scroll = 0;

        self.state = if session.is_empty() {
            AppState::Empty
        } else {
            AppState::QuizReady
        };
        self.session = session;
    }

    pub fn fail(&mut self, message: String) {
        self.state = AppState::Failed { message };
    }

    pub fn current_question(&self) -> usize {
        self.current_question
    }

    pub fn selections(&self) -> &[Option<usize>] {
        &self.selections
    }

    pub fn answered_count(&self) -> usize {
        self.selections.iter().filter(|s| s.is_some()).count()
    }

    pub fn question_views(&self) -> Vec<QuestionView<'_>> {
        let cursor = matches!(self.state, AppState::QuizReady)
            .then_some((self.current_question, self.cursor));
        question_views(&self.session, &self.selections, cursor)
    }

    pub fn result_view(&self) -> Option<ResultView<'_>> {
        self.grade
            .as_ref()
            .map(|grade| result_view(&self.session, grade))
    }

    fn option_count(&self) -> usize {
        self.session
            .questions()
            .get(self.current_question)
            .map_or(0, |q| q.options.len())
    }

    pub fn next_question(&mut self) {
        if self.state == AppState::QuizReady && self.current_question + 1 < self.session.len() {
            self.current_question += 1;
            self.cursor = self.selections[self.current_question].unwrap_or(0);
        }
    }

    pub fn previous_question(&mut self) {
        if self.state == AppState::QuizReady && self.current_question > 0 {
            self.current_question -= 1;
            self.cursor = self.selections[self.current_question].unwrap_or(0);
        }
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if self.state == AppState::QuizReady && count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if self.state == AppState::QuizReady && count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    /// Check the option under the cursor. Options within a question are
    /// exclusive, so this replaces any earlier choice.
    pub fn check_option(&mut self) {
        if self.state == AppState::QuizReady && self.cursor < self.option_count() {
            self.selections[self.current_question] = Some(self.cursor);
        }
    }

    /// Grade the quiz once. Returns the score to post when a leaderboard is
    /// configured and a valid player name is set.
    pub fn submit(&mut self) -> Option<ScoreSubmission> {
        if self.state != AppState::QuizReady {
            return None;
        }

        let grade = grade(&self.session, &self.selections);
        let submission = self
            .player
            .as_ref()
            .filter(|name| self.leaderboard_enabled && name.chars().count() >= NAME_MIN_LENGTH)
            .map(|name| ScoreSubmission {
                name: name.clone(),
                correct: grade.score,
                total: grade.total,
            });

        self.grade = Some(grade);
        self.result_scroll = 0;
        self.state = AppState::Graded;
        submission
    }

    pub fn scroll_results_down(&mut self) {
        if let Some(grade) = &self.grade {
            let max_scroll = grade.verdicts.len().saturating_sub(1);
            self.result_scroll = (self.result_scroll + 1).min(max_scroll);
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    // Leaderboard
    //
    // Each request takes a new ticket; replies carrying an older ticket are
    // dropped.

    pub fn leaderboard_loading(&mut self) -> u64 {
        self.leaderboard = LeaderboardPanel::Loading;
        self.next_leaderboard_request()
    }

    pub fn leaderboard_submitting(&mut self) -> u64 {
        self.leaderboard = LeaderboardPanel::Submitting;
        self.next_leaderboard_request()
    }

    pub fn show_leaderboard(&mut self, ticket: u64, rows: Vec<RankedRow>) {
        if ticket == self.leaderboard_request {
            self.leaderboard = LeaderboardPanel::Shown(rows);
        }
    }

    pub fn leaderboard_failed(&mut self, ticket: u64, message: String) {
        if ticket == self.leaderboard_request {
            self.leaderboard = LeaderboardPanel::Failed(message);
        }
    }

    fn next_leaderboard_request(&mut self) -> u64 {
        self.leaderboard_request += 1;
        self.leaderboard_request
    }
}
