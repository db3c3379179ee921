//! Background network tasks and the terminal event loop.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::app::{App, AppState, NameEntry};
use crate::config::Config;
use crate::error::{ConfigError, QuizError};
use crate::leaderboard::{rank_rows, ScoreBoard, SheetClient};
use crate::models::ScoreSubmission;
use crate::players::{resolve_player, FileNameStore, NameStore};
use crate::quiz::QuizBuilder;
use crate::sources::{DefinitionSource, DictionaryApi, RandomWordApi, WordSource};
use crate::terminal;
use crate::ui;

/// Session state shared between the UI loop and the background tasks.
type SharedApp = Arc<Mutex<App>>;

/// The remote and local services one session talks to.
pub struct Services<W, D, B, S> {
    builder: QuizBuilder<W, D>,
    board: Option<B>,
    names: S,
}

impl Services<RandomWordApi, DictionaryApi, SheetClient, FileNameStore> {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ConfigError::Client)?;

        Ok(Self::new(
            QuizBuilder::new(
                RandomWordApi::new(client.clone(), config.word_api.clone()),
                DictionaryApi::new(client.clone(), config.dictionary_api.clone()),
                config.quiz.clone(),
            ),
            config
                .sheet_url
                .clone()
                .map(|url| SheetClient::new(client, url)),
            FileNameStore::new(config.name_file.clone()),
        ))
    }
}

impl<W, D, B, S> Services<W, D, B, S>
where
    W: WordSource + 'static,
    D: DefinitionSource + 'static,
    B: ScoreBoard + 'static,
    S: NameStore + 'static,
{
    pub fn new(builder: QuizBuilder<W, D>, board: Option<B>, names: S) -> Self {
        Self {
            builder,
            board,
            names,
        }
    }
}

/// Run one quiz session until the player quits.
pub async fn run(config: Config) -> Result<(), QuizError> {
    let services = Arc::new(Services::from_config(&config)?);
    let app = Arc::new(Mutex::new(App::new(config.leaderboard_enabled())));

    start(&app, &services).await;
    run_tui(app, services).await
}

/// Kick off the first background work: name resolution and the leaderboard
/// when a board is configured, the quiz build otherwise.
async fn start<W, D, B, S>(app: &SharedApp, services: &Arc<Services<W, D, B, S>>) -> Vec<JoinHandle<()>>
where
    W: WordSource + 'static,
    D: DefinitionSource + 'static,
    B: ScoreBoard + 'static,
    S: NameStore + 'static,
{
    let mut app_guard = app.lock().await;
    if services.board.is_some() {
        app_guard.begin_name_resolution();
        let ticket = app_guard.leaderboard_loading();
        drop(app_guard);
        vec![
            spawn_name_resolution(Arc::clone(app), Arc::clone(services)),
            spawn_leaderboard_refresh(Arc::clone(app), Arc::clone(services), ticket),
        ]
    } else {
        app_guard.begin_building();
        drop(app_guard);
        vec![spawn_build(Arc::clone(app), Arc::clone(services))]
    }
}

fn spawn_name_resolution<W, D, B, S>(app: SharedApp, services: Arc<Services<W, D, B, S>>) -> JoinHandle<()>
where
    W: WordSource + 'static,
    D: DefinitionSource + 'static,
    B: ScoreBoard + 'static,
    S: NameStore + 'static,
{
    tokio::spawn(async move {
        let Some(board) = &services.board else {
            return;
        };

        let resolution = resolve_player(&services.names, board).await;
        let auto_start = app.lock().await.apply_resolution(resolution);
        if auto_start {
            let build = spawn_build(app, Arc::clone(&services));
            if let Err(err) = build.await {
                error!(error = %err, "quiz build task failed");
            }
        }
    })
}

fn spawn_build<W, D, B, S>(app: SharedApp, services: Arc<Services<W, D, B, S>>) -> JoinHandle<()>
where
    W: WordSource + 'static,
    D: DefinitionSource + 'static,
    B: ScoreBoard + 'static,
    S: NameStore + 'static,
{
    tokio::spawn(async move {
        let result = services.builder.build().await;

        let mut app = app.lock().await;
        match result {
            Ok(session) => {
                info!(questions = session.len(), "quiz ready");
                app.load_session(session);
            }
            Err(err) => {
                error!(error = %err, "failed to build quiz");
                app.fail(format!("Could not fetch words: {}", err));
            }
        }
    })
}

fn spawn_leaderboard_refresh<W, D, B, S>(
    app: SharedApp,
    services: Arc<Services<W, D, B, S>>,
    ticket: u64,
) -> JoinHandle<()>
where
    W: WordSource + 'static,
    D: DefinitionSource + 'static,
    B: ScoreBoard + 'static,
    S: NameStore + 'static,
{
    tokio::spawn(async move {
        if let Some(board) = &services.board {
            fetch_leaderboard(&app, board, ticket).await;
        }
    })
}

/// Post the score, then reload the ranking. `ticket` comes from
/// [`App::leaderboard_submitting`].
fn spawn_score_submission<W, D, B, S>(
    app: SharedApp,
    services: Arc<Services<W, D, B, S>>,
    submission: ScoreSubmission,
    ticket: u64,
) -> JoinHandle<()>
where
    W: WordSource + 'static,
    D: DefinitionSource + 'static,
    B: ScoreBoard + 'static,
    S: NameStore + 'static,
{
    tokio::spawn(async move {
        let Some(board) = &services.board else {
            return;
        };

        if let Err(err) = board.submit(&submission).await {
            warn!(error = %err, "failed to submit score");
            app.lock()
                .await
                .leaderboard_failed(ticket, format!("Could not submit score: {}", err));
            return;
        }

        let ticket = app.lock().await.leaderboard_loading();
        fetch_leaderboard(&app, board, ticket).await;
    })
}

async fn fetch_leaderboard<B: ScoreBoard>(app: &SharedApp, board: &B, ticket: u64) {
    match board.rows().await {
        Ok(rows) => {
            let ranked = rank_rows(rows);
            app.lock().await.show_leaderboard(ticket, ranked);
        }
        Err(err) => {
            warn!(error = %err, "failed to fetch leaderboard");
            app.lock()
                .await
                .leaderboard_failed(ticket, format!("Could not load leaderboard: {}", err));
        }
    }
}

type LiveServices = Services<RandomWordApi, DictionaryApi, SheetClient, FileNameStore>;

async fn run_tui(app: SharedApp, services: Arc<LiveServices>) -> Result<(), QuizError> {
    let mut guard = terminal::init()?;

    loop {
        {
            let app = app.lock().await;
            if app.should_quit {
                break;
            }
            guard.terminal().draw(|frame| ui::render(frame, &app))?;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if handle_input(&app, &services, key.code).await {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
async fn handle_input<W, D, B, S>(shared: &SharedApp, services: &Arc<Services<W, D, B, S>>, key: KeyCode) -> bool
where
    W: WordSource + 'static,
    D: DefinitionSource + 'static,
    B: ScoreBoard + 'static,
    S: NameStore + 'static,
{
    let mut app = shared.lock().await;

    match &app.state {
        AppState::NameEntry {
            entry: NameEntry::FreeText { .. },
            ..
        } => match key {
            KeyCode::Esc => app.should_quit = true,
            KeyCode::Char(c) => app.name_input_push(c),
            KeyCode::Backspace => app.name_input_pop(),
            KeyCode::Enter => {
                confirm_name(&mut app, shared, services);
            }
            _ => {}
        },
        AppState::NameEntry {
            entry: NameEntry::Select { .. },
            ..
        } => match key {
            KeyCode::Up | KeyCode::Char('k') => app.select_previous_name(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next_name(),
            KeyCode::Enter => {
                confirm_name(&mut app, shared, services);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.should_quit = true,
            _ => {}
        },
        AppState::QuizReady => match key {
            KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.previous_question(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.next_question(),
            KeyCode::Enter | KeyCode::Char(' ') => app.check_option(),
            KeyCode::Char('s') | KeyCode::Char('S') => {
                submit_quiz(&mut app, shared, services);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
            _ => {}
        },
        AppState::Graded => match key {
            KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.should_quit = true,
            _ => {}
        },
        AppState::Idle
        | AppState::NameResolving
        | AppState::Building
        | AppState::Empty
        | AppState::Failed { .. } => {
            if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc | KeyCode::Enter)
                && (app.state.is_terminal() || key != KeyCode::Enter)
            {
                app.should_quit = true;
            }
        }
    }

    app.should_quit
}

/// Accept the entered or selected name, remember it and start building.
fn confirm_name<W, D, B, S>(
    app: &mut App,
    shared: &SharedApp,
    services: &Arc<Services<W, D, B, S>>,
) -> Option<JoinHandle<()>>
where
    W: WordSource + 'static,
    D: DefinitionSource + 'static,
    B: ScoreBoard + 'static,
    S: NameStore + 'static,
{
    let name = app.confirm_name().ok()?;

    if let Err(err) = services.names.save(&name) {
        warn!(error = %err, "failed to save player name");
    }
    Some(spawn_build(Arc::clone(shared), Arc::clone(services)))
}

/// Grade the quiz and post the score when there is somewhere to post it.
fn submit_quiz<W, D, B, S>(
    app: &mut App,
    shared: &SharedApp,
    services: &Arc<Services<W, D, B, S>>,
) -> Option<JoinHandle<()>>
where
    W: WordSource + 'static,
    D: DefinitionSource + 'static,
    B: ScoreBoard + 'static,
    S: NameStore + 'static,
{
    let submission = app.submit();
    if let Some(grade) = app.grade() {
        info!(score = grade.score, total = grade.total, "quiz graded");
    }

    let submission = submission?;
    let ticket = app.leaderboard_submitting();
    Some(spawn_score_submission(
        Arc::clone(shared),
        Arc::clone(services),
        submission,
        ticket,
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::app::LeaderboardPanel;
    use crate::config::QuizSettings;
    use crate::testing::{FakeBoard, FakeDictionary, FixedWords, MemoryStore, OfflineWords};

    type FakeServices<W> = Services<W, FakeDictionary, FakeBoard, MemoryStore>;

    fn settings() -> QuizSettings {
        QuizSettings {
            question_count: 2,
            word_batch: 10,
            min_word_length: None,
            concurrency: 2,
        }
    }

    fn services(board: Option<FakeBoard>, names: MemoryStore) -> Arc<FakeServices<FixedWords>> {
        let builder = QuizBuilder::new(
            FixedWords(vec!["apple", "zzzqx", "river"]),
            FakeDictionary::with(&[("apple", "A round fruit."), ("river", "A stream of water.")]),
            settings(),
        );
        Arc::new(Services::new(builder, board, names))
    }

    fn shared_app(leaderboard: bool) -> SharedApp {
        Arc::new(Mutex::new(App::new(leaderboard)))
    }

    async fn join_all(handles: Vec<JoinHandle<()>>) {
        for handle in handles {
            handle.await.unwrap();
        }
    }

    fn saved(name: &str) -> MemoryStore {
        let store = MemoryStore::default();
        store.save(name).unwrap();
        store
    }

    #[tokio::test]
    async fn test_saved_player_starts_building_right_away() {
        let app = shared_app(true);
        let services = services(Some(FakeBoard::with_roster(&["Sam", "Lee"])), saved("Sam"));

        join_all(start(&app, &services).await).await;

        let app = app.lock().await;
        assert_eq!(app.state, AppState::QuizReady);
        assert_eq!(app.player(), Some("Sam"));
        assert_eq!(app.session().len(), 2);
        assert_eq!(app.leaderboard, LeaderboardPanel::Shown(Vec::new()));
    }

    #[tokio::test]
    async fn test_without_leaderboard_builds_immediately() {
        let app = shared_app(false);
        let services = services(None, MemoryStore::default());

        join_all(start(&app, &services).await).await;

        let app = app.lock().await;
        assert_eq!(app.state, AppState::QuizReady);
        assert_eq!(app.player(), None);
        assert_eq!(app.leaderboard, LeaderboardPanel::Hidden);
    }

    #[tokio::test]
    async fn test_confirmed_name_is_saved_and_quiz_built() {
        let app = shared_app(true);
        let services = services(Some(FakeBoard::with_roster(&[])), MemoryStore::default());

        join_all(start(&app, &services).await).await;
        assert!(matches!(
            app.lock().await.state,
            AppState::NameEntry {
                entry: NameEntry::FreeText { .. },
                ..
            }
        ));

        for key in [KeyCode::Char('S'), KeyCode::Char('a'), KeyCode::Char('m')] {
            assert!(!handle_input(&app, &services, key).await);
        }
        let build = {
            let mut guard = app.lock().await;
            confirm_name(&mut guard, &app, &services)
        };
        build.unwrap().await.unwrap();

        assert_eq!(services.names.load(), Some("Sam".to_string()));
        let app = app.lock().await;
        assert_eq!(app.state, AppState::QuizReady);
        assert_eq!(app.player(), Some("Sam"));
    }

    #[tokio::test]
    async fn test_short_name_does_not_start_build() {
        let app = shared_app(true);
        let services = services(Some(FakeBoard::with_roster(&[])), MemoryStore::default());
        join_all(start(&app, &services).await).await;

        let mut guard = app.lock().await;
        guard.name_input_push('S');
        assert!(confirm_name(&mut guard, &app, &services).is_none());
        assert_eq!(services.names.load(), None);
    }

    #[tokio::test]
    async fn test_submission_refreshes_leaderboard() {
        let board = FakeBoard {
            rows: vec![
                json!(["Name", "Attempts", "Correct", "Total", "%"]).as_array().unwrap().clone(),
                json!(["alice", 2, 8, 10, 80]).as_array().unwrap().clone(),
                json!(["bob", 1, 19, 20, 95]).as_array().unwrap().clone(),
            ],
            ..FakeBoard::with_roster(&["Sam"])
        };
        let app = shared_app(true);
        let services = services(Some(board), saved("Sam"));
        join_all(start(&app, &services).await).await;

        let submit = {
            let mut guard = app.lock().await;
            guard.check_option();
            submit_quiz(&mut guard, &app, &services)
        };
        assert_eq!(app.lock().await.leaderboard, LeaderboardPanel::Submitting);
        submit.unwrap().await.unwrap();

        let board = services.board.as_ref().unwrap();
        let submissions = board.submissions();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].name, "Sam");
        assert_eq!(submissions[0].total, 2);

        let app = app.lock().await;
        assert_eq!(app.state, AppState::Graded);
        let LeaderboardPanel::Shown(rows) = &app.leaderboard else {
            panic!("expected a leaderboard, got {:?}", app.leaderboard);
        };
        let names: Vec<&str> = rows.iter().map(|r| r.row.name.as_str()).collect();
        assert_eq!(names, vec!["bob", "alice"]);
    }

    #[tokio::test]
    async fn test_failed_submission_shows_in_panel() {
        let board = FakeBoard {
            reject_submissions: true,
            ..FakeBoard::with_roster(&["Sam"])
        };
        let app = shared_app(true);
        let services = services(Some(board), saved("Sam"));
        join_all(start(&app, &services).await).await;

        let submit = {
            let mut guard = app.lock().await;
            submit_quiz(&mut guard, &app, &services)
        };
        submit.unwrap().await.unwrap();

        let app = app.lock().await;
        assert!(matches!(
            &app.leaderboard,
            LeaderboardPanel::Failed(message) if message.starts_with("Could not submit score")
        ));
    }

    #[tokio::test]
    async fn test_word_source_failure_fails_session() {
        let builder = QuizBuilder::new(OfflineWords, FakeDictionary::default(), settings());
        let services: Arc<FakeServices<OfflineWords>> =
            Arc::new(Services::new(builder, None, MemoryStore::default()));
        let app = shared_app(false);

        join_all(start(&app, &services).await).await;

        let app = app.lock().await;
        assert!(matches!(
            &app.state,
            AppState::Failed { message } if message.starts_with("Could not fetch words")
        ));
        assert!(app.state.is_terminal());
    }
}
