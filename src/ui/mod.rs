mod leaderboard;
mod name_entry;
mod quiz;
mod results;
mod status;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, AppState, LeaderboardPanel};

pub const TITLE: &str = "VOCAB QUIZ";

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    // The results screen places the leaderboard itself.
    let area = if app.state != AppState::Graded
        && app.leaderboard_enabled()
        && app.leaderboard != LeaderboardPanel::Hidden
    {
        let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(leaderboard::HEIGHT)])
            .horizontal_margin(1)
            .split(area);
        leaderboard::render(frame, chunks[1], &app.leaderboard, app.player());
        chunks[0]
    } else {
        area
    };

    match &app.state {
        AppState::Idle => status::render(frame, area, "Starting...", Color::Yellow),
        AppState::NameResolving => status::render(frame, area, "Looking up players...", Color::Yellow),
        AppState::NameEntry { .. } => name_entry::render(frame, area, app),
        AppState::Building => status::render(frame, area, "Finding words and definitions...", Color::Yellow),
        AppState::Empty => status::render_final(
            frame,
            area,
            "No suitable words found. Please restart the quiz.",
        ),
        AppState::QuizReady => quiz::render(frame, area, app),
        AppState::Graded => results::render(frame, area, app),
        AppState::Failed { message } => status::render_final(frame, area, message),
    }
}
