use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::leaderboard;
use crate::app::App;
use crate::quiz::view::{ResultView, VerdictView};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(view) = app.result_view() else {
        return;
    };

    let leaderboard_height = if app.leaderboard_enabled() {
        leaderboard::HEIGHT
    } else {
        0
    };

    let chunks = Layout::vertical([
        Constraint::Length(6),
        Constraint::Min(4),
        Constraint::Length(leaderboard_height),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], &view, app.player());
    render_verdicts(frame, chunks[1], &view.verdicts, app.result_scroll());
    if app.leaderboard_enabled() {
        leaderboard::render(frame, chunks[2], &app.leaderboard, app.player());
    }
    render_controls(frame, chunks[3]);
}

fn get_grade_color(percent: u32) -> Color {
    match percent {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, view: &ResultView, player: Option<&str>) {
    let heading = match player {
        Some(name) => format!("RESULTS FOR {}", name.to_uppercase()),
        None => "RESULTS".to_string(),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(heading, Style::default().fg(Color::Cyan).bold())),
        Line::from(""),
        Line::from(Span::styled(
            view.summary.as_str(),
            Style::default().fg(get_grade_color(view.percent)).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_verdicts(frame: &mut Frame, area: Rect, verdicts: &[VerdictView], scroll: usize) {
    let lines: Vec<Line> = verdicts
        .iter()
        .map(|verdict| {
            let (symbol, color) = if verdict.correct {
                ("+", Color::Green)
            } else {
                ("-", Color::Red)
            };

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:<14}", verdict.word),
                    Style::default().fg(Color::White),
                ),
                Span::styled(verdict.message.as_str(), Style::default().fg(color)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
