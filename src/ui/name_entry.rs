//! Name entry: pick from the roster or type a name.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{App, AppState, NameEntry};

use super::TITLE;

const VISIBLE_NAMES: usize = 7;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let AppState::NameEntry { entry, error } = &app.state else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Percentage(25),
        Constraint::Min(12),
        Constraint::Percentage(25),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(TITLE, Style::default().fg(Color::Cyan).bold())),
        Line::from(""),
    ];

    let controls = match entry {
        NameEntry::FreeText { input } => {
            content.push(Line::from(vec![
                Span::styled("Enter your name: ", Style::default().fg(Color::White)),
                Span::styled(input.as_str(), Style::default().fg(Color::Yellow)),
                Span::styled("_", Style::default().fg(Color::Yellow)),
            ]));
            "[Enter] to start  ·  [Esc] to quit"
        }
        NameEntry::Select { roster, cursor } => {
            content.push(Line::from(Span::styled(
                "Select your name:",
                Style::default().fg(Color::White),
            )));
            content.push(Line::from(""));
            content.extend(roster_lines(roster, *cursor));
            "j/k choose  ·  [Enter] to start  ·  [Q] to quit"
        }
    };

    content.push(Line::from(""));
    content.push(match error {
        Some(err) => Line::from(Span::styled(err.as_str(), Style::default().fg(Color::Red))),
        None => Line::from(""),
    });
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        controls,
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, chunks[1]);
}

/// A window of the roster that keeps the cursor in view.
fn roster_lines(roster: &[String], cursor: usize) -> Vec<Line<'_>> {
    let start = cursor.saturating_sub(VISIBLE_NAMES - 1);

    roster
        .iter()
        .enumerate()
        .skip(start)
        .take(VISIBLE_NAMES)
        .map(|(index, name)| {
            if index == cursor {
                Line::from(Span::styled(
                    format!("> {} <", name),
                    Style::default().fg(Color::Yellow).bold(),
                ))
            } else {
                Line::from(Span::styled(name.as_str(), Style::default().fg(Color::Gray)))
            }
        })
        .collect()
}
