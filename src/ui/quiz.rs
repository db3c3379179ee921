use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::quiz::view::{OptionView, QuestionView};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let views = app.question_views();
    let Some(question) = views.get(app.current_question()) else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], app, views.len());
    render_word(frame, chunks[1], question);
    render_options(frame, chunks[2], &question.options);
    render_overview(frame, chunks[3], &views, app.current_question());
    render_controls(frame, chunks[4]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App, total: usize) {
    let progress = format!(
        "{}/{}  ·  {} answered",
        app.current_question() + 1,
        total,
        app.answered_count()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_word(frame: &mut Frame, area: Rect, question: &QuestionView) {
    let widget = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{}. ", question.number),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(question.word, Style::default().fg(Color::White).bold()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, options: &[OptionView]) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for option in options {
        let style = match (option.focused, option.checked) {
            (true, _) => Style::default().fg(Color::Cyan).bold(),
            (false, true) => Style::default().fg(Color::Green),
            (false, false) => Style::default().fg(Color::Gray),
        };
        let marker = if option.focused { ">" } else { " " };
        let radio = if option.checked { "(*)" } else { "( )" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} {} ", marker, radio), style),
            Span::styled(format!("{}. ", option.label), style),
            Span::styled(option.text, style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

/// One marker per question: answered, unanswered, current.
fn render_overview(frame: &mut Frame, area: Rect, views: &[QuestionView], current: usize) {
    let spans: Vec<Span> = views
        .iter()
        .enumerate()
        .map(|(index, view)| {
            let symbol = if view.answered { " ● " } else { " ○ " };
            let style = if index == current {
                Style::default().fg(Color::Cyan).bold()
            } else if view.answered {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(symbol, style)
        })
        .collect();

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(
        "j/k option  ·  h/l question  ·  space check  ·  s submit  ·  q quit",
    )
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
