//! The leaderboard panel, shown under every screen once a board is configured.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::app::LeaderboardPanel;
use crate::models::RankedRow;

pub const HEIGHT: u16 = 12;

pub fn render(frame: &mut Frame, area: Rect, panel: &LeaderboardPanel, player: Option<&str>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Leaderboard ")
        .title_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let (message, color) = match panel {
        LeaderboardPanel::Shown(rows) if !rows.is_empty() => {
            frame.render_widget(table(rows, player).block(block), area);
            return;
        }
        LeaderboardPanel::Shown(_) => ("No scores yet.", Color::DarkGray),
        LeaderboardPanel::Hidden => ("", Color::DarkGray),
        LeaderboardPanel::Loading => ("Loading leaderboard...", Color::Yellow),
        LeaderboardPanel::Submitting => ("Submitting score...", Color::Yellow),
        LeaderboardPanel::Failed(err) => (err.as_str(), Color::Red),
    };

    let widget = Paragraph::new(Span::styled(message, Style::default().fg(color)))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(widget, area);
}

fn table<'a>(rows: &'a [RankedRow], player: Option<&str>) -> Table<'a> {
    let header = Row::new(["Rank", "Name", "Attempts", "%Correct"])
        .style(Style::default().fg(Color::Cyan).bold());

    let body = rows.iter().map(|ranked| {
        let is_you = player == Some(ranked.row.name.as_str());
        let rank_style = match ranked.rank {
            1 => Style::default().fg(Color::Yellow).bold(),
            2 => Style::default().fg(Color::White),
            3 => Style::default().fg(Color::LightRed),
            _ => Style::default().fg(Color::DarkGray),
        };
        let name_style = if is_you {
            Style::default().fg(Color::Green).bold()
        } else {
            Style::default().fg(Color::White)
        };

        Row::new(vec![
            Cell::from(format!("{}.", ranked.rank)).style(rank_style),
            Cell::from(ranked.row.name.as_str()).style(name_style),
            Cell::from(ranked.row.attempts.as_str()).style(Style::default().fg(Color::Gray)),
            Cell::from(percent_cell(&ranked.row.percent_text)).style(Style::default().fg(Color::Gray)),
        ])
    });

    Table::new(
        body,
        [
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(9),
            Constraint::Length(9),
        ],
    )
    .header(header)
}

fn percent_cell(percent_text: &str) -> String {
    if percent_text.is_empty() {
        String::new()
    } else {
        format!("{}%", percent_text)
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use serde_json::json;

    use super::*;
    use crate::models::LeaderboardRow;

    fn screen_text(panel: &LeaderboardPanel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, HEIGHT)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), panel, Some("bob")))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_percent_sign_is_not_doubled() {
        let row = LeaderboardRow::from_cells(json!(["bob", 3, 0, 0, "66.5%"]).as_array().unwrap());
        let text = screen_text(&LeaderboardPanel::Shown(vec![RankedRow { rank: 1, row }]));

        assert!(text.contains("66.5%"));
        assert!(!text.contains("%%"));
    }

    #[test]
    fn test_status_messages() {
        assert!(screen_text(&LeaderboardPanel::Loading).contains("Loading leaderboard..."));
        assert!(screen_text(&LeaderboardPanel::Shown(Vec::new())).contains("No scores yet."));
        assert!(screen_text(&LeaderboardPanel::Failed("Could not load".into())).contains("Could not load"));
    }
}
