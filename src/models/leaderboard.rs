use serde::Serialize;
use serde_json::Value;

const NAME_COLUMN: usize = 0;
const ATTEMPTS_COLUMN: usize = 1;
const PERCENT_COLUMN: usize = 4;

/// One player's row from the leaderboard spreadsheet.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow {
    pub name: String,
    pub attempts: String,
    /// The percentage cell as the sheet shows it, without a trailing `%`.
    pub percent_text: String,
    /// The percentage cell as a number; 0 when missing or not numeric.
    pub percent: f64,
}

impl LeaderboardRow {
    pub fn from_cells(cells: &[Value]) -> Self {
        let percent_cell = cells.get(PERCENT_COLUMN);
        Self {
            name: cell_text(cells.get(NAME_COLUMN)),
            attempts: cell_text(cells.get(ATTEMPTS_COLUMN)),
            percent_text: cell_text(percent_cell).trim().trim_end_matches('%').trim().to_string(),
            percent: percent_cell.and_then(cell_number).unwrap_or(0.0),
        }
    }
}

/// A row with its 1-based position in the sorted table.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    pub rank: usize,
    pub row: LeaderboardRow,
}

/// A finished quiz, as posted to the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSubmission {
    pub name: String,
    pub correct: usize,
    pub total: usize,
}

pub(crate) fn cell_text(cell: Option<&Value>) -> String {
    match cell {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn cell_number(cell: &Value) -> Option<f64> {
    let number = match cell {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}
