use tracing::{info, warn};

use super::store::NameStore;
use crate::error::NameError;
use crate::leaderboard::ScoreBoard;

pub const NAME_MIN_LENGTH: usize = 2;

/// How the player's name gets settled before the quiz starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameResolution {
    /// The saved name is on the roster; start right away.
    AutoStart(String),
    /// Let the player pick from the roster.
    Select(Vec<String>),
    /// No roster; ask for a name.
    FreeText,
}

/// Trim and check a chosen name.
pub fn validate_name(raw: &str) -> Result<String, NameError> {
    let name = raw.trim();
    if name.chars().count() < NAME_MIN_LENGTH {
        return Err(NameError::TooShort);
    }
    Ok(name.to_string())
}

/// Decide between the saved name and the roster. Pure; see [`resolve_player`].
pub fn resolve(saved: Option<String>, roster: Vec<String>) -> NameResolution {
    match saved {
        Some(name) if roster.contains(&name) => NameResolution::AutoStart(name),
        _ if roster.is_empty() => NameResolution::FreeText,
        _ => NameResolution::Select(roster),
    }
}

/// Load the saved name and fetch the roster. An unreachable roster counts as
/// empty.
pub async fn resolve_player<S, B>(store: &S, board: &B) -> NameResolution
where
    S: NameStore,
    B: ScoreBoard,
{
    let saved = store.load();
    let roster = match board.roster().await {
        Ok(roster) => roster,
        Err(err) => {
            warn!(error = %err, "failed to fetch roster");
            Vec::new()
        }
    };

    let resolution = resolve(saved, roster);
    info!(?resolution, "resolved player name");
    resolution
}
