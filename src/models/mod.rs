mod leaderboard;
mod question;

pub(crate) use leaderboard::cell_text;
pub use leaderboard::{LeaderboardRow, RankedRow, ScoreSubmission};
pub use question::{AnswerKey, Question, QuizSession};
