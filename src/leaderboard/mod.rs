//! Score submission and the ranked leaderboard.

mod client;
mod ranking;

pub use client::{ScoreBoard, SheetClient};
pub use ranking::rank_rows;
