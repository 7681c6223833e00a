//! Result of a finished game.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A player named the solution.
    Winner(PlayerId),
    /// Everyone still seated lost the right to accuse, the table emptied,
    /// or the round limit ran out.
    NoWinner,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::NoWinner => None,
        }
    }
}
