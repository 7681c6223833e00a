//! Turn phases.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::rules::GameResult;

/// Where the active player is within their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// The player may move one passage or decline to.
    AwaitingMove,
    /// Movement is over. At most one suggestion is allowed.
    AwaitingAction { suggested: bool },
    /// The turn is over and play passes to the next seat.
    TurnComplete,
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnPhase::AwaitingMove => write!(f, "awaiting move"),
            TurnPhase::AwaitingAction { .. } => write!(f, "awaiting action"),
            TurnPhase::TurnComplete => write!(f, "turn complete"),
        }
    }
}

/// Snapshot returned by `GameSession::current_turn_state`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub phase: TurnPhase,
    pub active_player: PlayerId,
    /// Turn counter, starting at 1.
    pub turn_number: u32,
    /// Full trips around the table, starting at 1.
    pub round: u32,
    /// Set once the game has ended.
    pub result: Option<GameResult>,
}
