//! Engine error type.
//!
//! Every rejected operation leaves the session untouched and reports one of
//! these variants. The presentation layer turns them into messages.

use thiserror::Error;

use super::player::PlayerId;
use crate::board::RoomId;
use crate::turn::TurnPhase;

/// Errors returned by setup and by the public game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Target room is not adjacent to the player's current room.
    #[error("illegal move: {to} is not adjacent to {from}")]
    IllegalMove { from: RoomId, to: RoomId },

    /// The action is not valid in the current turn phase.
    #[error("cannot {action} during {phase}")]
    WrongPhase { action: &'static str, phase: TurnPhase },

    /// The player already made a wrong accusation.
    #[error("{0} has already been eliminated from accusing")]
    AlreadyEliminated(PlayerId),

    /// Setup requested with fewer than 3 or more than 6 players.
    #[error("invalid player count {0}: a game needs 3 to 6 players")]
    InvalidPlayerCount(usize),

    /// Board or deck configuration is inconsistent.
    #[error("setup invariant violated: {0}")]
    SetupInvariant(String),

    /// Someone other than the active player tried to act.
    #[error("it is {active}'s turn, not {player}'s")]
    OutOfTurn { player: PlayerId, active: PlayerId },

    /// The game already reached a terminal state.
    #[error("the game is over")]
    GameOver,

    /// A suggestion named a room other than the suggester's current room.
    #[error("suggestions must name the current room {current}, not {named}")]
    RoomMismatch { named: RoomId, current: RoomId },

    #[error("no such player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("unknown name: {0}")]
    UnknownName(String),

    /// The player has left the table.
    #[error("{0} has withdrawn from the game")]
    Withdrawn(PlayerId),
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, GameError>;
