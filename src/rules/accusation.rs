//! Accusation resolution.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::RoomId;
use crate::cards::{Solution, SuspectId, WeaponId};
use crate::core::{GameError, PlayerId, Result};
use crate::players::PlayerState;

/// A full claim of the solution. Unlike a suggestion, any room may be named.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Accusation {
    pub suspect: SuspectId,
    pub weapon: WeaponId,
    pub room: RoomId,
}

impl Accusation {
    #[must_use]
    pub fn new(suspect: SuspectId, weapon: WeaponId, room: RoomId) -> Self {
        Self { suspect, weapon, room }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccusationOutcome {
    Correct,
    Incorrect,
}

/// Compares accusations against the solution.
#[derive(Clone, Copy, Debug)]
pub struct AccusationResolver<'a> {
    solution: &'a Solution,
}

impl<'a> AccusationResolver<'a> {
    #[must_use]
    pub fn new(solution: &'a Solution) -> Self {
        Self { solution }
    }

    /// Check that `player` may accuse at all.
    pub fn check(&self, id: PlayerId, player: &PlayerState) -> Result<()> {
        if player.eliminated {
            return Err(GameError::AlreadyEliminated(id));
        }
        Ok(())
    }

    /// Judge an accusation. A wrong one eliminates the accuser; the solution
    /// is not revealed either way.
    pub fn accuse(
        &self,
        id: PlayerId,
        player: &mut PlayerState,
        accusation: &Accusation,
    ) -> Result<AccusationOutcome> {
        self.check(id, player)?;

        let Accusation { suspect, weapon, room } = *accusation;
        let outcome = if self.solution.matches(suspect, weapon, room) {
            AccusationOutcome::Correct
        } else {
            player.eliminate();
            AccusationOutcome::Incorrect
        };

        info!(player = %id, outcome = ?outcome, "accusation judged");
        Ok(outcome)
    }
}
