//! Per-turn bookkeeping.
//!
//! `check_*` methods validate without mutating so the session can reject an
//! operation before touching any state; `mark_*` methods apply a transition
//! that was already checked.

use tracing::debug;

use super::phase::TurnPhase;
use crate::core::{GameError, PlayerId, PlayerMap, Result};
use crate::players::PlayerState;

#[derive(Clone, Debug)]
pub struct TurnManager {
    active: PlayerId,
    phase: TurnPhase,
    turn_number: u32,
    round: u32,
}

impl TurnManager {
    /// Start the first turn for `first`.
    #[must_use]
    pub fn new(first: PlayerId) -> Self {
        Self {
            active: first,
            phase: TurnPhase::AwaitingMove,
            turn_number: 1,
            round: 1,
        }
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Reject anyone but the active player.
    pub fn check_turn(&self, player: PlayerId) -> Result<()> {
        if player == self.active {
            Ok(())
        } else {
            Err(GameError::OutOfTurn { player, active: self.active })
        }
    }

    pub fn check_move(&self) -> Result<()> {
        match self.phase {
            TurnPhase::AwaitingMove => Ok(()),
            phase => Err(GameError::WrongPhase { action: "move", phase }),
        }
    }

    /// A suggestion is allowed once, either before or after moving.
    pub fn check_suggest(&self) -> Result<()> {
        match self.phase {
            TurnPhase::AwaitingMove | TurnPhase::AwaitingAction { suggested: false } => Ok(()),
            phase => Err(GameError::WrongPhase { action: "suggest", phase }),
        }
    }

    /// Accusations skip the move/act flow but not a finished turn.
    pub fn check_accuse(&self) -> Result<()> {
        match self.phase {
            TurnPhase::TurnComplete => Err(GameError::WrongPhase {
                action: "accuse",
                phase: self.phase,
            }),
            _ => Ok(()),
        }
    }

    pub fn check_end_turn(&self) -> Result<()> {
        match self.phase {
            TurnPhase::TurnComplete => Err(GameError::WrongPhase {
                action: "end turn",
                phase: self.phase,
            }),
            _ => Ok(()),
        }
    }

    /// Moving, or declining to move, leads to `AwaitingAction`.
    pub fn mark_moved(&mut self) {
        if self.phase == TurnPhase::AwaitingMove {
            self.phase = TurnPhase::AwaitingAction { suggested: false };
        }
    }

    pub fn mark_suggested(&mut self) {
        self.phase = TurnPhase::AwaitingAction { suggested: true };
    }

    pub fn mark_complete(&mut self) {
        self.phase = TurnPhase::TurnComplete;
    }

    /// Hand the turn to the next active seat after the current one.
    ///
    /// Returns `None`, leaving the state at `TurnComplete`, when nobody is
    /// left at the table.
    pub fn advance(&mut self, players: &PlayerMap<PlayerState>) -> Option<PlayerId> {
        debug_assert_eq!(self.phase, TurnPhase::TurnComplete);

        let count = players.player_count();
        let next = self
            .active
            .others_in_order(count)
            .chain(std::iter::once(self.active))
            .find(|&p| players[p].active)?;

        if next <= self.active {
            self.round += 1;
        }
        self.active = next;
        self.turn_number += 1;
        self.phase = TurnPhase::AwaitingMove;

        debug!(player = %next, turn = self.turn_number, round = self.round, "turn started");
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::RoomId;

    fn players(count: usize) -> PlayerMap<PlayerState> {
        PlayerMap::new(count, |p| {
            PlayerState::new(format!("P{}", p.0), None, RoomId(0), Vec::new())
        })
    }

    #[test]
    fn test_full_turn_cycle() {
        let table = players(3);
        let mut turns = TurnManager::new(PlayerId::new(0));
        assert_eq!(turns.phase(), TurnPhase::AwaitingMove);

        turns.check_move().unwrap();
        turns.mark_moved();
        assert_eq!(turns.phase(), TurnPhase::AwaitingAction { suggested: false });

        turns.check_suggest().unwrap();
        turns.mark_suggested();
        assert_eq!(
            turns.check_suggest(),
            Err(GameError::WrongPhase {
                action: "suggest",
                phase: TurnPhase::AwaitingAction { suggested: true }
            })
        );
        assert!(turns.check_move().is_err());

        turns.mark_complete();
        assert_eq!(turns.phase(), TurnPhase::TurnComplete);
        assert!(turns.check_end_turn().is_err());

        assert_eq!(turns.advance(&table), Some(PlayerId::new(1)));
        assert_eq!(turns.phase(), TurnPhase::AwaitingMove);
        assert_eq!(turns.turn_number(), 2);
        assert_eq!(turns.round(), 1);
    }

    #[test]
    fn test_round_counts_wraps() {
        let table = players(3);
        let mut turns = TurnManager::new(PlayerId::new(0));
        for expected in [1, 2, 0, 1] {
            turns.mark_complete();
            assert_eq!(turns.advance(&table), Some(PlayerId::new(expected)));
        }
        assert_eq!(turns.round(), 2);
        assert_eq!(turns.turn_number(), 5);
    }

    #[test]
    fn test_advance_skips_withdrawn() {
        let mut table = players(4);
        table[PlayerId::new(1)].withdraw();
        table[PlayerId::new(2)].withdraw();

        let mut turns = TurnManager::new(PlayerId::new(0));
        turns.mark_complete();
        assert_eq!(turns.advance(&table), Some(PlayerId::new(3)));

        for p in PlayerId::all(4) {
            table[p].withdraw();
        }
        turns.mark_complete();
        assert_eq!(turns.advance(&table), None);
        assert_eq!(turns.phase(), TurnPhase::TurnComplete);
    }

    #[test]
    fn test_out_of_turn() {
        let turns = TurnManager::new(PlayerId::new(0));
        assert_eq!(
            turns.check_turn(PlayerId::new(2)),
            Err(GameError::OutOfTurn { player: PlayerId::new(2), active: PlayerId::new(0) })
        );
    }
}
