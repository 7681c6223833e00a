//! Providers that replay a fixed script, one entry per turn.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::provider::DecisionProvider;
use crate::board::RoomId;
use crate::cards::{SuspectId, WeaponId};
use crate::game::PlayerView;
use crate::rules::Accusation;

/// What a scripted seat does on one of its turns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedTurn {
    pub move_to: Option<RoomId>,
    pub suggestion: Option<(SuspectId, WeaponId)>,
    pub accusation: Option<Accusation>,
}

impl ScriptedTurn {
    /// A turn that does nothing.
    #[must_use]
    pub fn pass() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_move(mut self, room: RoomId) -> Self {
        self.move_to = Some(room);
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suspect: SuspectId, weapon: WeaponId) -> Self {
        self.suggestion = Some((suspect, weapon));
        self
    }

    #[must_use]
    pub fn with_accusation(mut self, accusation: Accusation) -> Self {
        self.accusation = Some(accusation);
        self
    }
}

/// Plays queued turns in order, then passes forever.
#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider {
    turns: VecDeque<ScriptedTurn>,
    current: ScriptedTurn,
}

impl ScriptedProvider {
    #[must_use]
    pub fn new(turns: impl IntoIterator<Item = ScriptedTurn>) -> Self {
        Self {
            turns: turns.into_iter().collect(),
            current: ScriptedTurn::pass(),
        }
    }

    /// Turns not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.turns.len()
    }
}

impl DecisionProvider for ScriptedProvider {
    fn choose_move(&mut self, _view: &PlayerView<'_>) -> Option<RoomId> {
        // Each turn starts with a move decision.
        self.current = self.turns.pop_front().unwrap_or_default();
        self.current.move_to
    }

    fn choose_suggestion(&mut self, _view: &PlayerView<'_>) -> Option<(SuspectId, WeaponId)> {
        self.current.suggestion.take()
    }

    fn choose_accusation(&mut self, _view: &PlayerView<'_>) -> Option<Accusation> {
        self.current.accusation.take()
    }
}
