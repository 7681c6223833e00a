//! One observer's notebook.
//!
//! Facts only ever move from `Unknown` to `Has` or `Lacks`. A conflicting
//! update is dropped and logged, so the state never regresses.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::cards::Card;
use crate::core::PlayerId;

/// What is known about one (player, card) pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Belief {
    /// Confirmed to hold the card.
    Has,
    /// Confirmed not to hold the card.
    Lacks,
    #[default]
    Unknown,
}

/// Somewhere a card may be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Holder {
    Player(PlayerId),
    /// The case file.
    Solution,
}

/// Observer-relative knowledge about card locations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeliefState {
    player_count: usize,
    facts: FxHashMap<(PlayerId, Card), Belief>,
    /// Cards seen in some hand, therefore not in the solution.
    cleared: FxHashSet<Card>,
}

impl BeliefState {
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            facts: FxHashMap::default(),
            cleared: FxHashSet::default(),
        }
    }

    #[must_use]
    pub fn belief(&self, player: PlayerId, card: Card) -> Belief {
        self.facts.get(&(player, card)).copied().unwrap_or_default()
    }

    /// Whether the card is known to be outside the solution.
    #[must_use]
    pub fn is_cleared(&self, card: Card) -> bool {
        self.cleared.contains(&card)
    }

    /// Record that `player` holds `card`. Every other player then lacks it
    /// and it cannot be in the solution.
    pub(crate) fn mark_has(&mut self, player: PlayerId, card: Card) {
        match self.belief(player, card) {
            Belief::Has => return,
            Belief::Lacks => {
                warn!(player = %player, card = %card, "ignoring Has fact that contradicts Lacks");
                return;
            }
            Belief::Unknown => {}
        }

        trace!(player = %player, card = %card, "has");
        self.facts.insert((player, card), Belief::Has);
        self.cleared.insert(card);

        for other in PlayerId::all(self.player_count).filter(|&p| p != player) {
            self.mark_lacks(other, card);
        }
    }

    /// Record that `player` does not hold `card`.
    pub(crate) fn mark_lacks(&mut self, player: PlayerId, card: Card) {
        match self.belief(player, card) {
            Belief::Lacks => {}
            Belief::Has => {
                warn!(player = %player, card = %card, "ignoring Lacks fact that contradicts Has");
            }
            Belief::Unknown => {
                trace!(player = %player, card = %card, "lacks");
                self.facts.insert((player, card), Belief::Lacks);
            }
        }
    }

    /// Every holder not yet ruled out for `card`.
    #[must_use]
    pub fn possible_holders(&self, card: Card) -> SmallVec<[Holder; 7]> {
        if let Some(owner) = self.known_owner(card) {
            return SmallVec::from_slice(&[Holder::Player(owner)]);
        }

        let mut holders: SmallVec<[Holder; 7]> = PlayerId::all(self.player_count)
            .filter(|&p| self.belief(p, card) != Belief::Lacks)
            .map(Holder::Player)
            .collect();
        if !self.is_cleared(card) {
            holders.push(Holder::Solution);
        }
        holders
    }

    /// The player confirmed to hold `card`, if any.
    #[must_use]
    pub fn known_owner(&self, card: Card) -> Option<PlayerId> {
        PlayerId::all(self.player_count).find(|&p| self.belief(p, card) == Belief::Has)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{SuspectId, WeaponId};

    const KNIFE: Card = Card::Weapon(WeaponId(5));
    const PLUM: Card = Card::Suspect(SuspectId(5));

    #[test]
    fn test_unknown_by_default() {
        let state = BeliefState::new(3);
        assert_eq!(state.belief(PlayerId::new(0), KNIFE), Belief::Unknown);
        assert_eq!(state.possible_holders(KNIFE).len(), 4);
        assert!(!state.is_cleared(KNIFE));
    }

    #[test]
    fn test_has_excludes_everyone_else() {
        let mut state = BeliefState::new(3);
        state.mark_has(PlayerId::new(1), KNIFE);

        assert_eq!(state.belief(PlayerId::new(0), KNIFE), Belief::Lacks);
        assert_eq!(state.belief(PlayerId::new(2), KNIFE), Belief::Lacks);
        assert!(state.is_cleared(KNIFE));
        assert_eq!(state.possible_holders(KNIFE).as_slice(), &[Holder::Player(PlayerId::new(1))]);
    }

    #[test]
    fn test_all_lacking_leaves_solution() {
        let mut state = BeliefState::new(3);
        for p in PlayerId::all(3) {
            state.mark_lacks(p, PLUM);
        }
        assert_eq!(state.possible_holders(PLUM).as_slice(), &[Holder::Solution]);
    }

    #[test]
    fn test_updates_never_regress() {
        let mut state = BeliefState::new(3);
        state.mark_lacks(PlayerId::new(0), KNIFE);
        state.mark_has(PlayerId::new(0), KNIFE);
        assert_eq!(state.belief(PlayerId::new(0), KNIFE), Belief::Lacks);
        assert!(!state.is_cleared(KNIFE));

        state.mark_has(PlayerId::new(1), KNIFE);
        state.mark_lacks(PlayerId::new(1), KNIFE);
        assert_eq!(state.belief(PlayerId::new(1), KNIFE), Belief::Has);
    }
}
