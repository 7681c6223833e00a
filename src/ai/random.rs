//! Uniformly random play.

use super::provider::DecisionProvider;
use crate::board::RoomId;
use crate::cards::{Card, SuspectId, WeaponId};
use crate::core::{GameRng, PlayerId};
use crate::game::PlayerView;
use crate::rules::Accusation;

/// Picks uniformly among legal choices and never accuses.
#[derive(Clone, Debug)]
pub struct RandomProvider {
    rng: GameRng,
}

impl RandomProvider {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }
}

impl DecisionProvider for RandomProvider {
    fn choose_move(&mut self, view: &PlayerView<'_>) -> Option<RoomId> {
        self.rng.choose(view.neighbors()).copied()
    }

    fn choose_suggestion(&mut self, view: &PlayerView<'_>) -> Option<(SuspectId, WeaponId)> {
        let suspects: Vec<SuspectId> = view.catalog().suspects().collect();
        let weapons: Vec<WeaponId> = view.catalog().weapons().collect();
        let suspect = *self.rng.choose(&suspects)?;
        let weapon = *self.rng.choose(&weapons)?;
        Some((suspect, weapon))
    }

    fn choose_accusation(&mut self, _view: &PlayerView<'_>) -> Option<Accusation> {
        None
    }

    fn choose_reveal(&mut self, _suggester: PlayerId, matches: &[Card]) -> Card {
        self.rng.choose(matches).copied().unwrap_or(matches[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameSession;

    #[test]
    fn test_moves_to_a_neighbor() {
        let game = GameSession::start(["A", "B", "C"], Some(4)).unwrap();
        let view = game.view(PlayerId::new(0)).unwrap();
        let mut provider = RandomProvider::new(4);
        for _ in 0..20 {
            let room = provider.choose_move(&view).unwrap();
            assert!(view.neighbors().contains(&room));
        }
    }

    #[test]
    fn test_reveal_picks_a_match() {
        let mut provider = RandomProvider::new(8);
        let matches = [Card::Suspect(SuspectId(1)), Card::Room(RoomId(3))];
        for _ in 0..20 {
            assert!(matches.contains(&provider.choose_reveal(PlayerId::new(0), &matches)));
        }
    }
}
