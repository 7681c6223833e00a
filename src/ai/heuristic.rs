//! Notebook-driven play.

use rustc_hash::FxHashMap;

use super::provider::DecisionProvider;
use crate::board::RoomId;
use crate::cards::{Card, Category, SuspectId, WeaponId};
use crate::core::PlayerId;
use crate::deduction::Holder;
use crate::game::PlayerView;
use crate::rules::Accusation;

/// Plays from its own notebook.
///
/// Walks toward the nearest room still in doubt, suggests suspects and
/// weapons it has not resolved, and accuses once every category is pinned.
/// When refuting it prefers a card it has already shown the same suggester.
#[derive(Clone, Debug, Default)]
pub struct HeuristicProvider {
    shown: FxHashMap<PlayerId, Vec<Card>>,
}

impl HeuristicProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The best card to name from `category`: an open candidate if one
    /// remains, else the one already pinned to the case file.
    fn pick(view: &PlayerView<'_>, category: Category) -> Option<Card> {
        let candidates = view.solution_candidates(category);
        candidates
            .iter()
            .copied()
            .find(|&c| view.possible_holders(c).len() > 1)
            .or_else(|| candidates.first().copied())
    }

    /// The solution card of `category`, if this seat has worked it out.
    fn solved(view: &PlayerView<'_>, category: Category) -> Option<Card> {
        let candidates = view.solution_candidates(category);
        if let [only] = candidates.as_slice() {
            return Some(*only);
        }
        candidates
            .into_iter()
            .find(|&c| view.possible_holders(c).as_slice() == [Holder::Solution])
    }
}

impl DecisionProvider for HeuristicProvider {
    fn choose_move(&mut self, view: &PlayerView<'_>) -> Option<RoomId> {
        let open_rooms = view.solution_candidates(Category::Room);
        view.board()
            .next_step_toward(view.current_room(), |room| open_rooms.contains(&Card::Room(room)))
    }

    fn choose_suggestion(&mut self, view: &PlayerView<'_>) -> Option<(SuspectId, WeaponId)> {
        let suspect = match Self::pick(view, Category::Suspect) {
            Some(Card::Suspect(s)) => s,
            _ => view.catalog().suspects().next()?,
        };
        let weapon = match Self::pick(view, Category::Weapon) {
            Some(Card::Weapon(w)) => w,
            _ => view.catalog().weapons().next()?,
        };
        Some((suspect, weapon))
    }

    fn choose_accusation(&mut self, view: &PlayerView<'_>) -> Option<Accusation> {
        match (
            Self::solved(view, Category::Suspect)?,
            Self::solved(view, Category::Weapon)?,
            Self::solved(view, Category::Room)?,
        ) {
            (Card::Suspect(s), Card::Weapon(w), Card::Room(r)) => Some(Accusation::new(s, w, r)),
            _ => None,
        }
    }

    fn choose_reveal(&mut self, suggester: PlayerId, matches: &[Card]) -> Card {
        let already = self.shown.entry(suggester).or_default();
        if let Some(&card) = matches.iter().find(|c| already.contains(c)) {
            return card;
        }
        let card = matches[0];
        already.push(card);
        card
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameSession;

    #[test]
    fn test_reveal_repeats_for_same_suggester() {
        let mut provider = HeuristicProvider::new();
        let a = Card::Suspect(SuspectId(2));
        let b = Card::Weapon(WeaponId(3));

        assert_eq!(provider.choose_reveal(PlayerId::new(0), &[a, b]), a);
        assert_eq!(provider.choose_reveal(PlayerId::new(0), &[b, a]), a);
        assert_eq!(provider.choose_reveal(PlayerId::new(1), &[b, a]), b);
    }

    #[test]
    fn test_never_suggests_own_cards_when_alternatives_exist() {
        let game = GameSession::start(["A", "B", "C"], Some(21)).unwrap();
        let view = game.view(PlayerId::new(1)).unwrap();
        let mut provider = HeuristicProvider::new();

        let (suspect, weapon) = provider.choose_suggestion(&view).unwrap();
        assert!(!view.hand().contains(&Card::Suspect(suspect)));
        assert!(!view.hand().contains(&Card::Weapon(weapon)));
    }

    #[test]
    fn test_no_accusation_at_start() {
        let game = GameSession::start(["A", "B", "C"], Some(21)).unwrap();
        let view = game.view(PlayerId::new(0)).unwrap();
        assert!(HeuristicProvider::new().choose_accusation(&view).is_none());
    }

    #[test]
    fn test_moves_toward_open_room() {
        let game = GameSession::start(["A", "B", "C"], Some(21)).unwrap();
        let view = game.view(PlayerId::new(0)).unwrap();
        let open = view.solution_candidates(Category::Room);
        let here = view.current_room();

        match HeuristicProvider::new().choose_move(&view) {
            None => assert!(open.contains(&Card::Room(here))),
            Some(room) => {
                assert!(!open.contains(&Card::Room(here)));
                assert!(view.neighbors().contains(&room));
            }
        }
    }
}
