//! What one seat is allowed to see.

use smallvec::SmallVec;

use super::session::GameSession;
use crate::board::{BoardGraph, RoomId};
use crate::cards::{Card, CardCatalog, Category};
use crate::core::PlayerId;
use crate::deduction::{BeliefState, Holder};
use crate::players::PlayerState;
use crate::suggestion::SuggestionView;
use crate::turn::TurnState;

/// Read-only window onto a session for one observer.
///
/// Exposes the observer's own hand and notebook, the public board and
/// catalog, and the history filtered to what the observer was shown.
#[derive(Clone, Copy, Debug)]
pub struct PlayerView<'a> {
    session: &'a GameSession,
    me: PlayerId,
}

impl<'a> PlayerView<'a> {
    pub(super) fn new(session: &'a GameSession, me: PlayerId) -> Self {
        Self { session, me }
    }

    #[must_use]
    pub fn me(&self) -> PlayerId {
        self.me
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.session.player_count()
    }

    #[must_use]
    pub fn hand(&self) -> &'a [Card] {
        self.seat().hand()
    }

    #[must_use]
    pub fn current_room(&self) -> RoomId {
        self.seat().current_room
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.seat().eliminated
    }

    /// Neighbors of the current room, whether or not a move is allowed now.
    #[must_use]
    pub fn neighbors(&self) -> &'a [RoomId] {
        self.session.board().neighbors_of(self.current_room())
    }

    #[must_use]
    pub fn board(&self) -> &'a BoardGraph {
        self.session.board()
    }

    #[must_use]
    pub fn catalog(&self) -> &'a CardCatalog {
        self.session.catalog()
    }

    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.session.current_turn_state()
    }

    #[must_use]
    pub fn beliefs(&self) -> &'a BeliefState {
        self.session.tracker().beliefs(self.me)
    }

    #[must_use]
    pub fn possible_holders(&self, card: Card) -> SmallVec<[Holder; 7]> {
        self.session.tracker().possible_holders_for(self.me, card)
    }

    #[must_use]
    pub fn solution_candidates(&self, category: Category) -> Vec<Card> {
        self.session.tracker().solution_candidates(self.me, category)
    }

    #[must_use]
    pub fn deduced(&self) -> Vec<(Card, Holder)> {
        self.session.tracker().deduced(self.me)
    }

    pub fn history(&self) -> impl Iterator<Item = SuggestionView> + 'a {
        let me = self.me;
        self.session.history().iter().map(move |r| r.view_for(me))
    }

    fn seat(&self) -> &'a PlayerState {
        self.session.seat(self.me)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{SuspectId, WeaponId};
    use crate::suggestion::Shown;

    #[test]
    fn test_view_hides_other_refutations() {
        let mut game = GameSession::start(["A", "B", "C"], Some(9)).unwrap();
        let record = game.suggest(PlayerId::new(0), SuspectId(0), WeaponId(0)).unwrap();

        for seat in PlayerId::all(3) {
            let view = game.view(seat).unwrap();
            let seen: Vec<_> = view.history().collect();
            assert_eq!(seen.len(), 1);
            let expected = match record.refutation {
                None => Shown::Nothing,
                Some(r) if seat == PlayerId::new(0) || seat == r.refuter => Shown::Card(r.card),
                Some(_) => Shown::Hidden,
            };
            assert_eq!(seen[0].shown, expected);
        }
    }

    #[test]
    fn test_view_knows_own_hand() {
        let game = GameSession::start(["A", "B", "C", "D"], Some(2)).unwrap();
        let view = game.view(PlayerId::new(3)).unwrap();
        assert_eq!(view.hand(), game.hand(PlayerId::new(3)).unwrap());
        for &card in view.hand() {
            assert_eq!(view.possible_holders(card).as_slice(), &[Holder::Player(PlayerId::new(3))]);
        }
    }
}
