//! One participant's hand, position and standing.
//!
//! `PlayerState` is a plain container. Legality (adjacency, turn order,
//! accusation rights) is checked by the session before any mutator runs.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::RoomId;
use crate::cards::{Card, SuspectId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,

    /// Suspect token this seat plays, if there are enough suspects.
    pub character: Option<SuspectId>,

    hand: Vec<Card>,

    pub current_room: RoomId,

    /// Lost the right to accuse after a wrong accusation.
    pub eliminated: bool,

    /// Still seated at the table.
    pub active: bool,
}

impl PlayerState {
    /// Seat a player with the hand they were dealt.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        character: Option<SuspectId>,
        start_room: RoomId,
        hand: Vec<Card>,
    ) -> Self {
        Self {
            name: name.into(),
            character,
            hand,
            current_room: start_room,
            eliminated: false,
            active: true,
        }
    }

    /// The dealt hand in deal order. Never changes after setup.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Cards from `cards` that this player holds, in hand order.
    #[must_use]
    pub fn matching(&self, cards: &[Card]) -> SmallVec<[Card; 3]> {
        self.hand.iter().copied().filter(|c| cards.contains(c)).collect()
    }

    /// Move without checking adjacency.
    pub fn move_to(&mut self, room: RoomId) {
        self.current_room = room;
    }

    /// Remove accusation rights. The player keeps moving, suggesting and
    /// refuting.
    pub fn eliminate(&mut self) {
        self.eliminated = true;
    }

    /// Leave the table.
    pub fn withdraw(&mut self) {
        self.active = false;
    }

    /// Whether this player may still make an accusation.
    #[must_use]
    pub fn can_accuse(&self) -> bool {
        self.active && !self.eliminated
    }
}
