//! Suggestion records and their per-observer visibility.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::RoomId;
use crate::cards::{Card, SuspectId, WeaponId};
use crate::core::PlayerId;

/// The refuting player and the card they showed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refutation {
    pub refuter: PlayerId,
    pub card: Card,
}

/// What a particular observer learned about the shown card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shown {
    /// The observer saw the card (suggester or refuter).
    Card(Card),
    /// A card changed hands but the observer did not see it.
    Hidden,
    /// Nobody could refute.
    Nothing,
}

/// An immutable entry in the suggestion history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRecord {
    /// Turn number the suggestion was made on.
    pub turn: u32,
    pub suggester: PlayerId,
    /// Always the suggester's room at the time of the suggestion.
    pub room: RoomId,
    pub suspect: SuspectId,
    pub weapon: WeaponId,
    /// Players asked before the refuter (or everyone asked, if nobody
    /// refuted), in the order they were asked. Public information.
    pub passed: SmallVec<[PlayerId; 5]>,
    pub refutation: Option<Refutation>,
}

impl SuggestionRecord {
    /// The suspect, weapon and room cards named, in that order.
    #[must_use]
    pub fn cards(&self) -> [Card; 3] {
        [Card::Suspect(self.suspect), Card::Weapon(self.weapon), Card::Room(self.room)]
    }

    #[must_use]
    pub fn refuter(&self) -> Option<PlayerId> {
        self.refutation.map(|r| r.refuter)
    }

    /// What `observer` is entitled to know about the shown card.
    #[must_use]
    pub fn shown_to(&self, observer: PlayerId) -> Shown {
        match self.refutation {
            None => Shown::Nothing,
            Some(r) if observer == self.suggester || observer == r.refuter => Shown::Card(r.card),
            Some(_) => Shown::Hidden,
        }
    }

    /// This record as `observer` sees it.
    #[must_use]
    pub fn view_for(&self, observer: PlayerId) -> SuggestionView {
        SuggestionView {
            turn: self.turn,
            suggester: self.suggester,
            room: self.room,
            suspect: self.suspect,
            weapon: self.weapon,
            passed: self.passed.clone(),
            refuter: self.refuter(),
            shown: self.shown_to(observer),
        }
    }
}

/// A suggestion with the shown card filtered for one observer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionView {
    pub turn: u32,
    pub suggester: PlayerId,
    pub room: RoomId,
    pub suspect: SuspectId,
    pub weapon: WeaponId,
    pub passed: SmallVec<[PlayerId; 5]>,
    pub refuter: Option<PlayerId>,
    pub shown: Shown,
}
