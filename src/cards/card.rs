//! Card identities.
//!
//! A `Card` is a tagged identity: the same value names a physical card in a
//! hand and a component of a suggestion, accusation or solution.

use serde::{Deserialize, Serialize};

use crate::board::RoomId;

/// Suspect identifier, an index into the catalog's suspect list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SuspectId(pub u8);

impl SuspectId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Weapon identifier, an index into the catalog's weapon list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeaponId(pub u8);

impl WeaponId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The three card categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Suspect,
    Weapon,
    Room,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Suspect, Category::Weapon, Category::Room];
}

/// A suspect, weapon or room card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    Suspect(SuspectId),
    Weapon(WeaponId),
    Room(RoomId),
}

impl Card {
    #[must_use]
    pub fn category(self) -> Category {
        match self {
            Card::Suspect(_) => Category::Suspect,
            Card::Weapon(_) => Category::Weapon,
            Card::Room(_) => Category::Room,
        }
    }
}

impl From<SuspectId> for Card {
    fn from(id: SuspectId) -> Self {
        Card::Suspect(id)
    }
}

impl From<WeaponId> for Card {
    fn from(id: WeaponId) -> Self {
        Card::Weapon(id)
    }
}

impl From<RoomId> for Card {
    fn from(id: RoomId) -> Self {
        Card::Room(id)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Suspect(id) => write!(f, "Suspect({})", id.0),
            Card::Weapon(id) => write!(f, "Weapon({})", id.0),
            Card::Room(id) => write!(f, "Room({})", id.0),
        }
    }
}
