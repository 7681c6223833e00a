//! Card catalog: names and starting rooms for every card identity.
//!
//! The catalog is built once at setup and is read-only afterwards. It also
//! fixes the canonical deck order: suspects, then weapons, then rooms.

use rustc_hash::FxHashMap;

use super::card::{Card, Category, SuspectId, WeaponId};
use crate::board::{BoardGraph, RoomId};
use crate::core::{GameConfig, GameError, Result};

/// A suspect with the room their token starts in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suspect {
    pub name: String,
    pub start_room: RoomId,
}

/// Catalog of every card in the game.
///
/// ```
/// use clue_engine::board::BoardGraph;
/// use clue_engine::cards::{Card, CardCatalog};
/// use clue_engine::core::GameConfig;
///
/// let config = GameConfig::classic();
/// let board = BoardGraph::from_config(&config).unwrap();
/// let catalog = CardCatalog::from_config(&config, &board).unwrap();
///
/// let knife = catalog.find("Knife").unwrap();
/// assert_eq!(catalog.name_of(knife), "Knife");
/// assert_eq!(catalog.all_cards().len(), 21);
/// ```
#[derive(Clone, Debug)]
pub struct CardCatalog {
    suspects: Vec<Suspect>,
    weapons: Vec<String>,
    rooms: Vec<String>,
    by_name: FxHashMap<String, Card>,
}

impl CardCatalog {
    /// Build the catalog for a configuration and its board.
    pub fn from_config(config: &GameConfig, board: &BoardGraph) -> Result<Self> {
        if config.suspects.is_empty() || config.weapons.is_empty() {
            return Err(GameError::SetupInvariant(
                "deck needs at least one suspect and one weapon".into(),
            ));
        }
        if config.suspects.len() > u8::MAX as usize || config.weapons.len() > u8::MAX as usize {
            return Err(GameError::SetupInvariant("too many cards in one category".into()));
        }

        let mut suspects = Vec::with_capacity(config.suspects.len());
        for suspect in &config.suspects {
            let start_room = board.find(&suspect.start_room).ok_or_else(|| {
                GameError::SetupInvariant(format!(
                    "{} starts in unknown room {:?}",
                    suspect.name, suspect.start_room
                ))
            })?;
            suspects.push(Suspect {
                name: suspect.name.clone(),
                start_room,
            });
        }

        let mut catalog = Self {
            suspects,
            weapons: config.weapons.clone(),
            rooms: board.rooms().map(|r| board.name(r).to_string()).collect(),
            by_name: FxHashMap::default(),
        };

        for card in catalog.all_cards() {
            let name = catalog.name_of(card).to_string();
            if catalog.by_name.insert(name.clone(), card).is_some() {
                return Err(GameError::SetupInvariant(format!("duplicate card name {name:?}")));
            }
        }

        Ok(catalog)
    }

    /// Every card in canonical deck order.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        Category::ALL.into_iter().flat_map(|c| self.cards_in(c)).collect()
    }

    /// Cards of a single category in catalog order.
    #[must_use]
    pub fn cards_in(&self, category: Category) -> Vec<Card> {
        match category {
            Category::Suspect => self.suspects().map(Card::Suspect).collect(),
            Category::Weapon => self.weapons().map(Card::Weapon).collect(),
            Category::Room => (0..self.rooms.len() as u8).map(|i| Card::Room(RoomId(i))).collect(),
        }
    }

    pub fn suspects(&self) -> impl Iterator<Item = SuspectId> {
        (0..self.suspects.len() as u8).map(SuspectId)
    }

    pub fn weapons(&self) -> impl Iterator<Item = WeaponId> {
        (0..self.weapons.len() as u8).map(WeaponId)
    }

    #[must_use]
    pub fn suspect_count(&self) -> usize {
        self.suspects.len()
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.suspects.len() + self.weapons.len() + self.rooms.len()
    }

    /// Whether `card` refers to an entry in this catalog.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        match card {
            Card::Suspect(id) => id.index() < self.suspects.len(),
            Card::Weapon(id) => id.index() < self.weapons.len(),
            Card::Room(id) => id.index() < self.rooms.len(),
        }
    }

    /// Display name of a card.
    #[must_use]
    pub fn name_of(&self, card: Card) -> &str {
        match card {
            Card::Suspect(id) => &self.suspects[id.index()].name,
            Card::Weapon(id) => &self.weapons[id.index()],
            Card::Room(id) => &self.rooms[id.index()],
        }
    }

    /// Look up a card by its display name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<Card> {
        self.by_name.get(name).copied()
    }

    pub fn suspect(&self, name: &str) -> Result<SuspectId> {
        match self.find(name) {
            Some(Card::Suspect(id)) => Ok(id),
            _ => Err(GameError::UnknownName(name.to_string())),
        }
    }

    pub fn weapon(&self, name: &str) -> Result<WeaponId> {
        match self.find(name) {
            Some(Card::Weapon(id)) => Ok(id),
            _ => Err(GameError::UnknownName(name.to_string())),
        }
    }

    pub fn room(&self, name: &str) -> Result<RoomId> {
        match self.find(name) {
            Some(Card::Room(id)) => Ok(id),
            _ => Err(GameError::UnknownName(name.to_string())),
        }
    }

    /// Starting room of a suspect's token.
    #[must_use]
    pub fn start_room(&self, suspect: SuspectId) -> RoomId {
        self.suspects[suspect.index()].start_room
    }
}
