//! Game configuration.
//!
//! A `GameConfig` describes the mansion and the deck:
//! - rooms and the passages between them
//! - suspects, each with a starting room
//! - weapons
//! - an optional stalemate guard
//!
//! Names are resolved to ids when the session is built, so a typo in a
//! passage or starting room surfaces as a setup error rather than a panic.

use serde::{Deserialize, Serialize};

/// A suspect and the room their token starts in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspectConfig {
    pub name: String,
    pub start_room: String,
}

/// A passage between two rooms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageConfig {
    pub from: String,
    pub to: String,
    /// Two-way unless declared otherwise.
    pub one_way: bool,
}

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Room names in board order.
    pub rooms: Vec<String>,

    pub passages: Vec<PassageConfig>,

    /// Suspects in seat-assignment order.
    pub suspects: Vec<SuspectConfig>,

    pub weapons: Vec<String>,

    /// End the game with no winner after this many full rounds.
    pub max_rounds: Option<u32>,
}

impl GameConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The reference mansion: nine rooms, six suspects, six weapons, and
    /// secret passages between opposite corners.
    #[must_use]
    pub fn classic() -> Self {
        let mut config = Self::new();
        for room in [
            "Kitchen",
            "Ballroom",
            "Conservatory",
            "Dining Room",
            "Billiard Room",
            "Library",
            "Lounge",
            "Hall",
            "Study",
        ] {
            config = config.with_room(room);
        }

        for (a, b) in [
            ("Kitchen", "Ballroom"),
            ("Kitchen", "Dining Room"),
            ("Kitchen", "Study"),
            ("Ballroom", "Conservatory"),
            ("Ballroom", "Billiard Room"),
            ("Conservatory", "Library"),
            ("Conservatory", "Lounge"),
            ("Dining Room", "Billiard Room"),
            ("Dining Room", "Lounge"),
            ("Billiard Room", "Hall"),
            ("Billiard Room", "Library"),
            ("Library", "Study"),
            ("Lounge", "Hall"),
            ("Hall", "Study"),
        ] {
            config = config.with_passage(a, b);
        }

        for (suspect, start) in [
            ("Miss Scarlett", "Lounge"),
            ("Colonel Mustard", "Dining Room"),
            ("Mrs. White", "Kitchen"),
            ("Mr. Green", "Hall"),
            ("Mrs. Peacock", "Conservatory"),
            ("Professor Plum", "Study"),
        ] {
            config = config.with_suspect(suspect, start);
        }

        for weapon in ["Candlestick", "Revolver", "Rope", "Lead Pipe", "Wrench", "Knife"] {
            config = config.with_weapon(weapon);
        }

        config
    }

    #[must_use]
    pub fn with_room(mut self, name: impl Into<String>) -> Self {
        self.rooms.push(name.into());
        self
    }

    /// Add a two-way passage.
    #[must_use]
    pub fn with_passage(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.passages.push(PassageConfig {
            from: a.into(),
            to: b.into(),
            one_way: false,
        });
        self
    }

    /// Add a passage that can only be walked from `from` to `to`.
    #[must_use]
    pub fn with_one_way(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.passages.push(PassageConfig {
            from: from.into(),
            to: to.into(),
            one_way: true,
        });
        self
    }

    #[must_use]
    pub fn with_suspect(mut self, name: impl Into<String>, start_room: impl Into<String>) -> Self {
        self.suspects.push(SuspectConfig {
            name: name.into(),
            start_room: start_room.into(),
        });
        self
    }

    #[must_use]
    pub fn with_weapon(mut self, name: impl Into<String>) -> Self {
        self.weapons.push(name.into());
        self
    }

    /// Set the stalemate guard.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    /// Total number of cards in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.suspects.len() + self.weapons.len() + self.rooms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_sizes() {
        let config = GameConfig::classic();
        assert_eq!(config.rooms.len(), 9);
        assert_eq!(config.suspects.len(), 6);
        assert_eq!(config.weapons.len(), 6);
        assert_eq!(config.deck_size(), 21);
        assert_eq!(config.max_rounds, None);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_room("A")
            .with_room("B")
            .with_one_way("A", "B")
            .with_passage("B", "A")
            .with_suspect("Ann", "A")
            .with_weapon("Spoon")
            .with_max_rounds(10);

        assert_eq!(config.rooms, vec!["A", "B"]);
        assert!(config.passages[0].one_way);
        assert!(!config.passages[1].one_way);
        assert_eq!(config.suspects[0].start_room, "A");
        assert_eq!(config.max_rounds, Some(10));
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::classic();
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
