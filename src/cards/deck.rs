//! Solution selection and dealing.
//!
//! One card per category goes into the case file; the rest of the deck is
//! shuffled and dealt round-robin so hand sizes differ by at most one.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::card::{Card, Category, SuspectId, WeaponId};
use super::catalog::CardCatalog;
use crate::board::RoomId;
use crate::core::{GameError, GameRng, Result};

/// Fewest players a game supports.
pub const MIN_PLAYERS: usize = 3;
/// Most players a game supports.
pub const MAX_PLAYERS: usize = 6;

/// The three case-file cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Solution {
    pub suspect: SuspectId,
    pub weapon: WeaponId,
    pub room: RoomId,
}

impl Solution {
    #[must_use]
    pub fn new(suspect: SuspectId, weapon: WeaponId, room: RoomId) -> Self {
        Self { suspect, weapon, room }
    }

    #[must_use]
    pub fn cards(&self) -> [Card; 3] {
        [Card::Suspect(self.suspect), Card::Weapon(self.weapon), Card::Room(self.room)]
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards().contains(&card)
    }

    /// Whether all three components match.
    #[must_use]
    pub fn matches(&self, suspect: SuspectId, weapon: WeaponId, room: RoomId) -> bool {
        self.suspect == suspect && self.weapon == weapon && self.room == room
    }
}

/// A solution plus one hand per seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub solution: Solution,
    pub hands: Vec<Vec<Card>>,
}

impl Deal {
    /// Check a deal against the catalog: every card appears exactly once
    /// across the solution and the hands, and hand sizes differ by at most one.
    pub fn validate(&self, catalog: &CardCatalog) -> Result<()> {
        check_player_count(self.hands.len())?;

        let mut seen: FxHashSet<Card> = FxHashSet::default();
        for card in self.solution.cards().into_iter().chain(self.hands.iter().flatten().copied()) {
            if !catalog.contains(card) {
                return Err(GameError::SetupInvariant(format!("{card} is not in the deck")));
            }
            if !seen.insert(card) {
                return Err(GameError::SetupInvariant(format!("{card} dealt twice")));
            }
        }
        if seen.len() != catalog.deck_size() {
            return Err(GameError::SetupInvariant(format!(
                "deal covers {} of {} cards",
                seen.len(),
                catalog.deck_size()
            )));
        }

        let largest = self.hands.iter().map(Vec::len).max().unwrap_or(0);
        let smallest = self.hands.iter().map(Vec::len).min().unwrap_or(0);
        if largest - smallest > 1 {
            return Err(GameError::SetupInvariant(format!(
                "hand sizes range from {smallest} to {largest}"
            )));
        }
        Ok(())
    }
}

pub(crate) fn check_player_count(count: usize) -> Result<()> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        Ok(())
    } else {
        Err(GameError::InvalidPlayerCount(count))
    }
}

/// Pick the solution uniformly per category, then shuffle and deal the rest.
pub fn deal_and_select_solution(
    catalog: &CardCatalog,
    player_count: usize,
    rng: &mut GameRng,
) -> Result<Deal> {
    check_player_count(player_count)?;

    let mut pick = |category: Category| -> Result<Card> {
        rng.choose(&catalog.cards_in(category))
            .copied()
            .ok_or_else(|| GameError::SetupInvariant(format!("no {category:?} cards")))
    };
    let picked = (pick(Category::Suspect)?, pick(Category::Weapon)?, pick(Category::Room)?);
    let (suspect, weapon, room) = match picked {
        (Card::Suspect(s), Card::Weapon(w), Card::Room(r)) => (s, w, r),
        _ => {
            return Err(GameError::SetupInvariant(
                "catalog returned a card of the wrong category".into(),
            ))
        }
    };
    let solution = Solution::new(suspect, weapon, room);

    let mut deck: Vec<Card> = catalog
        .all_cards()
        .into_iter()
        .filter(|card| !solution.contains(*card))
        .collect();
    rng.shuffle(&mut deck);

    let mut hands = vec![Vec::new(); player_count];
    for (i, card) in deck.into_iter().enumerate() {
        hands[i % player_count].push(card);
    }

    let hand_sizes: Vec<usize> = hands.iter().map(Vec::len).collect();
    debug!(player_count, hand_sizes = ?hand_sizes, "dealt hands");

    Ok(Deal { solution, hands })
}
