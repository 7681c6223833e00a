//! Suggestion resolution.
//!
//! Starting with the seat after the suggester, each active player is asked in
//! turn. The first one holding any named card shows exactly one of them and
//! the search stops there.

use im::Vector;
use smallvec::SmallVec;
use tracing::{info, warn};

use super::record::{Refutation, SuggestionRecord};
use crate::cards::{Card, SuspectId, WeaponId};
use crate::core::{PlayerId, PlayerMap};
use crate::deduction::DeductionTracker;
use crate::players::PlayerState;

/// Outcome of the refutation search before a card is chosen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefutationSearch {
    /// Players asked who could not refute, in asking order.
    pub passed: SmallVec<[PlayerId; 5]>,
    /// First player able to refute and the named cards they hold.
    pub refuter: Option<(PlayerId, SmallVec<[Card; 3]>)>,
}

/// Ask the other active players in seat order who can refute `cards`.
#[must_use]
pub fn find_refuter(
    players: &PlayerMap<PlayerState>,
    suggester: PlayerId,
    cards: &[Card],
) -> RefutationSearch {
    let mut passed = SmallVec::new();
    for seat in suggester.others_in_order(players.player_count()) {
        let player = &players[seat];
        if !player.active {
            continue;
        }
        let matches = player.matching(cards);
        if !matches.is_empty() {
            return RefutationSearch {
                passed,
                refuter: Some((seat, matches)),
            };
        }
        passed.push(seat);
    }
    RefutationSearch { passed, refuter: None }
}

/// Resolves suggestions and keeps the append-only history.
#[derive(Clone, Debug, Default)]
pub struct SuggestionEngine {
    history: Vector<SuggestionRecord>,
}

impl SuggestionEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a suggestion in the suggester's current room.
    ///
    /// `reveal` is asked which matching card the refuter shows; an answer
    /// outside the matching cards falls back to the first match. The record
    /// is appended to the history and fed to the tracker.
    pub fn make_suggestion(
        &mut self,
        turn: u32,
        suggester: PlayerId,
        suspect: SuspectId,
        weapon: WeaponId,
        players: &PlayerMap<PlayerState>,
        tracker: &mut DeductionTracker,
        mut reveal: impl FnMut(PlayerId, &[Card]) -> Card,
    ) -> SuggestionRecord {
        let room = players[suggester].current_room;
        let named = [Card::Suspect(suspect), Card::Weapon(weapon), Card::Room(room)];
        let search = find_refuter(players, suggester, &named);

        let refutation = search.refuter.map(|(refuter, matches)| {
            let chosen = reveal(refuter, &matches);
            let card = if matches.contains(&chosen) {
                chosen
            } else {
                warn!(
                    refuter = %refuter,
                    card = %chosen,
                    "reveal choice is not a matching card, showing first match"
                );
                matches[0]
            };
            Refutation { refuter, card }
        });

        let record = SuggestionRecord {
            turn,
            suggester,
            room,
            suspect,
            weapon,
            passed: search.passed,
            refutation,
        };

        info!(
            suggester = %suggester,
            room = %room,
            suspect = suspect.0,
            weapon = weapon.0,
            refuter = ?record.refuter(),
            "suggestion resolved"
        );

        tracker.observe_suggestion(&record);
        self.history.push_back(record.clone());
        record
    }

    /// Every suggestion so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<SuggestionRecord> {
        &self.history
    }
}
