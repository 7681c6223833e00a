//! The seam between the table driver and whatever makes a seat's choices.

use crate::board::RoomId;
use crate::cards::{Card, SuspectId, WeaponId};
use crate::core::PlayerId;
use crate::game::PlayerView;
use crate::rules::Accusation;

/// Decides one seat's choices.
///
/// Providers only ever see a `PlayerView`, so a provider can never peek at
/// other hands or the case file.
pub trait DecisionProvider: Send {
    /// Room to move to, or `None` to stay.
    fn choose_move(&mut self, view: &PlayerView<'_>) -> Option<RoomId>;

    /// Suspect and weapon to suggest in the current room, or `None` to pass.
    fn choose_suggestion(&mut self, view: &PlayerView<'_>) -> Option<(SuspectId, WeaponId)>;

    /// Accusation to make, or `None` to keep playing.
    fn choose_accusation(&mut self, view: &PlayerView<'_>) -> Option<Accusation>;

    /// Which of `matches` to show `suggester`. `matches` is never empty.
    fn choose_reveal(&mut self, _suggester: PlayerId, matches: &[Card]) -> Card {
        matches[0]
    }
}
