//! Drives a session with one provider per seat.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::provider::DecisionProvider;
use crate::board::RoomId;
use crate::core::{GameError, PlayerId, PlayerMap, Result};
use crate::game::GameSession;
use crate::rules::{Accusation, AccusationOutcome, GameResult};
use crate::suggestion::SuggestionRecord;

/// What happened on one driven turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSummary {
    pub player: PlayerId,
    pub moved_to: Option<RoomId>,
    pub suggestion: Option<SuggestionRecord>,
    pub accusation: Option<AccusationOutcome>,
}

impl TurnSummary {
    fn new(player: PlayerId) -> Self {
        Self {
            player,
            moved_to: None,
            suggestion: None,
            accusation: None,
        }
    }
}

/// A session with a decision provider behind every seat.
pub struct Table {
    session: GameSession,
    seats: PlayerMap<Box<dyn DecisionProvider>>,
}

impl Table {
    /// Seat one provider per player, in seat order.
    pub fn new(session: GameSession, providers: Vec<Box<dyn DecisionProvider>>) -> Result<Self> {
        if providers.len() != session.player_count() {
            return Err(GameError::SetupInvariant(format!(
                "{} providers for {} players",
                providers.len(),
                session.player_count()
            )));
        }
        Ok(Self {
            session,
            seats: PlayerMap::from_vec(providers),
        })
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Mutable access for front-ends that mix driven and manual turns.
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    #[must_use]
    pub fn into_session(self) -> GameSession {
        self.session
    }

    /// Play the active seat's whole turn.
    ///
    /// Unusable provider choices (a non-adjacent room, an unknown card) are
    /// logged and treated as passing on that step.
    pub fn play_turn(&mut self) -> Result<TurnSummary> {
        let Self { session, seats } = self;
        if session.is_over() {
            return Err(GameError::GameOver);
        }

        let player = session.current_turn_state().active_player;
        let mut summary = TurnSummary::new(player);

        let choice = seats[player].choose_move(&session.view(player)?);
        match choice {
            Some(room) => match session.move_to(player, room) {
                Ok(()) => summary.moved_to = Some(room),
                Err(err @ GameError::IllegalMove { .. }) => {
                    warn!(player = %player, error = %err, "provider chose an illegal move");
                    session.skip_move(player)?;
                }
                Err(err) => return Err(err),
            },
            None => session.skip_move(player)?,
        }

        let choice = seats[player].choose_suggestion(&session.view(player)?);
        if let Some((suspect, weapon)) = choice {
            let resolved = session.suggest_with(player, suspect, weapon, |refuter, matches| {
                seats[refuter].choose_reveal(player, matches)
            });
            match resolved {
                Ok(record) => summary.suggestion = Some(record),
                Err(err @ GameError::UnknownName(_)) => {
                    warn!(player = %player, error = %err, "provider chose an unknown card");
                }
                Err(err) => return Err(err),
            }
        }

        if session.player(player)?.can_accuse() {
            let choice = seats[player].choose_accusation(&session.view(player)?);
            if let Some(Accusation { suspect, weapon, room }) = choice {
                match session.accuse(player, suspect, weapon, room) {
                    Ok(outcome) => summary.accusation = Some(outcome),
                    Err(err @ GameError::UnknownName(_)) => {
                        warn!(
                            player = %player,
                            error = %err,
                            "provider accused with an unknown card"
                        );
                    }
                    Err(err) => return Err(err),
                }
            }
        }

        if !session.is_over() {
            session.end_turn(player)?;
        }
        debug!(player = %player, "driven turn finished");
        Ok(summary)
    }

    /// Play turns until the game ends or `max_turns` have been played.
    pub fn play_until_finished(&mut self, max_turns: u32) -> Result<Option<GameResult>> {
        for _ in 0..max_turns {
            if self.session.is_over() {
                break;
            }
            self.play_turn()?;
        }
        Ok(self.session.result())
    }
}
