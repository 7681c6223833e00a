//! Session setup.

use rustc_hash::FxHashSet;
use tracing::info;

use super::session::GameSession;
use crate::board::{BoardGraph, RoomId};
use crate::cards::{deal_and_select_solution, CardCatalog, Deal, SuspectId};
use crate::core::{GameConfig, GameError, GameRng, PlayerId, PlayerMap, Result};
use crate::deduction::DeductionTracker;
use crate::players::PlayerState;
use crate::suggestion::SuggestionEngine;
use crate::turn::TurnManager;

/// Builder for a `GameSession`.
///
/// ```
/// use clue_engine::game::GameBuilder;
///
/// let session = GameBuilder::new()
///     .players(["Ann", "Ben", "Cat"])
///     .seed(7)
///     .build()
///     .unwrap();
/// assert_eq!(session.player_count(), 3);
/// assert_eq!(session.seed(), 7);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    names: Vec<String>,
    seed: Option<u64>,
    config: GameConfig,
    deal: Option<Deal>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            seed: None,
            config: GameConfig::classic(),
            deal: None,
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one player. Seat order is insertion order.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    #[must_use]
    pub fn players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Seed the dealing and reveal streams.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a fixed deal instead of a random one.
    #[must_use]
    pub fn deal(mut self, deal: Deal) -> Self {
        self.deal = Some(deal);
        self
    }

    /// Build the board, deal, and seat the players.
    pub fn build(self) -> Result<GameSession> {
        let player_count = self.names.len();
        crate::cards::deck::check_player_count(player_count)?;

        let mut seen = FxHashSet::default();
        for name in &self.names {
            if name.trim().is_empty() {
                return Err(GameError::SetupInvariant("player names must not be empty".into()));
            }
            if !seen.insert(name.as_str()) {
                return Err(GameError::SetupInvariant(format!("duplicate player name {name:?}")));
            }
        }

        let board = BoardGraph::from_config(&self.config)?;
        let catalog = CardCatalog::from_config(&self.config, &board)?;
        let rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);

        let deal = match self.deal {
            Some(deal) => {
                deal.validate(&catalog)?;
                if deal.hands.len() != player_count {
                    return Err(GameError::SetupInvariant(format!(
                        "deal has {} hands for {player_count} players",
                        deal.hands.len()
                    )));
                }
                deal
            }
            None => deal_and_select_solution(&catalog, player_count, &mut rng.for_context("deal"))?,
        };

        let Deal { solution, hands } = deal;
        let seats: Vec<PlayerState> = self
            .names
            .into_iter()
            .zip(hands)
            .enumerate()
            .map(|(seat, (name, hand))| {
                let character = (seat < catalog.suspect_count()).then_some(SuspectId(seat as u8));
                let start = character.map_or(RoomId(0), |c| catalog.start_room(c));
                PlayerState::new(name, character, start, hand)
            })
            .collect();
        let players = PlayerMap::from_vec(seats);

        let tracker = DeductionTracker::new(catalog.all_cards(), &players);

        info!(
            players = player_count,
            seed = rng.seed(),
            rooms = board.room_count(),
            deck = catalog.deck_size(),
            "game started"
        );

        Ok(GameSession::from_parts(
            rng.seed(),
            self.config.max_rounds,
            board,
            catalog,
            solution,
            players,
            SuggestionEngine::new(),
            tracker,
            TurnManager::new(PlayerId::new(0)),
            rng.for_context("reveal"),
        ))
    }
}
