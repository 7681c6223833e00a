//! # clue-engine
//!
//! A turn-based deduction engine for the classic who/what/where mystery
//! game: one suspect, one weapon and one room are hidden in the case file,
//! and 3 to 6 players move around the mansion making suggestions until
//! someone accuses correctly.
//!
//! ## Design Principles
//!
//! 1. **Rules in one place**: every choice, human or AI, goes through the
//!    same `GameSession` operations.
//!
//! 2. **Reject, never corrupt**: an illegal operation returns a `GameError`
//!    and leaves the session untouched.
//!
//! 3. **Reproducible**: all randomness comes from a seeded `GameRng`, and the
//!    seed is kept on the session.
//!
//! ## Modules
//!
//! - `core`: player ids, RNG, configuration, errors
//! - `board`: room graph and adjacency
//! - `cards`: card identities, the catalog, dealing and the solution
//! - `players`: per-seat state
//! - `suggestion`: refutation search and the suggestion history
//! - `deduction`: per-observer notebooks
//! - `turn`: the turn state machine
//! - `rules`: accusations and game results
//! - `game`: the session, its builder and per-seat views
//! - `ai`: decision providers and the table driver
//!
//! ## Example
//!
//! ```
//! use clue_engine::{GameSession, PlayerId};
//!
//! let mut game = GameSession::start(["Ann", "Ben", "Cat"], Some(3)).unwrap();
//! let me = PlayerId::new(0);
//!
//! let next = game.legal_moves(me).unwrap()[0];
//! game.move_to(me, next).unwrap();
//!
//! let suspect = game.catalog().suspect("Professor Plum").unwrap();
//! let weapon = game.catalog().weapon("Knife").unwrap();
//! let record = game.suggest(me, suspect, weapon).unwrap();
//! assert_eq!(record.room, next);
//!
//! game.end_turn(me).unwrap();
//! assert_eq!(game.current_turn_state().active_player, PlayerId::new(1));
//! ```

pub mod ai;
pub mod board;
pub mod cards;
pub mod core;
pub mod deduction;
pub mod game;
pub mod players;
pub mod rules;
pub mod suggestion;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, PassageConfig, PlayerId, PlayerMap, Result, SuspectConfig,
};

pub use crate::board::{BoardGraph, RoomId};

pub use crate::cards::{
    deal_and_select_solution, Card, CardCatalog, Category, Deal, Solution, SuspectId, WeaponId,
    MAX_PLAYERS, MIN_PLAYERS,
};

pub use crate::players::PlayerState;

pub use crate::suggestion::{
    Refutation, Shown, SuggestionEngine, SuggestionRecord, SuggestionView,
};

pub use crate::deduction::{Belief, BeliefState, DeductionTracker, Holder};

pub use crate::turn::{TurnManager, TurnPhase, TurnState};

pub use crate::rules::{Accusation, AccusationOutcome, AccusationResolver, GameResult};

pub use crate::game::{GameBuilder, GameSession, PlayerView};

pub use crate::ai::{
    DecisionProvider, HeuristicProvider, RandomProvider, ScriptedProvider, ScriptedTurn, Table,
    TurnSummary,
};
