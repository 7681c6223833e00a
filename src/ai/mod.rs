//! Decision providers and the table driver.
//!
//! Every seat is backed by a `DecisionProvider`. The `Table` asks the active
//! seat's provider for a move, a suggestion and an accusation, and applies the
//! answers through the same `GameSession` operations a front-end would call.
//!
//! - `ScriptedProvider`: replays queued turns
//! - `RandomProvider`: uniform legal choices, never accuses
//! - `HeuristicProvider`: plays from its own notebook

pub mod heuristic;
pub mod provider;
pub mod random;
pub mod scripted;
pub mod table;

pub use heuristic::HeuristicProvider;
pub use provider::DecisionProvider;
pub use random::RandomProvider;
pub use scripted::{ScriptedProvider, ScriptedTurn};
pub use table::{Table, TurnSummary};
