//! Core engine types: seats, RNG, configuration, errors.
//!
//! Everything else in the crate is built from these.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{GameConfig, PassageConfig, SuspectConfig};
pub use error::{GameError, Result};
