//! Per-seat game state.

pub mod state;

pub use state::PlayerState;
