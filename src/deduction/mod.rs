//! Deduction tracking over hidden card ownership.
//!
//! Mirrors the pencil-and-paper detective notebook: a grid of players by
//! cards, filled in from refutations and passes.

pub mod belief;
pub mod tracker;

pub use belief::{Belief, BeliefState, Holder};
pub use tracker::DeductionTracker;
