//! Game-ending rules: accusations and results.
//!
//! A correct accusation wins outright. A wrong one costs the accuser the
//! right to accuse again but nothing else.

pub mod accusation;
pub mod result;

pub use accusation::{Accusation, AccusationOutcome, AccusationResolver};
pub use result::GameResult;
