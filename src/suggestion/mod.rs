//! Suggestions: the refutation protocol and its history.

pub mod engine;
pub mod record;

pub use engine::{find_refuter, RefutationSearch, SuggestionEngine};
pub use record::{Refutation, Shown, SuggestionRecord, SuggestionView};
