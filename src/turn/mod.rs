//! Turn state machine.
//!
//! `AwaitingMove -> AwaitingAction -> TurnComplete`, then the next active
//! seat starts again at `AwaitingMove`.

pub mod manager;
pub mod phase;

pub use manager::TurnManager;
pub use phase::{TurnPhase, TurnState};
