//! Session composition: setup, the public operations, and per-seat views.

pub mod builder;
pub mod session;
pub mod view;

pub use builder::GameBuilder;
pub use session::GameSession;
pub use view::PlayerView;
