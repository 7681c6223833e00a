//! Cards, the catalog of names, and dealing.
//!
//! - `Card`: tagged suspect/weapon/room identity
//! - `CardCatalog`: names, starting rooms, canonical deck order
//! - `Solution` / `Deal`: the case file and the dealt hands

pub mod card;
pub mod catalog;
pub mod deck;

pub use card::{Card, Category, SuspectId, WeaponId};
pub use catalog::{CardCatalog, Suspect};
pub use deck::{deal_and_select_solution, Deal, Solution, MAX_PLAYERS, MIN_PLAYERS};
