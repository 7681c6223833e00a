//! Mansion topology.
//!
//! The board is a fixed graph of rooms. Players move one passage per turn,
//! so legality of a move is a single adjacency check.

pub mod graph;

pub use graph::{BoardGraph, RoomId};
