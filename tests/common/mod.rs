//! Shared helpers for the integration tests.

#![allow(dead_code)]

use clue_engine::{Card, Deal, GameBuilder, GameSession, RoomId, Solution, SuspectId, WeaponId};

/// Route engine logs to the test harness. Set `RUST_LOG=clue_engine=debug`
/// to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn s(i: u8) -> Card {
    Card::Suspect(SuspectId(i))
}

pub fn w(i: u8) -> Card {
    Card::Weapon(WeaponId(i))
}

pub fn r(i: u8) -> Card {
    Card::Room(RoomId(i))
}

/// Classic three-player deal with Professor Plum, the Knife and the Library
/// in the case file. Mr. Green is in the third hand and the second hand holds
/// none of Green, the Knife or the Library.
pub fn plum_knife_library() -> Deal {
    Deal {
        solution: Solution::new(SuspectId(5), WeaponId(5), RoomId(5)),
        hands: vec![
            vec![s(0), s(1), w(0), w(1), r(0), r(1)],
            vec![s(2), w(2), w(3), r(2), r(3), r(4)],
            vec![s(3), s(4), w(4), r(6), r(7), r(8)],
        ],
    }
}

pub fn scenario_session() -> GameSession {
    GameBuilder::new()
        .players(["A", "B", "C"])
        .seed(2024)
        .deal(plum_knife_library())
        .build()
        .unwrap()
}
