//! Dealing partitions the deck for every supported table size.

use clue_engine::{
    deal_and_select_solution, BoardGraph, Card, CardCatalog, GameBuilder, GameConfig, GameError,
    GameRng, PlayerId,
};
use proptest::prelude::*;
use rustc_hash::FxHashSet;

fn classic_catalog() -> CardCatalog {
    let config = GameConfig::classic();
    let board = BoardGraph::from_config(&config).unwrap();
    CardCatalog::from_config(&config, &board).unwrap()
}

proptest! {
    #[test]
    fn prop_hands_and_solution_cover_deck_once(players in 3usize..=6, seed in any::<u64>()) {
        let catalog = classic_catalog();
        let deal = deal_and_select_solution(&catalog, players, &mut GameRng::new(seed)).unwrap();

        let mut seen: FxHashSet<Card> = FxHashSet::default();
        for card in deal.solution.cards().into_iter().chain(deal.hands.iter().flatten().copied()) {
            prop_assert!(seen.insert(card), "{card} dealt twice");
        }
        prop_assert_eq!(seen.len(), catalog.deck_size());
        prop_assert_eq!(deal.hands.len(), players);

        let sizes: Vec<usize> = deal.hands.iter().map(Vec::len).collect();
        let spread = sizes.iter().max().unwrap() - sizes.iter().min().unwrap();
        prop_assert!(spread <= 1, "uneven hands {sizes:?}");
        prop_assert!(deal.validate(&catalog).is_ok());
    }

    #[test]
    fn prop_session_hands_exclude_solution(players in 3usize..=6, seed in any::<u64>()) {
        let names: Vec<String> = (0..players).map(|i| format!("P{i}")).collect();
        let mut game = GameBuilder::new().players(names).seed(seed).build().unwrap();

        // End the game to read the case file.
        for p in PlayerId::all(players) {
            game.withdraw(p).unwrap();
        }
        let solution = game.revealed_solution().unwrap();
        for p in PlayerId::all(players) {
            for &card in game.hand(p).unwrap() {
                prop_assert!(!solution.contains(card));
            }
        }
    }
}

#[test]
fn test_deal_is_reproducible() {
    let catalog = classic_catalog();
    let a = deal_and_select_solution(&catalog, 5, &mut GameRng::new(77)).unwrap();
    let b = deal_and_select_solution(&catalog, 5, &mut GameRng::new(77)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_rejects_bad_player_counts() {
    let catalog = classic_catalog();
    for players in [0, 1, 2, 7, 8] {
        assert_eq!(
            deal_and_select_solution(&catalog, players, &mut GameRng::new(1)),
            Err(GameError::InvalidPlayerCount(players))
        );
    }
}

#[test]
fn test_six_players_get_three_cards_each() {
    let catalog = classic_catalog();
    let deal = deal_and_select_solution(&catalog, 6, &mut GameRng::new(3)).unwrap();
    assert!(deal.hands.iter().all(|h| h.len() == 3));
}

#[test]
fn test_fixed_deal_must_cover_deck() {
    let catalog = classic_catalog();
    let mut deal = deal_and_select_solution(&catalog, 3, &mut GameRng::new(3)).unwrap();
    let dropped = deal.hands[0].pop().unwrap();

    let err = GameBuilder::new().players(["A", "B", "C"]).deal(deal.clone()).build().unwrap_err();
    assert_eq!(err, GameError::SetupInvariant("deal covers 20 of 21 cards".into()));

    let duplicate = deal.hands[2][0];
    deal.hands[1].push(dropped);
    deal.hands[1].push(duplicate);
    let err = GameBuilder::new().players(["A", "B", "C"]).deal(deal).build().unwrap_err();
    assert!(matches!(err, GameError::SetupInvariant(_)));
}
