//! The game session: every public operation a front-end calls.
//!
//! Each mutating operation validates completely before touching state, so a
//! rejected call leaves the session exactly as it was.

use im::Vector;
use tracing::{debug, info};

use super::builder::GameBuilder;
use super::view::PlayerView;
use crate::board::{BoardGraph, RoomId};
use crate::cards::{Card, CardCatalog, Solution, SuspectId, WeaponId};
use crate::core::{GameError, GameRng, PlayerId, PlayerMap, Result};
use crate::deduction::DeductionTracker;
use crate::players::PlayerState;
use crate::rules::{Accusation, AccusationOutcome, AccusationResolver, GameResult};
use crate::suggestion::{SuggestionEngine, SuggestionRecord, SuggestionView};
use crate::turn::{TurnManager, TurnPhase, TurnState};

fn rejected(err: GameError) -> GameError {
    debug!(error = %err, "operation rejected");
    err
}

/// One game of Clue from deal to result.
///
/// Cloning is cheap enough for look-ahead: the history is a persistent
/// vector and everything else is small.
#[derive(Clone, Debug)]
pub struct GameSession {
    seed: u64,
    max_rounds: Option<u32>,
    board: BoardGraph,
    catalog: CardCatalog,
    solution: Solution,
    players: PlayerMap<PlayerState>,
    suggestions: SuggestionEngine,
    tracker: DeductionTracker,
    turns: TurnManager,
    reveal_rng: GameRng,
    result: Option<GameResult>,
}

impl GameSession {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn from_parts(
        seed: u64,
        max_rounds: Option<u32>,
        board: BoardGraph,
        catalog: CardCatalog,
        solution: Solution,
        players: PlayerMap<PlayerState>,
        suggestions: SuggestionEngine,
        tracker: DeductionTracker,
        turns: TurnManager,
        reveal_rng: GameRng,
    ) -> Self {
        Self {
            seed,
            max_rounds,
            board,
            catalog,
            solution,
            players,
            suggestions,
            tracker,
            turns,
            reveal_rng,
            result: None,
        }
    }

    /// Start a classic game. Without a seed one is drawn and kept in `seed()`.
    pub fn start<I, S>(names: I, seed: Option<u64>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let builder = GameBuilder::new().players(names);
        match seed {
            Some(seed) => builder.seed(seed).build(),
            None => builder.build(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn board(&self) -> &BoardGraph {
        &self.board
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    pub fn player(&self, id: PlayerId) -> Result<&PlayerState> {
        self.check_player(id)?;
        Ok(&self.players[id])
    }

    pub(crate) fn seat(&self, id: PlayerId) -> &PlayerState {
        &self.players[id]
    }

    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &PlayerState)> {
        self.players.iter()
    }

    /// Seat of the player with this name.
    #[must_use]
    pub fn find_player(&self, name: &str) -> Option<PlayerId> {
        self.players.iter().find(|(_, p)| p.name == name).map(|(id, _)| id)
    }

    pub fn hand(&self, id: PlayerId) -> Result<&[Card]> {
        Ok(self.player(id)?.hand())
    }

    #[must_use]
    pub fn tracker(&self) -> &DeductionTracker {
        &self.tracker
    }

    /// Rooms `player` may move to right now. Empty unless it is their turn
    /// and they have not moved yet.
    pub fn legal_moves(&self, player: PlayerId) -> Result<Vec<RoomId>> {
        self.check_player(player)?;
        let can_move = self.result.is_none()
            && self.turns.active_player() == player
            && self.turns.phase() == TurnPhase::AwaitingMove;
        if !can_move {
            return Ok(Vec::new());
        }
        Ok(self.board.neighbors_of(self.players[player].current_room).to_vec())
    }

    /// Every suggestion so far with the shown cards in full.
    #[must_use]
    pub fn history(&self) -> &Vector<SuggestionRecord> {
        self.suggestions.history()
    }

    /// The history as `observer` saw it.
    pub fn history_for(&self, observer: PlayerId) -> Result<Vec<SuggestionView>> {
        self.check_player(observer)?;
        Ok(self.history().iter().map(|r| r.view_for(observer)).collect())
    }

    #[must_use]
    pub fn current_turn_state(&self) -> TurnState {
        TurnState {
            phase: self.turns.phase(),
            active_player: self.turns.active_player(),
            turn_number: self.turns.turn_number(),
            round: self.turns.round(),
            result: self.result,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.result.and_then(|r| r.winner())
    }

    /// The case file, once the game has ended.
    #[must_use]
    pub fn revealed_solution(&self) -> Option<Solution> {
        self.result.map(|_| self.solution)
    }

    /// Read-only view for one seat.
    pub fn view(&self, observer: PlayerId) -> Result<PlayerView<'_>> {
        self.check_player(observer)?;
        Ok(PlayerView::new(self, observer))
    }

    // === Moves ===

    pub fn move_to(&mut self, player: PlayerId, room: RoomId) -> Result<()> {
        self.check_acting(player).map_err(rejected)?;
        self.turns.check_move().map_err(rejected)?;
        let from = self.players[player].current_room;
        if !self.board.is_adjacent(from, room) {
            return Err(rejected(GameError::IllegalMove { from, to: room }));
        }

        self.players[player].move_to(room);
        self.turns.mark_moved();
        debug!(player = %player, from = %from, to = %room, "moved");
        Ok(())
    }

    /// Decline to move this turn.
    pub fn skip_move(&mut self, player: PlayerId) -> Result<()> {
        self.check_acting(player).map_err(rejected)?;
        self.turns.check_move().map_err(rejected)?;
        self.turns.mark_moved();
        debug!(player = %player, "stayed put");
        Ok(())
    }

    // === Suggestions ===

    /// Suggest in the current room. The refuter's card is picked from the
    /// session's seeded reveal stream.
    pub fn suggest(
        &mut self,
        player: PlayerId,
        suspect: SuspectId,
        weapon: WeaponId,
    ) -> Result<SuggestionRecord> {
        let mut rng = self.reveal_rng.clone();
        let record = self.suggest_with(player, suspect, weapon, |_, matches| {
            rng.choose(matches).copied().unwrap_or(matches[0])
        })?;
        self.reveal_rng = rng;
        Ok(record)
    }

    /// Suggest naming a room explicitly; it must be the current room.
    pub fn suggest_in_room(
        &mut self,
        player: PlayerId,
        suspect: SuspectId,
        weapon: WeaponId,
        room: RoomId,
    ) -> Result<SuggestionRecord> {
        self.check_acting(player).map_err(rejected)?;
        let current = self.players[player].current_room;
        if room != current {
            return Err(rejected(GameError::RoomMismatch { named: room, current }));
        }
        self.suggest(player, suspect, weapon)
    }

    /// Suggest, letting `reveal(refuter, matching)` pick the shown card.
    pub fn suggest_with(
        &mut self,
        player: PlayerId,
        suspect: SuspectId,
        weapon: WeaponId,
        reveal: impl FnMut(PlayerId, &[Card]) -> Card,
    ) -> Result<SuggestionRecord> {
        self.check_acting(player).map_err(rejected)?;
        self.turns.check_suggest().map_err(rejected)?;
        self.check_cards(&[Card::Suspect(suspect), Card::Weapon(weapon)]).map_err(rejected)?;

        let record = self.suggestions.make_suggestion(
            self.turns.turn_number(),
            player,
            suspect,
            weapon,
            &self.players,
            &mut self.tracker,
            reveal,
        );
        self.turns.mark_suggested();
        Ok(record)
    }

    // === Accusations ===

    pub fn accuse(
        &mut self,
        player: PlayerId,
        suspect: SuspectId,
        weapon: WeaponId,
        room: RoomId,
    ) -> Result<AccusationOutcome> {
        self.check_acting(player).map_err(rejected)?;
        self.turns.check_accuse().map_err(rejected)?;
        let resolver = AccusationResolver::new(&self.solution);
        resolver.check(player, &self.players[player]).map_err(rejected)?;
        self.check_cards(&[Card::Suspect(suspect), Card::Weapon(weapon), Card::Room(room)])
            .map_err(rejected)?;

        let accusation = Accusation::new(suspect, weapon, room);
        let outcome = resolver.accuse(player, &mut self.players[player], &accusation)?;
        match outcome {
            AccusationOutcome::Correct => self.finish(GameResult::Winner(player)),
            AccusationOutcome::Incorrect => {
                if self.nobody_can_win() {
                    self.finish(GameResult::NoWinner);
                }
            }
        }
        Ok(outcome)
    }

    // === Turn flow ===

    pub fn end_turn(&mut self, player: PlayerId) -> Result<()> {
        self.check_acting(player).map_err(rejected)?;
        self.turns.check_end_turn().map_err(rejected)?;
        self.pass_turn();
        Ok(())
    }

    /// Remove a player from the table for good.
    pub fn withdraw(&mut self, player: PlayerId) -> Result<()> {
        self.check_live().map_err(rejected)?;
        self.check_player(player).map_err(rejected)?;
        if !self.players[player].active {
            return Err(rejected(GameError::Withdrawn(player)));
        }

        self.players[player].withdraw();
        info!(player = %player, "player withdrew");

        if self.nobody_can_win() {
            self.finish(GameResult::NoWinner);
        } else if self.turns.active_player() == player {
            self.pass_turn();
        }
        Ok(())
    }

    // === Internals ===

    fn check_live(&self) -> Result<()> {
        if self.result.is_some() {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    fn check_player(&self, player: PlayerId) -> Result<()> {
        if !self.players.contains(player) {
            return Err(GameError::UnknownPlayer(player));
        }
        Ok(())
    }

    /// Game live, player known, still seated, and holding the turn.
    fn check_acting(&self, player: PlayerId) -> Result<()> {
        self.check_live()?;
        self.check_player(player)?;
        if !self.players[player].active {
            return Err(GameError::Withdrawn(player));
        }
        self.turns.check_turn(player)
    }

    fn check_cards(&self, cards: &[Card]) -> Result<()> {
        match cards.iter().find(|&&card| !self.catalog.contains(card)) {
            Some(card) => Err(GameError::UnknownName(card.to_string())),
            None => Ok(()),
        }
    }

    /// No seated player may still accuse.
    fn nobody_can_win(&self) -> bool {
        !self.players.values().any(PlayerState::can_accuse)
    }

    fn pass_turn(&mut self) {
        self.turns.mark_complete();
        match self.turns.advance(&self.players) {
            None => self.finish(GameResult::NoWinner),
            Some(_) => {
                if let Some(limit) = self.max_rounds {
                    if self.turns.round() > limit {
                        debug!(limit, "round limit reached");
                        self.finish(GameResult::NoWinner);
                    }
                }
            }
        }
    }

    fn finish(&mut self, result: GameResult) {
        self.turns.mark_complete();
        self.result = Some(result);
        info!(
            result = ?result,
            turns = self.turns.turn_number(),
            suggestions = self.history().len(),
            "game over"
        );
    }

    #[cfg(test)]
    pub(crate) fn solution_for_tests(&self) -> Solution {
        self.solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::start(["A", "B", "C"], Some(42)).unwrap()
    }

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    #[test]
    fn test_start_without_seed_records_one() {
        let a = GameSession::start(["A", "B", "C"], None).unwrap();
        let b = GameSession::start(["A", "B", "C"], Some(a.seed())).unwrap();
        for seat in PlayerId::all(3) {
            assert_eq!(a.hand(seat).unwrap(), b.hand(seat).unwrap());
        }
        assert_eq!(a.solution_for_tests(), b.solution_for_tests());
    }

    #[test]
    fn test_legal_moves_only_for_mover() {
        let game = session();
        let lounge = game.catalog().room("Lounge").unwrap();
        let mut expected = game.board().neighbors_of(lounge).to_vec();
        expected.sort();
        let mut moves = game.legal_moves(p(0)).unwrap();
        moves.sort();
        assert_eq!(moves, expected);
        assert!(game.legal_moves(p(1)).unwrap().is_empty());
        assert_eq!(game.legal_moves(p(9)), Err(GameError::UnknownPlayer(p(9))));
    }

    #[test]
    fn test_rejected_move_leaves_state() {
        let mut game = session();
        let kitchen = game.catalog().room("Kitchen").unwrap();
        let lounge = game.catalog().room("Lounge").unwrap();

        let err = game.move_to(p(0), kitchen).unwrap_err();
        assert_eq!(err, GameError::IllegalMove { from: lounge, to: kitchen });
        assert_eq!(game.player(p(0)).unwrap().current_room, lounge);
        assert_eq!(game.current_turn_state().phase, TurnPhase::AwaitingMove);

        let hall = game.catalog().room("Hall").unwrap();
        assert_eq!(
            game.move_to(p(1), hall),
            Err(GameError::OutOfTurn { player: p(1), active: p(0) })
        );
    }

    #[test]
    fn test_suggest_without_moving() {
        let mut game = session();
        let record = game.suggest(p(0), SuspectId(1), WeaponId(1)).unwrap();
        assert_eq!(record.room, game.catalog().room("Lounge").unwrap());
        assert_eq!(game.current_turn_state().phase, TurnPhase::AwaitingAction { suggested: true });
        assert_eq!(game.history().len(), 1);

        let hall = game.catalog().room("Hall").unwrap();
        assert!(matches!(game.move_to(p(0), hall), Err(GameError::WrongPhase { .. })));
    }

    #[test]
    fn test_suggest_in_room_mismatch() {
        let mut game = session();
        let study = game.catalog().room("Study").unwrap();
        let lounge = game.catalog().room("Lounge").unwrap();
        assert_eq!(
            game.suggest_in_room(p(0), SuspectId(0), WeaponId(0), study),
            Err(GameError::RoomMismatch { named: study, current: lounge })
        );
        assert!(game.history().is_empty());
        assert!(game.suggest_in_room(p(0), SuspectId(0), WeaponId(0), lounge).is_ok());
    }

    #[test]
    fn test_correct_accusation_ends_game() {
        let mut game = session();
        let solution = game.solution_for_tests();
        assert!(game.revealed_solution().is_none());

        let outcome = game.accuse(p(0), solution.suspect, solution.weapon, solution.room).unwrap();
        assert_eq!(outcome, AccusationOutcome::Correct);
        assert_eq!(game.result(), Some(GameResult::Winner(p(0))));
        assert_eq!(game.revealed_solution(), Some(solution));
        assert_eq!(game.end_turn(p(0)), Err(GameError::GameOver));
        assert_eq!(game.withdraw(p(1)), Err(GameError::GameOver));
    }

    #[test]
    fn test_accusation_with_unknown_card_is_rejected() {
        let mut game = session();
        let hall = game.catalog().room("Hall").unwrap();

        let err = game.accuse(p(0), SuspectId(5), WeaponId(5), RoomId(200)).unwrap_err();
        assert_eq!(err, GameError::UnknownName("Room(200)".into()));
        assert_eq!(
            game.accuse(p(0), SuspectId(9), WeaponId(0), hall),
            Err(GameError::UnknownName("Suspect(9)".into()))
        );

        let me = game.player(p(0)).unwrap();
        assert!(!me.eliminated);
        assert!(me.can_accuse());
        assert!(!game.is_over());
        assert_eq!(game.current_turn_state().phase, TurnPhase::AwaitingMove);
    }

    #[test]
    fn test_suggestion_with_unknown_card_is_rejected() {
        let mut game = session();
        assert_eq!(
            game.suggest(p(0), SuspectId(40), WeaponId(0)),
            Err(GameError::UnknownName("Suspect(40)".into()))
        );
        assert_eq!(
            game.suggest(p(0), SuspectId(0), WeaponId(6)),
            Err(GameError::UnknownName("Weapon(6)".into()))
        );
        assert!(game.history().is_empty());
        assert_eq!(game.current_turn_state().phase, TurnPhase::AwaitingMove);
        assert!(game.suggest(p(0), SuspectId(0), WeaponId(0)).is_ok());
    }

    #[test]
    fn test_suggest_in_room_after_game_over() {
        let mut game = session();
        let solution = game.solution_for_tests();
        game.accuse(p(0), solution.suspect, solution.weapon, solution.room).unwrap();

        let lounge = game.catalog().room("Lounge").unwrap();
        let elsewhere = game.board().neighbors_of(lounge)[0];
        assert_eq!(
            game.suggest_in_room(p(0), SuspectId(0), WeaponId(0), elsewhere),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn test_withdraw_active_player_passes_turn() {
        let mut game = session();
        game.withdraw(p(0)).unwrap();
        assert_eq!(game.current_turn_state().active_player, p(1));
        assert_eq!(game.withdraw(p(0)), Err(GameError::Withdrawn(p(0))));

        game.withdraw(p(2)).unwrap();
        assert!(!game.is_over());
        game.withdraw(p(1)).unwrap();
        assert_eq!(game.result(), Some(GameResult::NoWinner));
    }

    #[test]
    fn test_round_limit() {
        let config = crate::core::GameConfig::classic().with_max_rounds(1);
        let mut game = GameBuilder::new()
            .players(["A", "B", "C"])
            .config(config)
            .seed(5)
            .build()
            .unwrap();
        for seat in 0..2 {
            game.end_turn(p(seat)).unwrap();
        }
        assert!(!game.is_over());
        game.end_turn(p(2)).unwrap();
        assert_eq!(game.result(), Some(GameResult::NoWinner));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut game = session();
        let snapshot = game.clone();
        game.suggest(p(0), SuspectId(2), WeaponId(3)).unwrap();
        assert!(snapshot.history().is_empty());
        assert_eq!(snapshot.current_turn_state().phase, TurnPhase::AwaitingMove);
    }
}
