//! Table-wide deduction tracking.
//!
//! The tracker keeps one `BeliefState` per seat plus a public one holding
//! only what the whole table can see. Observations apply a single direct
//! elimination rule; there is no inference across partially known rows.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use super::belief::{BeliefState, Holder};
use crate::cards::{Card, Category};
use crate::core::{PlayerId, PlayerMap};
use crate::players::PlayerState;
use crate::suggestion::SuggestionRecord;

#[derive(Clone, Debug)]
pub struct DeductionTracker {
    cards: Vec<Card>,
    public: BeliefState,
    observers: PlayerMap<BeliefState>,
    /// How many unrefuted suggestions named each card.
    suspicion: FxHashMap<Card, u32>,
}

impl DeductionTracker {
    /// Start tracking. Each seat begins knowing its own hand.
    #[must_use]
    pub fn new(cards: Vec<Card>, players: &PlayerMap<PlayerState>) -> Self {
        let player_count = players.player_count();
        let observers = PlayerMap::new(player_count, |observer| {
            let mut state = BeliefState::new(player_count);
            let me = &players[observer];
            for &card in &cards {
                if me.holds(card) {
                    state.mark_has(observer, card);
                } else {
                    state.mark_lacks(observer, card);
                }
            }
            state
        });

        Self {
            cards,
            public: BeliefState::new(player_count),
            observers,
            suspicion: FxHashMap::default(),
        }
    }

    /// Fold one resolved suggestion into every notebook.
    pub fn observe_suggestion(&mut self, record: &SuggestionRecord) {
        let named = record.cards();

        // Who could not refute is public.
        for &passer in &record.passed {
            for card in named {
                self.public.mark_lacks(passer, card);
                for (_, state) in self.observers.iter_mut() {
                    state.mark_lacks(passer, card);
                }
            }
        }

        match record.refutation {
            Some(refutation) => {
                for witness in [record.suggester, refutation.refuter] {
                    self.observers[witness].mark_has(refutation.refuter, refutation.card);
                }
                debug!(
                    suggester = %record.suggester,
                    refuter = %refutation.refuter,
                    "refutation recorded"
                );
            }
            None => {
                for card in named {
                    *self.suspicion.entry(card).or_insert(0) += 1;
                }
                debug!(suggester = %record.suggester, "unrefuted suggestion recorded");
            }
        }
    }

    /// Possible holders of `card` using only public knowledge.
    #[must_use]
    pub fn possible_holders(&self, card: Card) -> SmallVec<[Holder; 7]> {
        self.public.possible_holders(card)
    }

    /// Possible holders of `card` from one seat's point of view.
    #[must_use]
    pub fn possible_holders_for(&self, observer: PlayerId, card: Card) -> SmallVec<[Holder; 7]> {
        self.observers[observer].possible_holders(card)
    }

    /// One seat's notebook.
    #[must_use]
    pub fn beliefs(&self, observer: PlayerId) -> &BeliefState {
        &self.observers[observer]
    }

    /// The table's shared notebook.
    #[must_use]
    pub fn public_beliefs(&self) -> &BeliefState {
        &self.public
    }

    /// Cards whose location `observer` has pinned to a single holder.
    #[must_use]
    pub fn deduced(&self, observer: PlayerId) -> Vec<(Card, Holder)> {
        Self::single_holders(&self.cards, &self.observers[observer])
    }

    /// Cards pinned to a single holder from public knowledge alone.
    #[must_use]
    pub fn deduced_public(&self) -> Vec<(Card, Holder)> {
        Self::single_holders(&self.cards, &self.public)
    }

    fn single_holders(cards: &[Card], state: &BeliefState) -> Vec<(Card, Holder)> {
        cards
            .iter()
            .filter_map(|&card| match state.possible_holders(card).as_slice() {
                [only] => Some((card, *only)),
                _ => None,
            })
            .collect()
    }

    /// Cards of `category` that `observer` cannot yet rule out of the solution.
    #[must_use]
    pub fn solution_candidates(&self, observer: PlayerId, category: Category) -> Vec<Card> {
        let state = &self.observers[observer];
        self.cards
            .iter()
            .copied()
            .filter(|c| {
                c.category() == category && state.possible_holders(*c).contains(&Holder::Solution)
            })
            .collect()
    }

    /// Number of unrefuted suggestions that named `card`.
    #[must_use]
    pub fn suspicion(&self, card: Card) -> u32 {
        self.suspicion.get(&card).copied().unwrap_or(0)
    }
}
