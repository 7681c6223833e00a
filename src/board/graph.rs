//! Room graph with validated, immutable adjacency.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameConfig, GameError, Result};

/// Room identifier, an index into the board's room list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(pub u8);

impl RoomId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Room({})", self.0)
    }
}

/// Static room topology.
///
/// Construction fails if any room has no exits or if some room cannot be
/// reached from every other room. Nothing mutates the graph afterwards.
///
/// ```
/// use clue_engine::board::BoardGraph;
/// use clue_engine::core::GameConfig;
///
/// let board = BoardGraph::from_config(&GameConfig::classic()).unwrap();
/// let kitchen = board.find("Kitchen").unwrap();
/// let study = board.find("Study").unwrap();
/// assert!(board.is_adjacent(kitchen, study));
/// ```
#[derive(Clone, Debug)]
pub struct BoardGraph {
    names: Vec<String>,
    neighbors: Vec<SmallVec<[RoomId; 4]>>,
    by_name: FxHashMap<String, RoomId>,
}

impl BoardGraph {
    /// Build a board from room names and directed edges.
    pub fn new(names: Vec<String>, edges: &[(RoomId, RoomId)]) -> Result<Self> {
        if names.is_empty() {
            return Err(GameError::SetupInvariant("board has no rooms".into()));
        }
        if names.len() > u8::MAX as usize {
            return Err(GameError::SetupInvariant(format!("too many rooms: {}", names.len())));
        }

        let mut by_name = FxHashMap::default();
        for (i, name) in names.iter().enumerate() {
            if by_name.insert(name.clone(), RoomId(i as u8)).is_some() {
                return Err(GameError::SetupInvariant(format!("duplicate room {name:?}")));
            }
        }

        let mut neighbors: Vec<SmallVec<[RoomId; 4]>> = vec![SmallVec::new(); names.len()];
        for &(from, to) in edges {
            if from.index() >= names.len() || to.index() >= names.len() {
                return Err(GameError::SetupInvariant(format!(
                    "passage {from} -> {to} leaves the board"
                )));
            }
            if from == to {
                let name = &names[from.index()];
                return Err(GameError::SetupInvariant(format!("{name} connects to itself")));
            }
            let exits = &mut neighbors[from.index()];
            if !exits.contains(&to) {
                exits.push(to);
            }
        }

        if let Some(i) = neighbors.iter().position(SmallVec::is_empty) {
            return Err(GameError::SetupInvariant(format!("{} has no neighbors", names[i])));
        }

        let board = Self { names, neighbors, by_name };
        board.check_connected()?;
        Ok(board)
    }

    /// Build the board described by a configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let lookup = |name: &str| {
            config
                .rooms
                .iter()
                .position(|r| r == name)
                .map(|i| RoomId(i as u8))
                .ok_or_else(|| {
                    GameError::SetupInvariant(format!("passage names unknown room {name:?}"))
                })
        };

        let mut edges = Vec::with_capacity(config.passages.len() * 2);
        for passage in &config.passages {
            let from = lookup(&passage.from)?;
            let to = lookup(&passage.to)?;
            edges.push((from, to));
            if !passage.one_way {
                edges.push((to, from));
            }
        }

        Self::new(config.rooms.clone(), &edges)
    }

    /// Every room must reach, and be reached from, the first room.
    fn check_connected(&self) -> Result<()> {
        let start = RoomId(0);
        let forward = self.reachable_from(start, |r| self.neighbors[r.index()].to_vec());
        let backward = self.reachable_from(start, |r| {
            self.rooms().filter(|&other| self.is_adjacent(other, r)).collect()
        });

        for room in self.rooms() {
            if !forward[room.index()] || !backward[room.index()] {
                let name = self.name(room);
                return Err(GameError::SetupInvariant(format!("{name} is unreachable")));
            }
        }
        Ok(())
    }

    fn reachable_from(&self, start: RoomId, exits: impl Fn(RoomId) -> Vec<RoomId>) -> Vec<bool> {
        let mut seen = vec![false; self.names.len()];
        let mut queue = VecDeque::from([start]);
        seen[start.index()] = true;

        while let Some(room) = queue.pop_front() {
            for next in exits(room) {
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    /// Rooms reachable in one move from `room`.
    #[must_use]
    pub fn neighbors_of(&self, room: RoomId) -> &[RoomId] {
        self.neighbors.get(room.index()).map_or(&[], |n| n.as_slice())
    }

    /// Whether a single move leads from `a` to `b`. Never true for `a == b`.
    #[must_use]
    pub fn is_adjacent(&self, a: RoomId, b: RoomId) -> bool {
        self.neighbors_of(a).contains(&b)
    }

    /// Iterate over all rooms in board order.
    pub fn rooms(&self) -> impl Iterator<Item = RoomId> {
        (0..self.names.len() as u8).map(RoomId)
    }

    #[must_use]
    pub fn room_count(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn contains(&self, room: RoomId) -> bool {
        room.index() < self.names.len()
    }

    /// Display name of a room.
    #[must_use]
    pub fn name(&self, room: RoomId) -> &str {
        &self.names[room.index()]
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    /// First step on a shortest path from `from` to any room satisfying
    /// `is_target`. `None` if `from` is already a target or none is reachable.
    pub fn next_step_toward(
        &self,
        from: RoomId,
        is_target: impl Fn(RoomId) -> bool,
    ) -> Option<RoomId> {
        if is_target(from) {
            return None;
        }

        let mut first_step: Vec<Option<RoomId>> = vec![None; self.names.len()];
        let mut seen = vec![false; self.names.len()];
        let mut queue = VecDeque::new();
        seen[from.index()] = true;

        for &next in self.neighbors_of(from) {
            seen[next.index()] = true;
            first_step[next.index()] = Some(next);
            queue.push_back(next);
        }

        while let Some(room) = queue.pop_front() {
            if is_target(room) {
                return first_step[room.index()];
            }
            for &next in self.neighbors_of(room) {
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    first_step[next.index()] = first_step[room.index()];
                    queue.push_back(next);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> BoardGraph {
        BoardGraph::from_config(&GameConfig::classic()).unwrap()
    }

    #[test]
    fn test_classic_board() {
        let board = classic();
        assert_eq!(board.room_count(), 9);

        let billiard = board.find("Billiard Room").unwrap();
        assert_eq!(board.neighbors_of(billiard).len(), 4);

        let lounge = board.find("Lounge").unwrap();
        let conservatory = board.find("Conservatory").unwrap();
        assert!(board.is_adjacent(lounge, conservatory));
        assert!(board.is_adjacent(conservatory, lounge));
    }

    #[test]
    fn test_no_self_adjacency_and_symmetric() {
        let board = classic();
        for a in board.rooms() {
            assert!(!board.is_adjacent(a, a));
            for b in board.rooms() {
                assert_eq!(board.is_adjacent(a, b), board.is_adjacent(b, a));
            }
        }
    }

    #[test]
    fn test_rejects_isolated_room() {
        let config = GameConfig::new()
            .with_room("A")
            .with_room("B")
            .with_room("C")
            .with_passage("A", "B");
        let err = BoardGraph::from_config(&config).unwrap_err();
        assert_eq!(err, GameError::SetupInvariant("C has no neighbors".into()));
    }

    #[test]
    fn test_rejects_disconnected_board() {
        let config = GameConfig::new()
            .with_room("A")
            .with_room("B")
            .with_room("C")
            .with_room("D")
            .with_passage("A", "B")
            .with_passage("C", "D");
        assert!(matches!(BoardGraph::from_config(&config), Err(GameError::SetupInvariant(_))));
    }

    #[test]
    fn test_one_way_passages_need_return_route() {
        let dead_end = GameConfig::new()
            .with_room("A")
            .with_room("B")
            .with_room("C")
            .with_passage("A", "B")
            .with_one_way("B", "C")
            .with_one_way("C", "B");
        assert!(BoardGraph::from_config(&dead_end).is_ok());

        let trap = GameConfig::new()
            .with_room("A")
            .with_room("B")
            .with_one_way("A", "B");
        assert_eq!(
            BoardGraph::from_config(&trap).unwrap_err(),
            GameError::SetupInvariant("B has no neighbors".into())
        );

        let cycle = GameConfig::new()
            .with_room("A")
            .with_room("B")
            .with_room("C")
            .with_one_way("A", "B")
            .with_one_way("B", "C")
            .with_one_way("C", "A");
        let board = BoardGraph::from_config(&cycle).unwrap();
        let (a, b) = (board.find("A").unwrap(), board.find("B").unwrap());
        assert!(board.is_adjacent(a, b));
        assert!(!board.is_adjacent(b, a));
    }

    #[test]
    fn test_rejects_unknown_room_in_passage() {
        let config = GameConfig::new().with_room("A").with_passage("A", "Attic");
        assert!(matches!(BoardGraph::from_config(&config), Err(GameError::SetupInvariant(_))));
    }

    #[test]
    fn test_rejects_duplicate_room() {
        let config = GameConfig::new().with_room("A").with_room("A").with_passage("A", "A");
        let err = BoardGraph::from_config(&config).unwrap_err();
        assert_eq!(err, GameError::SetupInvariant("duplicate room \"A\"".into()));
    }

    #[test]
    fn test_next_step_toward() {
        let board = classic();
        let kitchen = board.find("Kitchen").unwrap();
        let hall = board.find("Hall").unwrap();
        let study = board.find("Study").unwrap();

        // Kitchen -> Study -> Hall is the only two-step route.
        assert_eq!(board.next_step_toward(kitchen, |r| r == hall), Some(study));
        assert_eq!(board.next_step_toward(hall, |r| r == hall), None);
    }
}
