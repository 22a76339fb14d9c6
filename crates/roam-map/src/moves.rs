//! Move enumeration: a map's adjacency turned into actions.

use roam_core::Actions;

use crate::action::Action;
use crate::map::{Location, RoadMap};

/// Enumerates the moves available at a location.
///
/// A forward enumerator follows outgoing links; a reverse enumerator walks
/// incoming links backwards, which lets the same map drive backward or
/// bidirectional searches without duplicating any graph logic.
#[derive(Clone, Copy, Debug)]
pub struct Moves<'m> {
    map: &'m RoadMap,
    reverse: bool,
}

impl<'m> Moves<'m> {
    /// Moves along outgoing links.
    pub fn forward(map: &'m RoadMap) -> Self {
        Self {
            map,
            reverse: false,
        }
    }

    /// Moves against incoming links.
    pub fn reverse(map: &'m RoadMap) -> Self {
        Self { map, reverse: true }
    }

    /// Whether this enumerator walks links backwards.
    #[inline]
    pub fn is_reverse(&self) -> bool {
        self.reverse
    }
}

impl Actions for Moves<'_> {
    type State = Location;
    type Action = Action;

    /// One move per distinct neighbor, in first-seen link order. Parallel
    /// links collapse to a single move, so enumeration order stays
    /// deterministic for search tie-breaking.
    fn actions(&self, state: &Self::State) -> Vec<Action> {
        let neighbors = if self.reverse {
            self.map.prev_locations(state)
        } else {
            self.map.next_locations(state)
        };
        let mut moves: Vec<Action> = Vec::with_capacity(neighbors.len());
        for dest in neighbors {
            if !moves.iter().any(|m| m.destination() == Some(dest)) {
                moves.push(Action::move_to(dest));
            }
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3-4-5 right triangle with an extra one-way shortcut into `P`.
    fn triangle() -> RoadMap {
        let mut m = RoadMap::new();
        m.add_two_way("P", "Q", 3.0);
        m.add_two_way("Q", "R", 4.0);
        m.add_one_way("R", "P", 5.0);
        m
    }

    fn dests(moves: &[Action]) -> Vec<&str> {
        moves.iter().filter_map(Action::destination).collect()
    }

    #[test]
    fn forward_moves_follow_outgoing_links() {
        let m = triangle();
        let forward = Moves::forward(&m);
        assert_eq!(dests(&forward.actions(&"P".to_owned())), ["Q"]);
        assert_eq!(dests(&forward.actions(&"Q".to_owned())), ["P", "R"]);
        assert_eq!(dests(&forward.actions(&"R".to_owned())), ["Q", "P"]);
    }

    #[test]
    fn reverse_moves_follow_incoming_links() {
        let m = triangle();
        let reverse = Moves::reverse(&m);
        assert!(reverse.is_reverse());
        // P is entered from Q (two-way) and from R (one-way shortcut).
        assert_eq!(dests(&reverse.actions(&"P".to_owned())), ["Q", "R"]);
        // R is entered only from Q: the shortcut leaves R, it never enters.
        assert_eq!(dests(&reverse.actions(&"R".to_owned())), ["Q"]);
    }

    #[test]
    fn unknown_location_has_no_moves() {
        let m = triangle();
        assert!(Moves::forward(&m).actions(&"X".to_owned()).is_empty());
        assert!(Moves::reverse(&m).actions(&"X".to_owned()).is_empty());
    }

    #[test]
    fn parallel_links_yield_one_move() {
        let mut m = RoadMap::new();
        m.add_one_way("A", "B", 5.0);
        m.add_one_way("A", "B", 2.0);
        m.add_one_way("A", "C", 1.0);
        let moves = Moves::forward(&m).actions(&"A".to_owned());
        assert_eq!(dests(&moves), ["B", "C"]);
    }

    #[test]
    fn moves_are_move_to_actions() {
        let m = triangle();
        for action in Moves::forward(&m).actions(&"Q".to_owned()) {
            assert!(!action.is_noop());
        }
    }
}
