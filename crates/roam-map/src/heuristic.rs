//! Straight-line distance to a fixed goal.

use roam_core::{Heuristic, Point};

use crate::map::{Location, RoadMap};

/// Euclidean estimate of the remaining travel cost toward a fixed goal.
///
/// When the queried location or the goal has no known position the estimate
/// is `0.0`: never an overestimate, so searches stay correct, they just lose
/// guidance for those states. On maps whose link weights are at least the
/// straight-line distance between their endpoints, the estimate is
/// admissible.
#[derive(Clone, Copy, Debug)]
pub struct StraightLine<'m> {
    map: &'m RoadMap,
    goal_pos: Option<Point>,
}

impl<'m> StraightLine<'m> {
    /// An estimator toward `goal` on `map`.
    ///
    /// The goal position is resolved once here; the map is borrowed, so it
    /// cannot change underneath the estimator.
    pub fn to(goal: &str, map: &'m RoadMap) -> Self {
        let goal_pos = map.position(goal);
        if goal_pos.is_none() {
            log::warn!("goal {goal} has no position, straight-line estimates degrade to 0");
        }
        Self { map, goal_pos }
    }
}

impl Heuristic for StraightLine<'_> {
    type State = Location;

    fn estimate(&self, state: &Self::State) -> f64 {
        match (self.map.position(state), self.goal_pos) {
            (Some(pos), Some(goal)) => pos.distance(goal),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3-4-5 right triangle: the road from P to R runs through Q.
    fn triangle() -> RoadMap {
        let mut m = RoadMap::new();
        m.add_one_way("P", "Q", 3.0);
        m.add_one_way("Q", "R", 4.0);
        m.set_position("P", 0.0, 0.0);
        m.set_position("Q", 0.0, 3.0);
        m.set_position("R", 4.0, 3.0);
        m
    }

    #[test]
    fn estimate_is_euclidean_distance() {
        let m = triangle();
        let h = StraightLine::to("R", &m);
        assert_eq!(h.estimate(&"P".to_owned()), 5.0);
        assert_eq!(h.estimate(&"Q".to_owned()), 4.0);
    }

    #[test]
    fn estimate_at_the_goal_is_zero() {
        let m = triangle();
        let h = StraightLine::to("R", &m);
        assert_eq!(h.estimate(&"R".to_owned()), 0.0);
    }

    #[test]
    fn estimate_never_exceeds_the_road_distance() {
        // Driving P -> Q -> R costs 7; the crow flies 5.
        let m = triangle();
        let h = StraightLine::to("R", &m);
        assert!(h.estimate(&"P".to_owned()) <= 3.0 + 4.0);
    }

    #[test]
    fn unplaced_state_estimates_zero() {
        let mut m = triangle();
        m.add_two_way("R", "S", 2.0); // S has no position
        let h = StraightLine::to("R", &m);
        assert_eq!(h.estimate(&"S".to_owned()), 0.0);
    }

    #[test]
    fn unplaced_goal_estimates_zero_everywhere() {
        let mut m = triangle();
        m.add_two_way("R", "S", 2.0);
        let h = StraightLine::to("S", &m);
        assert_eq!(h.estimate(&"P".to_owned()), 0.0);
        assert_eq!(h.estimate(&"R".to_owned()), 0.0);
    }

    #[test]
    fn unknown_goal_estimates_zero_everywhere() {
        let m = triangle();
        let h = StraightLine::to("Nowhere", &m);
        assert_eq!(h.estimate(&"P".to_owned()), 0.0);
    }
}
