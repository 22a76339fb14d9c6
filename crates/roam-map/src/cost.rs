//! Step costs read off link weights.

use roam_core::StepCost;

use crate::action::Action;
use crate::map::{Location, RoadMap};

/// Step-cost function returning the weight of the link just traveled.
///
/// Pairs with no direct link, and links whose stored weight is not positive,
/// cost a flat `1.0`. That keeps the function total and strictly positive
/// even when a search explores transitions the map never registered.
#[derive(Clone, Copy, Debug)]
pub struct RoadCost<'m> {
    map: &'m RoadMap,
}

impl<'m> RoadCost<'m> {
    /// Step costs over `map`'s link weights.
    pub fn new(map: &'m RoadMap) -> Self {
        Self { map }
    }
}

impl StepCost for RoadCost<'_> {
    type State = Location;
    type Action = Action;

    fn cost(&self, from: &Self::State, _action: &Self::Action, to: &Self::State) -> f64 {
        match self.map.distance(from, to) {
            Some(weight) if weight > 0.0 => weight,
            _ => 1.0,
        }
    }
}
