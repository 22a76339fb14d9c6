//! Weighted road maps and their route-finding problem functions.
//!
//! This crate provides [`RoadMap`], a graph of named locations with optional
//! 2D positions and directed weighted links, plus the problem functions that
//! make a map searchable through the traits in [`roam_core`]:
//!
//! - **Move enumeration** ([`Moves`]) — the moves available at a location,
//!   following links forward or backward
//! - **Transition** ([`Travel`]) — the location a move ends in
//! - **Step costs** ([`RoadCost`]) — link weights as travel costs
//! - **Heuristic** ([`StraightLine`]) — straight-line distance to a goal
//!
//! All problem functions are cheap copyable views borrowing a shared map, so
//! a search can fan out across threads without cloning the graph.
//!
//! The [`romania`] module ships the classic twenty-city example map.

mod action;
mod cost;
mod heuristic;
mod map;
mod moves;
pub mod romania;
mod travel;

pub use action::Action;
pub use cost::RoadCost;
pub use heuristic::StraightLine;
pub use map::{Location, Locations, Neighbors, RoadMap};
pub use moves::Moves;
pub use travel::Travel;
