//! **roam-core** — Route-finding over weighted maps (core types).
//!
//! This crate provides the foundational types used across the *roam*
//! ecosystem: a geometry primitive for map positions and the problem traits
//! through which a generic search algorithm drives a concrete domain.
//!
//! # Trait hierarchy
//!
//! | Trait | Question it answers |
//! |---|---|
//! | [`Actions`] | which moves exist in a state? |
//! | [`Transition`] | where does a move lead? |
//! | [`StepCost`] | what does one step cost? |
//! | [`Heuristic`] | how much farther to the goal? |

pub mod geom;
pub mod problem;

pub use geom::Point;
pub use problem::{Actions, Heuristic, StepCost, Transition};
