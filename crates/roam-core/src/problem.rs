//! The problem-definition traits a generic search algorithm consumes.
//!
//! A route-finding problem decomposes into four pure queries: which moves
//! exist in a state ([`Actions`]), where a move leads ([`Transition`]), what
//! one step costs ([`StepCost`]), and how much farther the goal is at most
//! ([`Heuristic`]). Implementations are expected to be cheap immutable views
//! over shared data, total over their whole input domain, and free of side
//! effects, so a search loop can call them from any thread.

/// Enumerates the actions applicable in a state.
pub trait Actions {
    /// State vocabulary of the problem.
    type State;
    /// Action vocabulary of the problem.
    type Action;

    /// All actions applicable in `state`, deterministically ordered and
    /// free of duplicates. States the problem does not know yield an empty
    /// vector, not an error.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;
}

/// Computes the state an action leads to.
pub trait Transition {
    type State;
    type Action;

    /// The state reached by applying `action` in `state`. Must be total:
    /// an action the implementation does not understand leaves the state
    /// unchanged rather than failing.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;
}

/// Cost of a single step.
pub trait StepCost {
    type State;
    type Action;

    /// Cost of reaching `to` from `from` via `action`. Must be > 0.
    fn cost(&self, from: &Self::State, action: &Self::Action, to: &Self::State) -> f64;
}

/// Estimates the remaining cost to a fixed goal.
pub trait Heuristic {
    type State;

    /// Estimate of the cost still ahead from `state`. Never negative;
    /// admissible implementations never overestimate the true cost.
    fn estimate(&self, state: &Self::State) -> f64;
}
