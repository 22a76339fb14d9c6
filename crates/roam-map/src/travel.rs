//! The transition function: where an action ends.

use roam_core::Transition;

use crate::action::Action;
use crate::map::Location;

/// Transition function over the map action vocabulary. Stateless; build one
/// wherever it is needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct Travel;

impl Transition for Travel {
    type State = Location;
    type Action = Action;

    /// A move ends at its destination; everything else leaves the state
    /// unchanged. The identity fallback keeps the function total over any
    /// action a search framework might feed it.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Location {
        match action {
            Action::MoveTo(dest) => dest.clone(),
            Action::NoOp => state.clone(),
        }
    }
}
