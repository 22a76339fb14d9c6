//! The action vocabulary for moving around a map.

use std::fmt;

use crate::map::Location;

/// An action available to an agent traveling a [`RoadMap`](crate::RoadMap).
///
/// The variant set is closed: transition and cost functions match on it
/// exhaustively instead of probing with downcasts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Travel along a direct link to the named location.
    MoveTo(Location),
    /// Do nothing. Transition functions leave the state unchanged for it.
    NoOp,
}

impl Action {
    /// Shorthand for [`Action::MoveTo`].
    #[inline]
    pub fn move_to(dest: impl Into<Location>) -> Self {
        Action::MoveTo(dest.into())
    }

    /// The destination this action travels to, or `None` for a no-op.
    pub fn destination(&self) -> Option<&str> {
        match self {
            Action::MoveTo(dest) => Some(dest),
            Action::NoOp => None,
        }
    }

    /// Whether this action does nothing.
    #[inline]
    pub fn is_noop(&self) -> bool {
        matches!(self, Action::NoOp)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::MoveTo(dest) => write!(f, "moveTo({dest})"),
            Action::NoOp => write!(f, "noOp"),
        }
    }
}
