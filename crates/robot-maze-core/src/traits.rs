//! Read-only navigator access and the pluggable decision strategy.

use crate::coord::Coord;
use crate::direction::Direction;

/// Read-only view of a robot inside a generated maze.
///
/// This is the whole surface a decision strategy may observe. It has no
/// mutating methods, so a strategy holding `&dyn NavigatorView` cannot
/// move the robot or alter the grid.
pub trait NavigatorView {
    /// Current robot position.
    fn position(&self) -> Coord;

    /// Whether a move in `direction` would succeed right now.
    ///
    /// Never mutates state.
    fn check_direction(&self, direction: Direction) -> bool;

    /// Whether the robot stands on the goal cell.
    fn is_at_goal(&self) -> bool;
}

/// A movement-decision strategy.
///
/// Invoked once per loop iteration with a read-only view of the robot.
/// Implementations may keep private state (an RNG, a script cursor) but
/// observe the maze only through [`NavigatorView`].
pub trait PollingStrategy {
    /// Human-readable name, used in diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Choose the next direction.
    fn poll(&mut self, view: &dyn NavigatorView) -> Direction;
}

impl<S: PollingStrategy + ?Sized> PollingStrategy for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn poll(&mut self, view: &dyn NavigatorView) -> Direction {
        (**self).poll(view)
    }
}
