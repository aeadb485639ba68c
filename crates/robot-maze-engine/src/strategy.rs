//! Reference decision strategies.
//!
//! - [`FixedDirection`]: always answers the same direction. Deterministic
//!   and useful for tests.
//! - [`RandomRetry`]: samples compass directions until one is open.

use rand::Rng;
use robot_maze_core::{Direction, NavigatorView, PollingStrategy};

/// Always proposes the same direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDirection(pub Direction);

impl PollingStrategy for FixedDirection {
    fn name(&self) -> &str {
        "fixed"
    }

    fn poll(&mut self, _view: &dyn NavigatorView) -> Direction {
        self.0
    }
}

/// Samples uniformly from the four compass directions until
/// [`check_direction`](NavigatorView::check_direction) accepts one.
///
/// Returns `Direction::None` if the robot is already at the goal. If the
/// robot stands on a cell with no open neighbour and is not at the goal,
/// `poll` does not return; bounding that is the caller's job.
///
/// The RNG is taken by value so the same stream that carved the maze can
/// keep driving the walk.
#[derive(Clone, Debug)]
pub struct RandomRetry<R> {
    rng: R,
}

impl<R: Rng> RandomRetry<R> {
    /// Create a strategy drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PollingStrategy for RandomRetry<R> {
    fn name(&self) -> &str {
        "random-retry"
    }

    fn poll(&mut self, view: &dyn NavigatorView) -> Direction {
        if view.is_at_goal() {
            return Direction::None;
        }
        loop {
            let d = Direction::CARDINALS[self.rng.random_range(0..Direction::CARDINALS.len())];
            if view.check_direction(d) {
                return d;
            }
        }
    }
}
