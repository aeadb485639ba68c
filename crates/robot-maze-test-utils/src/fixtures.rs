//! Reusable strategy test fixtures.
//!
//! - [`ScriptedStrategy`]: replays a fixed list of directions.
//! - [`CountingStrategy`]: wraps another strategy and counts polls.

use robot_maze_core::{Direction, NavigatorView, PollingStrategy};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Returns the scripted directions in order, then `Direction::None` forever.
pub struct ScriptedStrategy {
    script: VecDeque<Direction>,
}

impl ScriptedStrategy {
    pub fn new(script: impl IntoIterator<Item = Direction>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Directions not yet handed out.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl PollingStrategy for ScriptedStrategy {
    fn name(&self) -> &str {
        "scripted"
    }

    fn poll(&mut self, _view: &dyn NavigatorView) -> Direction {
        self.script.pop_front().unwrap_or(Direction::None)
    }
}

/// Delegates to an inner strategy and counts how often it was polled.
///
/// The counter is shared, so the test keeps a handle after the strategy
/// has been moved into a simulation.
pub struct CountingStrategy<S> {
    inner: S,
    polls: Arc<AtomicUsize>,
}

impl<S: PollingStrategy> CountingStrategy<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            polls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared handle to the poll counter.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        self.polls.clone()
    }
}

impl<S: PollingStrategy> PollingStrategy for CountingStrategy<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn poll(&mut self, view: &dyn NavigatorView) -> Direction {
        self.polls.fetch_add(1, Ordering::Relaxed);
        self.inner.poll(view)
    }
}
