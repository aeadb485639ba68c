//! Test utilities and mock types for robot maze development.
//!
//! Provides a mock [`NavigatorView`] for exercising strategies without a
//! generated maze, scripted and counting strategies in [`fixtures`], and
//! structural checks for carved mazes in [`carving`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod carving;
pub mod fixtures;

pub use carving::{assert_tree_carving, path_through_carving, reachable_from_origin};
pub use fixtures::{CountingStrategy, ScriptedStrategy};

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use robot_maze_core::{Coord, Direction, NavigatorView};

/// The RNG every test should use: ChaCha8 seeded from a `u64`.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Mock implementation of [`NavigatorView`].
///
/// Backed by an explicit set of open cells. The mock never moves, so it
/// answers every query from the position it was built with.
pub struct MockNavigator {
    open: HashSet<Coord>,
    position: Coord,
    goal: Coord,
}

impl MockNavigator {
    pub fn new(position: Coord, goal: Coord) -> Self {
        let mut open = HashSet::new();
        open.insert(position);
        open.insert(goal);
        Self {
            open,
            position,
            goal,
        }
    }

    /// Mark additional cells as open.
    pub fn with_open(mut self, cells: impl IntoIterator<Item = Coord>) -> Self {
        self.open.extend(cells);
        self
    }
}

impl NavigatorView for MockNavigator {
    fn position(&self) -> Coord {
        self.position
    }

    fn check_direction(&self, direction: Direction) -> bool {
        let (dx, dy) = direction.offset();
        self.open.contains(&self.position.offset(dx, dy))
    }

    fn is_at_goal(&self) -> bool {
        self.position == self.goal
    }
}
