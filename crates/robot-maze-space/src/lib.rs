//! Grid storage and maze generation for the robot maze simulator.
//!
//! This crate owns the [`PassabilityGrid`], the matrix of open/blocked
//! cells together with the robot position and goal, and the
//! [`MazeGenerator`] that carves a cycle-free maze into it.
//!
//! # Generation
//!
//! Mazes are carved by a randomized depth-first traversal with an
//! explicit backtracking stack. A cell is only opened when it has no
//! open neighbour other than the cell it is entered from, so the opened
//! region is always a tree rooted at `(0, 0)`. The goal is the first
//! opened cell with maximal `x + y`.
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use robot_maze_core::{Coord, Direction};
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let mut grid = robot_maze_space::new_maze(2, 1, &mut rng).unwrap();
//! assert_eq!(grid.goal(), Coord::new(1, 0));
//! grid.move_robot(Direction::East).unwrap();
//! assert!(grid.at_goal());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod generator;
pub mod grid;
pub mod visited;

pub use generator::{GeneratedMaze, GenerationReport, MazeGenerator, OpenedCell};
pub use grid::PassabilityGrid;
pub use visited::VisitedMarks;

use rand::Rng;
use robot_maze_core::MazeError;

/// Construct and generate a maze in one call.
///
/// Fails with [`MazeError::InvalidDimension`] if either dimension is not
/// positive. The returned grid has its cells carved, its goal assigned,
/// and the robot at `(0, 0)`. The generation report is discarded; use
/// [`MazeGenerator`] directly to keep it.
pub fn new_maze<R: Rng>(
    width: i32,
    height: i32,
    rng: &mut R,
) -> Result<PassabilityGrid, MazeError> {
    Ok(MazeGenerator::new(width, height)?.generate(rng).grid)
}
