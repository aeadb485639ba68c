//! Robot maze: procedurally generated grid mazes and a robot that walks
//! them under a pluggable decision strategy.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the robot maze sub-crates. For most users, adding `robot-maze` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use robot_maze::prelude::*;
//!
//! // A strategy that always heads south.
//! struct Southward;
//! impl PollingStrategy for Southward {
//!     fn poll(&mut self, _view: &dyn NavigatorView) -> Direction {
//!         Direction::South
//!     }
//! }
//!
//! // A 1-wide maze is a straight corridor, so heading south reaches the goal.
//! let config = MazeConfig { width: 1, height: 5, ..MazeConfig::default() };
//! let mut sim = Simulation::new(config, |_rng| Southward).unwrap();
//! let summary = sim.run().unwrap();
//! assert_eq!(summary.final_position, Coord::new(0, 4));
//! assert_eq!(summary.steps, 4);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `robot-maze-core` | `Coord`, `Direction`, `MazeError`, strategy traits |
//! | [`space`] | `robot-maze-space` | `PassabilityGrid`, `MazeGenerator`, generation reports |
//! | [`engine`] | `robot-maze-engine` | `RobotNavigator`, strategies, rendering, `Simulation` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`robot-maze-core`).
pub use robot_maze_core as types;

/// Grid storage and maze generation (`robot-maze-space`).
///
/// [`space::new_maze`] builds and carves a grid in one call;
/// [`space::MazeGenerator`] also returns a [`space::GenerationReport`].
pub use robot_maze_space as space;

/// Navigation, strategies, rendering, and the run loop (`robot-maze-engine`).
pub use robot_maze_engine as engine;

/// Common imports for typical robot maze usage.
///
/// ```rust
/// use robot_maze::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use robot_maze_core::{Coord, Direction, MazeError, NavigatorView, PollingStrategy};

    // Space
    pub use robot_maze_space::{new_maze, GenerationReport, MazeGenerator, PassabilityGrid};

    // Engine
    pub use robot_maze_engine::{
        render, ConfigError, FixedDirection, MazeConfig, RandomRetry, RobotNavigator, RunError,
        RunSummary, Simulation,
    };
}
