//! Robot navigation and the run loop for the robot maze simulator.
//!
//! [`RobotNavigator`] wraps a generated
//! [`PassabilityGrid`](robot_maze_space::PassabilityGrid) and exposes
//! the narrow query-and-move surface a decision strategy needs.
//! [`Simulation`] ties a navigator to a [`PollingStrategy`] and repeats
//! poll → move until the robot reaches the goal.
//!
//! Two reference strategies ship here: [`FixedDirection`] and
//! [`RandomRetry`]. Rendering is an observer concern and lives in
//! [`render`](mod@render).
//!
//! [`PollingStrategy`]: robot_maze_core::PollingStrategy

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod navigator;
pub mod render;
pub mod simulation;
pub mod strategy;

pub use config::{ConfigError, MazeConfig};
pub use navigator::RobotNavigator;
pub use render::render;
pub use simulation::{RunError, RunSummary, Simulation, StepOutcome};
pub use strategy::{FixedDirection, RandomRetry};
