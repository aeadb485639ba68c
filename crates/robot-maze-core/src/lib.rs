//! Core types and traits for the robot maze simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the workspace:
//! grid coordinates, movement directions, error types, and the
//! read-only traits through which decision strategies observe a robot.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod direction;
pub mod error;
pub mod traits;

pub use coord::Coord;
pub use direction::Direction;
pub use error::MazeError;
pub use traits::{NavigatorView, PollingStrategy};
