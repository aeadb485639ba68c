//! Run configuration, validation, and error types.
//!
//! [`MazeConfig`] is the input for building a [`Simulation`](crate::Simulation).
//! [`validate()`](MazeConfig::validate) checks it up front so that a bad
//! configuration fails before any maze is carved.

use std::error::Error;
use std::fmt;

use robot_maze_core::MazeError;

// ── MazeConfig ─────────────────────────────────────────────────────

/// Configuration for a single maze run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    /// Maze width in cells. Must be > 0. Default: 10.
    pub width: i32,
    /// Maze height in cells. Must be > 0. Default: 10.
    pub height: i32,
    /// Seed for the run's single RNG stream. Default: 0.
    pub seed: u64,
    /// Optional cap on applied moves. `None` runs until the goal is
    /// reached, however long that takes. Default: `None`.
    pub max_steps: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            seed: 0,
            max_steps: None,
        }
    }
}

impl MazeConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 {
            return Err(ConfigError::Maze(MazeError::InvalidDimension {
                name: "width",
                value: self.width,
            }));
        }
        if self.height <= 0 {
            return Err(ConfigError::Maze(MazeError::InvalidDimension {
                name: "height",
                value: self.height,
            }));
        }
        if self.max_steps == Some(0) {
            return Err(ConfigError::ZeroStepLimit);
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`MazeConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The maze itself cannot be built (bad dimensions).
    Maze(MazeError),
    /// `max_steps` was `Some(0)`, which admits no moves at all.
    ZeroStepLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Maze(e) => write!(f, "maze: {e}"),
            Self::ZeroStepLimit => write!(f, "max_steps must be at least 1 when set"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Maze(e) => Some(e),
            Self::ZeroStepLimit => None,
        }
    }
}

impl From<MazeError> for ConfigError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = MazeConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!((cfg.width, cfg.height), (10, 10));
        assert_eq!(cfg.max_steps, None);
    }

    #[test]
    fn zero_width_rejected() {
        let cfg = MazeConfig {
            width: 0,
            ..MazeConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Maze(MazeError::InvalidDimension {
                name: "width",
                value: 0
            }))
        );
    }

    #[test]
    fn negative_height_rejected() {
        let cfg = MazeConfig {
            height: -4,
            ..MazeConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Maze(MazeError::InvalidDimension {
                name: "height",
                ..
            }))
        ));
    }

    #[test]
    fn zero_step_limit_rejected() {
        let cfg = MazeConfig {
            max_steps: Some(0),
            ..MazeConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroStepLimit));
    }

    #[test]
    fn error_chains_source() {
        let e = ConfigError::from(MazeError::InvalidDimension {
            name: "width",
            value: -1,
        });
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "maze: width must be > 0, got -1");
    }
}
