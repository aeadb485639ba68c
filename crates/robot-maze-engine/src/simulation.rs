//! The poll → move loop.
//!
//! [`Simulation`] owns a [`RobotNavigator`] and a [`PollingStrategy`].
//! Each [`step()`](Simulation::step) asks the strategy for a direction
//! through a read-only [`NavigatorView`] and applies it. The navigator
//! validates every move; a rejected move ends the call with an error and
//! leaves the robot where it was.
//!
//! # Randomness
//!
//! [`Simulation::new`] seeds exactly one `ChaCha8Rng` from
//! [`MazeConfig::seed`], carves the maze with it, and then hands the same
//! RNG, by value, to the strategy factory. Nothing reseeds mid-run.
//!
//! # Termination
//!
//! [`run()`](Simulation::run) loops until the goal is reached. Unless
//! [`MazeConfig::max_steps`] is set, there is no cap: a strategy that
//! never finds the goal keeps the loop going.

use std::error::Error;
use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use robot_maze_core::{Coord, Direction, MazeError, NavigatorView, PollingStrategy};
use robot_maze_space::{GenerationReport, MazeGenerator};

use crate::config::{ConfigError, MazeConfig};
use crate::navigator::RobotNavigator;

// ── Outcomes and errors ────────────────────────────────────────────

/// Result of one successful [`Simulation::step()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// Direction the strategy chose.
    pub direction: Direction,
    /// Robot position after the move.
    pub position: Coord,
    /// Whether that position is the goal.
    pub at_goal: bool,
}

/// Result of a [`Simulation::run()`] that reached the goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Moves applied since the simulation was built.
    pub steps: u64,
    /// Final robot position (the goal).
    pub final_position: Coord,
}

/// Errors that end a step or a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunError {
    /// The strategy proposed a move the navigator rejected.
    Maze(MazeError),
    /// The configured `max_steps` was reached before the goal.
    StepLimitReached {
        /// Moves applied when the limit tripped.
        steps: u64,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Maze(e) => write!(f, "move rejected: {e}"),
            Self::StepLimitReached { steps } => {
                write!(f, "step limit reached after {steps} moves")
            }
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Maze(e) => Some(e),
            Self::StepLimitReached { .. } => None,
        }
    }
}

impl From<MazeError> for RunError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}

// ── Simulation ─────────────────────────────────────────────────────

/// A robot, a maze, and a strategy driving the robot through it.
pub struct Simulation<S> {
    navigator: RobotNavigator,
    strategy: S,
    report: Option<GenerationReport>,
    max_steps: Option<u64>,
    steps: u64,
}

impl<S: PollingStrategy> Simulation<S> {
    /// Validate `config`, carve a maze, and build the strategy.
    ///
    /// `make_strategy` receives the run's RNG after generation has drawn
    /// from it. Strategies that need randomness should keep it; others
    /// may drop it.
    ///
    /// ```
    /// use robot_maze_core::Direction;
    /// use robot_maze_engine::{FixedDirection, MazeConfig, RandomRetry, Simulation};
    ///
    /// let config = MazeConfig { width: 6, height: 6, seed: 3, max_steps: Some(1_000_000) };
    /// let mut sim = Simulation::new(config, RandomRetry::new).unwrap();
    /// let summary = sim.run().unwrap();
    /// assert_eq!(summary.final_position, sim.navigator().goal());
    ///
    /// let corridor = MazeConfig { width: 1, height: 4, ..MazeConfig::default() };
    /// let mut sim = Simulation::new(corridor, |_| FixedDirection(Direction::South)).unwrap();
    /// assert_eq!(sim.run().unwrap().steps, 3);
    /// ```
    pub fn new(
        config: MazeConfig,
        make_strategy: impl FnOnce(ChaCha8Rng) -> S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let maze = MazeGenerator::new(config.width, config.height)?.generate(&mut rng);
        let strategy = make_strategy(rng);
        log::debug!(
            "simulation ready: {}x{} seed {}, strategy '{}', goal {}",
            config.width,
            config.height,
            config.seed,
            strategy.name(),
            maze.grid.goal(),
        );
        Ok(Self {
            navigator: RobotNavigator::from_grid(maze.grid),
            strategy,
            report: Some(maze.report),
            max_steps: config.max_steps,
            steps: 0,
        })
    }

    /// Build from an existing navigator, without a generation report.
    pub fn from_parts(navigator: RobotNavigator, strategy: S, max_steps: Option<u64>) -> Self {
        Self {
            navigator,
            strategy,
            report: None,
            max_steps,
            steps: 0,
        }
    }

    /// Poll the strategy once and apply its direction.
    ///
    /// # Errors
    ///
    /// - [`RunError::StepLimitReached`] if `max_steps` moves have already
    ///   been applied. The strategy is not polled.
    /// - [`RunError::Maze`] if the navigator rejects the move. The robot
    ///   does not move and the step is not counted.
    pub fn step(&mut self) -> Result<StepOutcome, RunError> {
        if let Some(limit) = self.max_steps {
            if self.steps >= limit {
                return Err(RunError::StepLimitReached { steps: self.steps });
            }
        }

        let direction = self.strategy.poll(&self.navigator as &dyn NavigatorView);
        let position = self.navigator.move_robot(direction).map_err(|e| {
            log::debug!("strategy '{}' proposed {direction}: {e}", self.strategy.name());
            e
        })?;
        self.steps += 1;
        log::trace!("{}", self.navigator.readout());

        Ok(StepOutcome {
            direction,
            position,
            at_goal: self.navigator.is_at_goal(),
        })
    }

    /// Step until the robot is at the goal.
    pub fn run(&mut self) -> Result<RunSummary, RunError> {
        self.run_observed(|_| {})
    }

    /// Step until the robot is at the goal, calling `observe` after every
    /// applied move.
    ///
    /// The observer sees the navigator read-only. It is the hook for
    /// renderers and progress reporting.
    pub fn run_observed(
        &mut self,
        mut observe: impl FnMut(&RobotNavigator),
    ) -> Result<RunSummary, RunError> {
        while !self.navigator.is_at_goal() {
            self.step()?;
            observe(&self.navigator);
        }
        log::info!(
            "goal {} reached after {} moves",
            self.navigator.position(),
            self.steps
        );
        Ok(RunSummary {
            steps: self.steps,
            final_position: self.navigator.position(),
        })
    }

    /// The robot and its maze.
    pub fn navigator(&self) -> &RobotNavigator {
        &self.navigator
    }

    /// The strategy driving the robot.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Diagnostics from generation, if this simulation carved its maze.
    pub fn report(&self) -> Option<&GenerationReport> {
        self.report.as_ref()
    }

    /// Moves applied so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl<S: PollingStrategy> fmt::Debug for Simulation<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("position", &self.navigator.position())
            .field("goal", &self.navigator.goal())
            .field("strategy", &self.strategy.name())
            .field("steps", &self.steps)
            .field("max_steps", &self.max_steps)
            .finish()
    }
}
