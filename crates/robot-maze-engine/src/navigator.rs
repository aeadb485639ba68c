//! The robot navigator.

use rand::Rng;
use robot_maze_core::{Coord, Direction, MazeError, NavigatorView};
use robot_maze_space::{new_maze, PassabilityGrid};

/// A robot standing in a generated maze.
///
/// Owns its [`PassabilityGrid`] exclusively. The grid is reachable only
/// through `&self`, so the only way to change anything is
/// [`move_robot()`](RobotNavigator::move_robot).
#[derive(Clone, Debug)]
pub struct RobotNavigator {
    grid: PassabilityGrid,
}

impl RobotNavigator {
    /// Carve a `width × height` maze from `rng` and place a robot at its
    /// origin.
    ///
    /// Returns `Err(MazeError::InvalidDimension)` if either dimension is
    /// zero or negative.
    pub fn generate<R: Rng>(width: i32, height: i32, rng: &mut R) -> Result<Self, MazeError> {
        Ok(Self::from_grid(new_maze(width, height, rng)?))
    }

    /// Wrap a grid the caller has already carved.
    pub(crate) fn from_grid(grid: PassabilityGrid) -> Self {
        Self { grid }
    }

    /// Current robot position.
    pub fn position(&self) -> Coord {
        self.grid.robot_position()
    }

    /// Whether a move in `direction` would land on a passable cell.
    pub fn check_direction(&self, direction: Direction) -> bool {
        let target = self.grid.target_for(self.grid.robot_position(), direction);
        self.grid.passable(target)
    }

    /// Move the robot one step.
    ///
    /// Returns the new position, or [`MazeError::Impassable`] with the
    /// robot left where it was.
    pub fn move_robot(&mut self, direction: Direction) -> Result<Coord, MazeError> {
        self.grid.move_robot(direction)
    }

    /// Whether the robot stands on the goal.
    pub fn is_at_goal(&self) -> bool {
        self.grid.at_goal()
    }

    /// The goal cell.
    pub fn goal(&self) -> Coord {
        self.grid.goal()
    }

    /// Read-only access to the underlying grid, for renderers.
    pub fn grid(&self) -> &PassabilityGrid {
        &self.grid
    }

    /// One-line position report.
    pub fn readout(&self) -> String {
        format!("The robot is currently at {}.", self.position())
    }
}

impl NavigatorView for RobotNavigator {
    fn position(&self) -> Coord {
        RobotNavigator::position(self)
    }

    fn check_direction(&self, direction: Direction) -> bool {
        RobotNavigator::check_direction(self, direction)
    }

    fn is_at_goal(&self) -> bool {
        RobotNavigator::is_at_goal(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use robot_maze_test_utils::seeded_rng;

    fn navigator(width: i32, height: i32, seed: u64) -> RobotNavigator {
        RobotNavigator::generate(width, height, &mut seeded_rng(seed)).unwrap()
    }

    #[test]
    fn generate_carves_before_placing_robot() {
        // The goal of a fresh 2x1 maze is the far cell, never the start.
        let nav = navigator(2, 1, 5);
        assert_eq!(nav.goal(), Coord::new(1, 0));
        assert_eq!(nav.position(), Coord::ORIGIN);
        assert!(!nav.is_at_goal());
        assert!(nav.grid().passable(Coord::new(1, 0)));
    }

    #[test]
    fn generate_rejects_bad_dimensions() {
        let err = RobotNavigator::generate(0, 3, &mut seeded_rng(0)).unwrap_err();
        assert_eq!(
            err,
            MazeError::InvalidDimension {
                name: "width",
                value: 0
            }
        );
    }

    #[test]
    fn corridor_checks_and_moves() {
        // A 1-wide maze is a single corridor heading south.
        let mut nav = navigator(1, 4, 0);
        assert!(nav.check_direction(Direction::South));
        assert!(!nav.check_direction(Direction::North));
        assert!(!nav.check_direction(Direction::East));
        assert!(nav.check_direction(Direction::None));
        assert_eq!(nav.move_robot(Direction::South), Ok(Coord::new(0, 1)));
        assert_eq!(nav.position(), Coord::new(0, 1));
        assert!(nav.check_direction(Direction::North));
    }

    #[test]
    fn check_direction_does_not_move() {
        let nav = navigator(5, 5, 3);
        for d in Direction::CARDINALS {
            nav.check_direction(d);
        }
        assert_eq!(nav.position(), Coord::ORIGIN);
    }

    #[test]
    fn failed_move_reports_target() {
        let mut nav = navigator(3, 3, 1);
        assert_eq!(
            nav.move_robot(Direction::North),
            Err(MazeError::Impassable {
                target: Coord::new(0, -1)
            })
        );
        assert_eq!(nav.position(), Coord::ORIGIN);
    }

    #[test]
    fn readout_names_position() {
        let mut nav = navigator(2, 1, 0);
        nav.move_robot(Direction::East).unwrap();
        assert_eq!(nav.readout(), "The robot is currently at (1, 0).");
        assert!(nav.is_at_goal());
    }

    #[test]
    fn view_agrees_with_inherent_methods() {
        let nav = navigator(6, 4, 8);
        let view: &dyn NavigatorView = &nav;
        assert_eq!(view.position(), nav.position());
        assert_eq!(view.is_at_goal(), nav.is_at_goal());
        for d in Direction::CARDINALS {
            assert_eq!(view.check_direction(d), nav.check_direction(d));
        }
    }

    proptest! {
        #[test]
        fn check_predicts_move(w in 1i32..10, h in 1i32..10, seed in any::<u64>(),
                               walk in proptest::collection::vec(0usize..4, 0..60)) {
            let mut nav = navigator(w, h, seed);
            for i in walk {
                let d = Direction::CARDINALS[i];
                let before = nav.position();
                let predicted = nav.check_direction(d);
                match nav.move_robot(d) {
                    Ok(p) => {
                        prop_assert!(predicted);
                        prop_assert_eq!(p, nav.grid().target_for(before, d));
                    }
                    Err(MazeError::Impassable { target }) => {
                        prop_assert!(!predicted);
                        prop_assert_eq!(target, nav.grid().target_for(before, d));
                        prop_assert_eq!(nav.position(), before);
                    }
                    Err(other) => prop_assert!(false, "unexpected error {other}"),
                }
                prop_assert_eq!(nav.is_at_goal(), nav.position() == nav.goal());
            }
        }
    }
}
