//! End-to-end grid scenarios: construction, generation, and movement
//! through the public `new_maze` entry point.

use robot_maze_core::{Coord, Direction, MazeError};
use robot_maze_space::{new_maze, PassabilityGrid};
use robot_maze_test_utils::seeded_rng;

#[test]
fn non_positive_dimensions_are_rejected() {
    let mut rng = seeded_rng(0);
    for (w, h) in [(0, 4), (4, 0), (-1, 4), (4, -7), (0, 0), (i32::MIN, 1)] {
        assert!(
            matches!(
                new_maze(w, h, &mut rng),
                Err(MazeError::InvalidDimension { .. })
            ),
            "{w}x{h} should be rejected"
        );
    }
}

#[test]
fn fresh_grids_start_at_open_origin() {
    for (w, h) in [(1, 1), (1, 9), (9, 1), (4, 4), (13, 6)] {
        let pre = PassabilityGrid::new(w, h).unwrap();
        assert_eq!(pre.robot_position(), Coord::ORIGIN);
        assert!(pre.passable(Coord::ORIGIN));

        let grid = new_maze(w, h, &mut seeded_rng(w as u64 * 31 + h as u64)).unwrap();
        assert_eq!(grid.robot_position(), Coord::ORIGIN);
        assert!(grid.passable(Coord::ORIGIN));
    }
}

#[test]
fn one_by_one_is_already_at_goal() {
    let mut grid = new_maze(1, 1, &mut seeded_rng(5)).unwrap();
    assert!(grid.at_goal());
    for d in Direction::CARDINALS {
        assert!(matches!(
            grid.move_robot(d),
            Err(MazeError::Impassable { .. })
        ));
    }
    assert_eq!(grid.robot_position(), Coord::ORIGIN);
}

#[test]
fn two_by_one_walks_east_to_goal() {
    let mut grid = new_maze(2, 1, &mut seeded_rng(5)).unwrap();
    assert!(grid.passable(Coord::new(0, 0)));
    assert!(grid.passable(Coord::new(1, 0)));
    assert_eq!(grid.goal(), Coord::new(1, 0));
    assert!(!grid.at_goal());
    assert_eq!(grid.move_robot(Direction::East), Ok(Coord::new(1, 0)));
    assert!(grid.at_goal());
}

#[test]
fn west_from_first_column_always_fails() {
    for seed in 0..32 {
        let mut grid = new_maze(7, 5, &mut seeded_rng(seed)).unwrap();
        let before = grid.clone();
        assert_eq!(
            grid.move_robot(Direction::West),
            Err(MazeError::Impassable {
                target: Coord::new(-1, 0)
            })
        );
        assert_eq!(grid, before);
    }
}
