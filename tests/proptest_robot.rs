//! Property-based tests for robot state transitions.
//!
//! Run with: cargo test --test proptest_robot

use proptest::prelude::*;
use toy_robot::{CommandInterpreter, Direction, Position, Robot};

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn arb_grid_size() -> impl Strategy<Value = u32> {
    1u32..50
}

proptest! {
    /// Placement succeeds exactly when both coordinates are in `[0, g)`.
    #[test]
    fn place_iff_in_bounds(g in arb_grid_size(), x in -60i32..60, y in -60i32..60, facing in arb_direction()) {
        let mut robot = Robot::new(g);
        let accepted = robot.place(x, y, facing);
        let in_bounds = x >= 0 && y >= 0 && (x as u32) < g && (y as u32) < g;

        prop_assert_eq!(accepted, in_bounds);
        prop_assert_eq!(robot.is_placed(), in_bounds);
        if in_bounds {
            prop_assert_eq!(robot.position(), Some(Position::new(x, y)));
            prop_assert_eq!(robot.facing(), Some(facing));
        }
    }

    /// A move changes position only when the stepped cell is on the table.
    #[test]
    fn move_stays_on_table(g in arb_grid_size(), xs in 0u32..50, ys in 0u32..50, facing in arb_direction()) {
        let (x, y) = ((xs % g) as i32, (ys % g) as i32);
        let mut robot = Robot::new(g);
        robot.place(x, y, facing);

        let before = Position::new(x, y);
        let candidate = before.step(facing);
        let moved = robot.move_forward();

        prop_assert_eq!(moved, candidate.is_within(g));
        let expected = if moved { candidate } else { before };
        prop_assert_eq!(robot.position(), Some(expected));
        prop_assert_eq!(robot.facing(), Some(facing));
    }

    /// Four turns the same way return to the starting heading.
    #[test]
    fn four_turns_are_identity(facing in arb_direction()) {
        let mut left = Robot::new(5);
        let mut right = Robot::new(5);
        left.place(2, 2, facing);
        right.place(2, 2, facing);
        for _ in 0..4 {
            left.rotate_left();
            right.rotate_right();
        }
        prop_assert_eq!(left.facing(), Some(facing));
        prop_assert_eq!(right.facing(), Some(facing));
    }

    /// Left then right is a no-op.
    #[test]
    fn left_then_right_is_identity(facing in arb_direction()) {
        prop_assert_eq!(facing.left().right(), facing);
        prop_assert_eq!(facing.right().left(), facing);
        prop_assert_ne!(facing.left(), facing.right());
    }

    /// Arbitrary command sequences keep the robot on the table and never panic.
    #[test]
    fn random_sessions_stay_on_table(
        g in arb_grid_size(),
        lines in prop::collection::vec(
            prop_oneof![
                Just("MOVE".to_string()),
                Just("LEFT".to_string()),
                Just("RIGHT".to_string()),
                Just("REPORT".to_string()),
                (-5i32..55, -5i32..55, arb_direction())
                    .prop_map(|(x, y, d)| format!("PLACE {x},{y},{d}")),
                "[A-Z ,0-9]{0,12}",
            ],
            0..40,
        ),
    ) {
        let mut interpreter = CommandInterpreter::new(Robot::new(g));
        for line in &lines {
            let _ = interpreter.execute(line);
            if let Some(position) = interpreter.robot().position() {
                prop_assert!(position.is_within(g), "{position} escaped a {g}x{g} table");
            }
        }
    }
}
