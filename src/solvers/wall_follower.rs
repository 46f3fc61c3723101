use std::collections::{HashMap, HashSet};

use crate::maze::{Direction, Grid, Position};

use super::traits::{SolveResult, Solver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handedness {
    Left,
    Right,
}

/// Hand-rule wall follower. From the current heading (initially down, toward
/// the presumed exit side) it tries the hand-preferred turn first, then
/// straight ahead, then the remaining directions clockwise, and takes the
/// first open one; a dead end reverses the heading without moving.
///
/// Termination comes from a safety budget of 10x the total cell count; on a
/// perfect (loop-free) maze the rule always reaches the goal within it. The
/// parent map records first arrivals only, so on mazes with cycles the
/// reconstructed path understates the actual wandering. That mirrors how the
/// strategy has always been scored and is intentional.
pub struct WallFollower {
    hand: Handedness,
}

impl WallFollower {
    pub fn new(hand: Handedness) -> Self {
        Self { hand }
    }

    pub fn left() -> Self {
        Self::new(Handedness::Left)
    }

    pub fn right() -> Self {
        Self::new(Handedness::Right)
    }
}

impl Solver for WallFollower {
    fn solve(&mut self, grid: &Grid, start: Position, goal: Position) -> SolveResult {
        let mut heading = Direction::Down;
        let mut current = start;
        let mut visited: HashSet<Position> = HashSet::from([start]);
        let mut parent: HashMap<Position, Option<Position>> = HashMap::from([(start, None)]);

        let budget = grid.size() * 10;
        let mut steps = 0;

        while current != goal && steps < budget {
            steps += 1;

            let first = match self.hand {
                Handedness::Left => heading.counter_clockwise(),
                Handedness::Right => heading.clockwise(),
            };
            let candidates = [
                first,
                heading,
                first.clockwise(),
                first.clockwise().clockwise(),
            ];

            let mut moved = false;
            for direction in candidates {
                if let Some(next) = current.move_in_direction(direction, grid.bounds())
                    && grid.is_open(next)
                {
                    parent.entry(next).or_insert(Some(current));
                    current = next;
                    heading = direction;
                    visited.insert(current);
                    moved = true;
                    break;
                }
            }
            if !moved {
                heading = heading.reverse();
            }
        }

        let reached = current == goal;
        SolveResult::from_search(&parent, visited, goal, reached)
    }

    fn name(&self) -> &'static str {
        match self.hand {
            Handedness::Left => "Left-hand Rule",
            Handedness::Right => "Right-hand Rule",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::builder;
    use crate::solvers::traits::assert_path_valid;

    #[test]
    fn both_hands_solve_perfect_mazes() {
        for seed in 0..8 {
            let grid = builder::generate(13, 13, seed);
            let (start, goal) = builder::find_entrance_exit(&grid).unwrap();
            for mut follower in [WallFollower::left(), WallFollower::right()] {
                let result = follower.solve(&grid, start, goal);
                assert_path_valid(&grid, start, goal, &result);
            }
        }
    }

    #[test]
    fn dead_end_reverses_without_teleporting() {
        // Entering the pocket forces a reversal; the follower must still get
        // back out and reach the goal.
        let grid = Grid::parse(
            "#.###
             #.#.#
             #...#
             ###.#
             ###.#",
        )
        .unwrap();
        let start = Position::new(0, 1);
        let goal = Position::new(4, 3);
        let result = WallFollower::left().solve(&grid, start, goal);
        assert_path_valid(&grid, start, goal, &result);
    }

    #[test]
    fn open_room_interior_stays_out_of_reach() {
        // An all-open room has no wall leading to its center: the follower
        // circles the border until the budget runs out.
        let grid = Grid::parse(
            ".....
             .....
             .....
             .....
             .....",
        )
        .unwrap();
        let result = WallFollower::right().solve(
            &grid,
            Position::new(0, 0),
            Position::new(2, 2),
        );
        assert!(!result.reached);
        assert!(result.path.is_empty());
        // The walk hugs the outer wall and never touches the center.
        assert!(!result.visited.contains(&Position::new(2, 2)));
    }
}
