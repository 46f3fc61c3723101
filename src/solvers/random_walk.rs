use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::maze::{Grid, Position};

use super::traits::{SolveResult, Solver};

/// Uniform random walk, the deliberately inefficient baseline. Each step
/// moves to one open neighbor chosen by the instance's seeded source, until
/// the goal is reached, the step budget runs out, or the walk is boxed in
/// with no open neighbor. Parents record first arrivals only.
///
/// Determinism contract: the random source is seeded at construction and
/// advances across `solve` calls, so a fresh instance per run reproduces the
/// same trajectory for the same maze.
pub struct RandomWalk {
    rng: StdRng,
    max_steps: usize,
}

impl RandomWalk {
    pub const DEFAULT_MAX_STEPS: usize = 100_000;

    pub fn new(seed: u64, max_steps: usize) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_steps,
        }
    }
}

impl Solver for RandomWalk {
    fn solve(&mut self, grid: &Grid, start: Position, goal: Position) -> SolveResult {
        let mut current = start;
        let mut visited: HashSet<Position> = HashSet::from([start]);
        let mut parent: HashMap<Position, Option<Position>> = HashMap::from([(start, None)]);
        let mut steps = 0;

        while steps < self.max_steps && current != goal {
            steps += 1;
            let neighbors = grid.neighbors(current);
            if neighbors.is_empty() {
                break;
            }
            let (next, _) = neighbors[self.rng.random_range(0..neighbors.len())];
            parent.entry(next).or_insert(Some(current));
            current = next;
            visited.insert(current);
        }

        let reached = current == goal;
        SolveResult::from_search(&parent, visited, goal, reached)
    }

    fn name(&self) -> &'static str {
        "Random Walk"
    }
}
