use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::maze::{Direction, Grid, Position};

use super::traits::{SolveResult, Solver};

/// Cost model for the water solver. Each move costs one unit plus a penalty:
/// straight down is free, lateral moves cost `side_cost`, climbing costs
/// `up_cost`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterParams {
    pub gravity_bias: f64,
    pub side_cost: f64,
    pub up_cost: f64,
}

impl Default for WaterParams {
    fn default() -> Self {
        Self {
            gravity_bias: 1.0,
            side_cost: 0.1,
            up_cost: 1.0,
        }
    }
}

#[derive(Copy, Clone, PartialEq)]
struct State {
    // -gravity_bias * row; lower sinks first.
    depth_key: f64,
    distance: usize,
    position: Position,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap: deepest row first, then smallest Manhattan distance to
        // the goal, then row/col for a reproducible pop order.
        other
            .depth_key
            .total_cmp(&self.depth_key)
            .then_with(|| other.distance.cmp(&self.distance))
            .then_with(|| self.position.row.cmp(&other.position.row))
            .then_with(|| self.position.col.cmp(&other.position.col))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Gravity-biased best-first search, modeling water flowing downhill: the
/// frontier is ordered by descending row before distance to goal, and the
/// accumulated cost penalizes lateral and upward moves. Not optimal in path
/// length by design. `visited` holds popped coordinates (lazy deletion as in
/// A*); parents are recorded on relaxation.
pub struct Water {
    params: WaterParams,
}

impl Water {
    pub fn new(params: WaterParams) -> Self {
        Self { params }
    }

    fn penalty(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Down => 0.0,
            Direction::Left | Direction::Right => self.params.side_cost,
            Direction::Up => self.params.up_cost,
        }
    }

    fn state(&self, position: Position, goal: Position) -> State {
        State {
            depth_key: -self.params.gravity_bias * position.row as f64,
            distance: position.manhattan_distance(goal),
            position,
        }
    }
}

impl Solver for Water {
    fn solve(&mut self, grid: &Grid, start: Position, goal: Position) -> SolveResult {
        let mut open_set = BinaryHeap::new();
        let mut parent: HashMap<Position, Option<Position>> = HashMap::from([(start, None)]);
        let mut g_costs: HashMap<Position, f64> = HashMap::from([(start, 0.0)]);
        let mut visited: HashSet<Position> = HashSet::new();

        open_set.push(self.state(start, goal));

        while let Some(State { position, .. }) = open_set.pop() {
            if !visited.insert(position) {
                continue;
            }
            if position == goal {
                break;
            }

            // The popped entry's cost may be stale (the priority ignores it),
            // so relax from the best known cost.
            let g_cost = g_costs[&position];
            for (neighbor, direction) in grid.neighbors(position) {
                let new_cost = g_cost + 1.0 + self.penalty(direction);
                if new_cost < g_costs.get(&neighbor).copied().unwrap_or(f64::INFINITY) {
                    g_costs.insert(neighbor, new_cost);
                    parent.insert(neighbor, Some(position));
                    open_set.push(self.state(neighbor, goal));
                }
            }
        }

        let reached = parent.contains_key(&goal);
        SolveResult::from_search(&parent, visited, goal, reached)
    }

    fn name(&self) -> &'static str {
        "Water"
    }
}
