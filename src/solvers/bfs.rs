use std::collections::{HashMap, HashSet, VecDeque};

use crate::maze::{Grid, Position};

use super::traits::{SolveResult, Solver};

/// Breadth-first search. Unit edge costs, so the returned path has the
/// minimum possible number of cells. A coordinate counts as visited the
/// moment it is enqueued, which keeps every coordinate out of the queue more
/// than once; expansion follows the grid's up/down/left/right neighbor order.
pub struct Bfs;

impl Solver for Bfs {
    fn solve(&mut self, grid: &Grid, start: Position, goal: Position) -> SolveResult {
        let mut queue = VecDeque::from([start]);
        let mut parent: HashMap<Position, Option<Position>> = HashMap::from([(start, None)]);
        let mut visited: HashSet<Position> = HashSet::from([start]);

        while let Some(current) = queue.pop_front() {
            if current == goal {
                break;
            }
            for (neighbor, _) in grid.neighbors(current) {
                if visited.insert(neighbor) {
                    parent.insert(neighbor, Some(current));
                    queue.push_back(neighbor);
                }
            }
        }

        let reached = parent.contains_key(&goal);
        SolveResult::from_search(&parent, visited, goal, reached)
    }

    fn name(&self) -> &'static str {
        "BFS"
    }
}
