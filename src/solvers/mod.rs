mod astar;
mod bfs;
mod random_walk;
pub mod traits;
mod wall_follower;
mod water;

pub use astar::AStar;
pub use bfs::Bfs;
pub use random_walk::RandomWalk;
pub use traits::{SolveResult, Solver};
pub use wall_follower::{Handedness, WallFollower};
pub use water::{Water, WaterParams};

/// The full strategy roster in benchmark order. `seed` drives the random
/// walk only; the other strategies are deterministic.
pub fn roster(seed: u64, water: WaterParams, max_steps: usize) -> Vec<Box<dyn Solver>> {
    vec![
        Box::new(Water::new(water)),
        Box::new(WallFollower::left()),
        Box::new(WallFollower::right()),
        Box::new(Bfs),
        Box::new(AStar),
        Box::new(RandomWalk::new(seed, max_steps)),
    ]
}
