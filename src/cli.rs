use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "maze-derby")]
#[command(about = "Compares maze-solving strategies by exploration efficiency")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve one generated maze with one strategy and print the result
    Solve {
        /// Strategy to run
        #[arg(value_enum)]
        strategy: Strategy,

        /// Maze side length (coerced up to the next odd value, minimum 5)
        #[arg(short, long, default_value_t = 21)]
        size: usize,

        /// Seed for maze generation (and the random walk)
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },

    /// Sweep maze sizes and seeds through every strategy and print the
    /// mean-efficiency table
    Bench {
        /// Comma-separated maze side lengths
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,

        /// Comma-separated maze seeds
        #[arg(long, value_delimiter = ',')]
        seeds: Option<Vec<u64>>,

        /// Water: row-depth weight in the frontier priority
        #[arg(long, default_value_t = 1.0)]
        gravity_bias: f64,

        /// Water: extra cost of a lateral move
        #[arg(long, default_value_t = 0.1)]
        side_cost: f64,

        /// Water: extra cost of an upward move
        #[arg(long, default_value_t = 1.0)]
        up_cost: f64,

        /// Random walk step budget
        #[arg(long, default_value_t = 100_000)]
        max_steps: usize,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Strategy {
    /// Breadth-first search (shortest path by steps)
    Bfs,

    /// A* with the Manhattan distance heuristic
    #[value(name = "astar", alias = "a-star")]
    AStar,

    /// Gravity-biased best-first search
    Water,

    /// Wall follower, left-hand rule
    #[value(name = "left-hand")]
    LeftHand,

    /// Wall follower, right-hand rule
    #[value(name = "right-hand")]
    RightHand,

    /// Uniform random walk baseline
    #[value(name = "random-walk")]
    RandomWalk,
}
