use log::{info, warn};

use crate::maze::builder;
use crate::solvers::{self, RandomWalk, WaterParams};

use super::evaluator::{Metrics, evaluate};

/// Sweep configuration: every size is crossed with every seed and run
/// through the full solver roster.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Maze side lengths; coerced odd (min 5) by the builder.
    pub sizes: Vec<usize>,
    pub seeds: Vec<u64>,
    pub water: WaterParams,
    pub random_walk_max_steps: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: (10..62).step_by(5).map(builder::ensure_odd).collect(),
            seeds: vec![1, 7, 11, 23, 37],
            water: WaterParams::default(),
            random_walk_max_steps: RandomWalk::DEFAULT_MAX_STEPS,
        }
    }
}

/// Mean efficiency per size for one solver, index-aligned with
/// [`BenchReport::sizes`].
#[derive(Debug, Clone, PartialEq)]
pub struct SolverSeries {
    pub solver: &'static str,
    pub mean_efficiency: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchReport {
    pub sizes: Vec<usize>,
    pub series: Vec<SolverSeries>,
}

/// Runs the benchmark. A failed (size, seed) pair is logged and skipped; a
/// size with no surviving seed is dropped from the report rather than
/// aborting the sweep.
pub fn run(config: &BenchConfig) -> BenchReport {
    let mut sizes = Vec::new();
    let mut series: Vec<SolverSeries> = Vec::new();

    for &size in &config.sizes {
        // One efficiency list per roster slot, filled seed by seed.
        let mut names: Vec<&'static str> = Vec::new();
        let mut efficiencies: Vec<Vec<f64>> = Vec::new();

        for &seed in &config.seeds {
            let grid = builder::generate(size, size, seed);
            let (start, goal) = match builder::find_entrance_exit(&grid) {
                Ok(pair) => pair,
                Err(err) => {
                    warn!("skipping {size}x{size} seed {seed}: {err}");
                    continue;
                }
            };

            let mut roster =
                solvers::roster(seed, config.water, config.random_walk_max_steps);
            for (slot, solver) in roster.iter_mut().enumerate() {
                let metrics = evaluate(&grid, solver.as_mut(), start, goal);
                log_metrics(size, seed, &metrics);
                if slot == names.len() {
                    names.push(metrics.solver);
                    efficiencies.push(Vec::new());
                }
                efficiencies[slot].push(metrics.efficiency);
            }
        }

        if efficiencies.is_empty() {
            warn!("no results for size {size}, dropping it from the report");
            continue;
        }

        sizes.push(size);
        for (slot, values) in efficiencies.iter().enumerate() {
            if slot == series.len() {
                series.push(SolverSeries {
                    solver: names[slot],
                    mean_efficiency: Vec::new(),
                });
            }
            series[slot].mean_efficiency.push(mean(values));
        }
    }

    BenchReport { sizes, series }
}

fn log_metrics(size: usize, seed: u64, metrics: &Metrics) {
    info!(
        "{:<16} {size}x{size} seed {seed}: reached={} visited={}/{} ratio={:.3} efficiency={:.3} path={}",
        metrics.solver,
        metrics.reached,
        metrics.visited,
        metrics.open_cells,
        metrics.visited_ratio,
        metrics.efficiency,
        if metrics.path_length.is_finite() {
            format!("{}", metrics.path_length as usize)
        } else {
            "inf".to_string()
        },
    );
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
