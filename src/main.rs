mod cli;
mod logging;

use clap::Parser;
use colored::Colorize;
use eyre::Result;
use log::info;

use maze_derby::bench::{self, BenchConfig, BenchReport, Metrics};
use maze_derby::maze::builder;
use maze_derby::solvers::{AStar, Bfs, RandomWalk, Solver, WallFollower, Water, WaterParams};

use cli::{Args, Command, Strategy};
use logging::Logger;

fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    match args.command {
        Command::Solve {
            strategy,
            size,
            seed,
        } => run_solve(strategy, size, seed),
        Command::Bench {
            sizes,
            seeds,
            gravity_bias,
            side_cost,
            up_cost,
            max_steps,
        } => {
            let defaults = BenchConfig::default();
            let config = BenchConfig {
                sizes: sizes.unwrap_or(defaults.sizes),
                seeds: seeds.unwrap_or(defaults.seeds),
                water: WaterParams {
                    gravity_bias,
                    side_cost,
                    up_cost,
                },
                random_walk_max_steps: max_steps,
            };
            run_bench(&config)
        }
    }
}

fn make_solver(strategy: Strategy, seed: u64) -> Box<dyn Solver> {
    match strategy {
        Strategy::Bfs => Box::new(Bfs),
        Strategy::AStar => Box::new(AStar),
        Strategy::Water => Box::new(Water::new(WaterParams::default())),
        Strategy::LeftHand => Box::new(WallFollower::left()),
        Strategy::RightHand => Box::new(WallFollower::right()),
        Strategy::RandomWalk => Box::new(RandomWalk::new(seed, RandomWalk::DEFAULT_MAX_STEPS)),
    }
}

fn run_solve(strategy: Strategy, size: usize, seed: u64) -> Result<()> {
    let grid = builder::generate(size, size, seed);
    let (start, goal) = builder::find_entrance_exit(&grid)?;
    info!(
        "{}x{} maze (seed {seed}): ({}, {}) -> ({}, {})",
        grid.height(),
        grid.width(),
        start.row,
        start.col,
        goal.row,
        goal.col
    );

    let mut solver = make_solver(strategy, seed);
    let result = solver.solve(&grid, start, goal);
    let metrics = Metrics::from_result(solver.name(), &result, grid.open_cells());

    println!("{}", grid.render(&result.path));
    print_metrics(&metrics);
    Ok(())
}

fn run_bench(config: &BenchConfig) -> Result<()> {
    info!(
        "benchmarking {} sizes x {} seeds x 6 strategies",
        config.sizes.len(),
        config.seeds.len()
    );

    let report = bench::run(config);
    if report.sizes.is_empty() {
        eyre::bail!("no maze produced any results");
    }
    print_summary(&report);
    Ok(())
}

fn print_metrics(metrics: &Metrics) {
    info!("strategy: {}", metrics.solver);
    info!("reached: {}", metrics.reached);
    info!(
        "visited {} of {} open cells (ratio {:.3})",
        metrics.visited, metrics.open_cells, metrics.visited_ratio
    );
    info!("efficiency: {:.3}", metrics.efficiency);
    if metrics.path_length.is_finite() {
        info!("path length: {}", metrics.path_length as usize);
    } else {
        info!("path length: inf");
    }
}

fn print_summary(report: &BenchReport) {
    println!();
    print!("{:<8}", "size");
    for series in &report.series {
        print!("  {:>15}", series.solver);
    }
    println!();

    for (row, &size) in report.sizes.iter().enumerate() {
        print!("{:<8}", format!("{size}x{size}"));
        for series in &report.series {
            print!("  {:>15.3}", series.mean_efficiency[row]);
        }
        println!();
    }

    let last = report.sizes.len() - 1;
    if let Some(best) = report
        .series
        .iter()
        .max_by(|a, b| a.mean_efficiency[last].total_cmp(&b.mean_efficiency[last]))
    {
        let size = report.sizes[last];
        println!(
            "\nmost efficient at {size}x{size}: {} ({:.3})",
            best.solver.green().bold(),
            best.mean_efficiency[last]
        );
    }
}
