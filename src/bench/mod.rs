mod evaluator;
mod harness;

pub use evaluator::{Metrics, evaluate};
pub use harness::{BenchConfig, BenchReport, SolverSeries, run};
