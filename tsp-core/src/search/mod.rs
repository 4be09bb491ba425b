//! The search module contains A* search over partial tours together with its cost functions.

mod cost;
pub use self::cost::*;

mod engine;
pub use self::engine::*;

mod frontier;
pub use self::frontier::Frontier;

mod heuristic;
pub use self::heuristic::*;

mod state;
pub use self::state::SearchState;

mod telemetry;
pub use self::telemetry::TelemetryMode;

pub use crate::models::{SearchStatistics, SolveError};

use crate::models::{City, Problem, Solution};
use crate::utils::Environment;
use std::sync::Arc;

/// Solves the problem defined by the list of cities, the first city is used as the tour origin.
pub fn solve(cities: Vec<City>) -> Result<Solution, SolveError> {
    solve_problem(Arc::new(Problem::new(cities)?))
}

/// Solves the shared problem using default settings: no budgets and no logging.
pub fn solve_problem(problem: Arc<Problem>) -> Result<Solution, SolveError> {
    SolverBuilder::new(problem).with_environment(Environment::new_silent()).build().solve()
}
