//! This module reimports a common used types.

pub use crate::models::{City, EdgeCostTable, Location, Problem, Solution, build_edge_costs};

pub use crate::search::{SearchConfig, SearchStatistics, SolveError, Solver, SolverBuilder, TelemetryMode};
pub use crate::search::{solve, solve_problem};

pub use crate::utils::compare_floats;
pub use crate::utils::{DefaultRandom, Random};
pub use crate::utils::{Environment, InfoLogger, Quota, TimeQuota};
pub use crate::utils::{Float, GenericError, GenericResult, Timer};
