#[cfg(test)]
#[path = "../../tests/unit/search/engine_test.rs"]
mod engine_test;

use crate::models::{Problem, Solution, SolveError};
use crate::search::telemetry::SearchTelemetry;
use crate::search::{Frontier, SearchState, TelemetryMode, tour_cost};
use crate::utils::{Environment, Float, Quota, TimeQuota};
use std::sync::Arc;

/// Specifies search settings.
#[derive(Clone)]
pub struct SearchConfig {
    /// Max amount of expanded states. No limit when not set.
    pub max_expansions: Option<usize>,
    /// Max search time in seconds. No limit when not set.
    pub max_time: Option<Float>,
    /// A telemetry mode.
    pub telemetry: TelemetryMode,
    /// An environment.
    pub environment: Environment,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: None,
            max_time: None,
            telemetry: TelemetryMode::None,
            environment: Environment::default(),
        }
    }
}

/// Provides configurable way to build a solver.
pub struct SolverBuilder {
    problem: Arc<Problem>,
    config: SearchConfig,
}

impl SolverBuilder {
    /// Creates a new instance of `SolverBuilder`.
    pub fn new(problem: Arc<Problem>) -> Self {
        Self { problem, config: SearchConfig::default() }
    }

    /// Sets max amount of expanded states.
    /// Default is no limit.
    pub fn with_max_expansions(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            (self.config.environment.logger)(format!("configured to use max-expansions: {limit}").as_str());
        }

        self.config.max_expansions = limit;
        self
    }

    /// Sets max running time limit in seconds.
    /// Default is no limit.
    pub fn with_max_time(mut self, limit: Option<Float>) -> Self {
        if let Some(limit) = limit {
            (self.config.environment.logger)(format!("configured to use max-time: {limit}s").as_str());
        }

        self.config.max_time = limit;
        self
    }

    /// Sets telemetry mode.
    /// Default is no telemetry.
    pub fn with_telemetry(mut self, telemetry: TelemetryMode) -> Self {
        self.config.telemetry = telemetry;
        self
    }

    /// Sets environment.
    /// Default is an environment with stdout logger and without quota.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.config.environment = environment;
        self
    }

    /// Sets the whole search config.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds a solver.
    pub fn build(self) -> Solver {
        Solver::new(self.problem, self.config)
    }
}

/// An A* search over partial tours.
pub struct Solver {
    problem: Arc<Problem>,
    config: SearchConfig,
}

impl Solver {
    /// Creates a new instance of `Solver`.
    pub fn new(problem: Arc<Problem>, config: SearchConfig) -> Self {
        Self { problem, config }
    }

    /// Runs the search and returns the optimal closed tour.
    ///
    /// States are taken from the frontier in order of ascending f score. The first complete state
    /// taken is optimal and is returned immediately. A budget, when configured, is checked before
    /// each expansion.
    pub fn solve(self) -> Result<Solution, SolveError> {
        let problem = self.problem.as_ref();
        let time_quota = self.config.max_time.map(TimeQuota::new);

        let mut telemetry = SearchTelemetry::new(self.config.telemetry.clone());
        let mut frontier = Frontier::default();

        telemetry.on_start(problem);
        frontier.push(SearchState::new_initial(problem));

        while let Some(state) = frontier.pop() {
            if state.is_complete() {
                let mut tour = state.visited();
                let cost = tour_cost(&tour, &problem.costs);
                tour.push(problem.origin);

                let statistics = telemetry.on_goal(&frontier, cost);

                return Ok(Solution { tour, cost, statistics });
            }

            if self.is_quota_reached(telemetry.expansions(), time_quota.as_ref()) {
                let error = SolveError::QuotaReached { expansions: telemetry.expansions() };
                telemetry.on_failure(&frontier, &error);

                return Err(error);
            }

            state.expand(problem).for_each(|child| {
                frontier.push(child);
            });

            telemetry.on_expansion(&frontier);
        }

        let error = SolveError::NoSolutionFound { expansions: telemetry.expansions() };
        telemetry.on_failure(&frontier, &error);

        Err(error)
    }

    fn is_quota_reached(&self, expansions: usize, time_quota: Option<&TimeQuota>) -> bool {
        self.config.max_expansions.is_some_and(|limit| expansions >= limit)
            || time_quota.is_some_and(|quota| quota.is_reached())
            || self.config.environment.is_quota_reached()
    }
}
