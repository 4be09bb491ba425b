//! A module which provides simple logging of search progress and collects search statistics.

#[cfg(test)]
#[path = "../../tests/unit/search/telemetry_test.rs"]
mod telemetry_test;

use crate::models::{Problem, SearchStatistics, SolveError};
use crate::search::Frontier;
use crate::utils::{Float, InfoLogger, Timer};

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No logging at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often (in expanded states) the progress is logged.
        log_every: usize,
    },
}

/// Tracks search progress and writes information into log.
pub(crate) struct SearchTelemetry {
    mode: TelemetryMode,
    time: Timer,
    statistics: SearchStatistics,
}

impl SearchTelemetry {
    pub fn new(mode: TelemetryMode) -> Self {
        Self { mode, time: Timer::start(), statistics: SearchStatistics::default() }
    }

    pub fn on_start(&mut self, problem: &Problem) {
        self.time = Timer::start();
        self.log(
            format!(
                "started search over {} cities from origin '{}'",
                problem.size(),
                problem.city(problem.origin).name
            )
            .as_str(),
        );
    }

    pub fn on_expansion(&mut self, frontier: &Frontier) {
        self.statistics.expansions += 1;
        self.sync_frontier(frontier);

        let log_every = match &self.mode {
            TelemetryMode::OnlyLogging { log_every, .. } => *log_every,
            TelemetryMode::None => return,
        };

        if log_every > 0 && self.statistics.expansions % log_every == 0 {
            self.log(
                format!(
                    "[{}s] expanded {} states, frontier: {}, best f: {:.2}",
                    self.time.elapsed_secs(),
                    self.statistics.expansions,
                    frontier.len(),
                    frontier.peek_f_score().unwrap_or_default()
                )
                .as_str(),
            );
        }
    }

    pub fn on_goal(&mut self, frontier: &Frontier, cost: Float) -> SearchStatistics {
        self.sync_frontier(frontier);
        self.statistics.duration = self.time.elapsed_millis();

        self.log(
            format!(
                "[{}s] found optimal tour with cost {:.2}, expanded {} of {} generated states",
                self.time.elapsed_secs(),
                cost,
                self.statistics.expansions,
                self.statistics.generated
            )
            .as_str(),
        );

        self.statistics.clone()
    }

    pub fn on_failure(&mut self, frontier: &Frontier, error: &SolveError) {
        self.sync_frontier(frontier);
        self.statistics.duration = self.time.elapsed_millis();

        self.log(format!("[{}s] search stopped: {error}", self.time.elapsed_secs()).as_str());
    }

    pub fn expansions(&self) -> usize {
        self.statistics.expansions
    }

    fn sync_frontier(&mut self, frontier: &Frontier) {
        self.statistics.generated = frontier.total_pushed();
        self.statistics.max_frontier_size = frontier.max_size();
    }

    fn log(&self, message: &str) {
        if let TelemetryMode::OnlyLogging { logger, .. } = &self.mode {
            (logger)(message)
        }
    }
}
