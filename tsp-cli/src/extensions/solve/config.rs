//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;
use tsp_core::models::Problem;
use tsp_core::search::{SolverBuilder, TelemetryMode};
use tsp_core::utils::{Environment, Float, GenericError};

/// Default amount of expanded states between two progress messages.
pub const DEFAULT_LOG_EVERY: usize = 1000;

/// A search configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct Config {
    /// Specifies search termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// Configuration of search budgets.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max amount of expanded states.
    pub max_expansions: Option<usize>,
    /// Max search time in seconds.
    pub max_time: Option<Float>,
}

/// A telemetry configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct TelemetryConfig {
    /// Progress logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// Progress logging configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled.
    pub enabled: bool,
    /// Specifies how often (in expanded states) progress is logged.
    pub log_every: Option<usize>,
}

impl Config {
    /// Returns a new config where values missing in this one are taken from the other.
    pub fn or(self, other: Config) -> Config {
        let termination = match (self.termination, other.termination) {
            (Some(this), Some(other)) => Some(TerminationConfig {
                max_expansions: this.max_expansions.or(other.max_expansions),
                max_time: this.max_time.or(other.max_time),
            }),
            (this, other) => this.or(other),
        };

        Config { termination, telemetry: self.telemetry.or(other.telemetry) }
    }
}

/// Reads config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a `SolverBuilder` from config file.
pub fn create_builder_from_config_file<R: Read>(
    problem: Arc<Problem>,
    reader: BufReader<R>,
    environment: Environment,
) -> Result<SolverBuilder, GenericError> {
    read_config(reader).map(|config| create_builder_from_config(problem, &config, environment))
}

/// Creates a `SolverBuilder` from config.
pub fn create_builder_from_config(problem: Arc<Problem>, config: &Config, environment: Environment) -> SolverBuilder {
    let builder = SolverBuilder::new(problem).with_environment(environment.clone());

    let builder = configure_from_telemetry(builder, config.telemetry.as_ref(), &environment);
    configure_from_termination(builder, config.termination.as_ref())
}

fn configure_from_telemetry(
    builder: SolverBuilder,
    telemetry_config: Option<&TelemetryConfig>,
    environment: &Environment,
) -> SolverBuilder {
    let telemetry_mode = match telemetry_config.and_then(|config| config.logging.as_ref()) {
        Some(LoggingConfig { enabled: true, log_every }) => TelemetryMode::OnlyLogging {
            logger: environment.logger.clone(),
            log_every: log_every.unwrap_or(DEFAULT_LOG_EVERY),
        },
        _ => TelemetryMode::None,
    };

    builder.with_telemetry(telemetry_mode)
}

fn configure_from_termination(builder: SolverBuilder, termination_config: Option<&TerminationConfig>) -> SolverBuilder {
    if let Some(config) = termination_config {
        builder.with_max_expansions(config.max_expansions).with_max_time(config.max_time)
    } else {
        builder
    }
}
