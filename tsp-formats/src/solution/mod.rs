//! Contains functionality to write solutions as plain text or json.

#[cfg(test)]
#[path = "../../tests/unit/solution/writer_test.rs"]
mod writer_test;

use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};
use tsp_core::models::{Problem, Solution};
use tsp_core::utils::{Float, GenericError};

/// A solution representation used by json format.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SolutionOutput {
    /// City names in visiting order, the last one is the origin.
    pub tour: Vec<String>,
    /// Total cost of the closed tour.
    pub cost: Float,
    /// Search statistics.
    pub statistics: StatisticsOutput,
}

/// Search statistics representation used by json format.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsOutput {
    /// Amount of expanded states.
    pub expansions: usize,
    /// Amount of generated states.
    pub generated: usize,
    /// The biggest frontier size.
    pub max_frontier_size: usize,
    /// Search duration in milliseconds.
    pub duration: u64,
}

impl SolutionOutput {
    /// Creates a new instance of `SolutionOutput`.
    pub fn new(problem: &Problem, solution: &Solution) -> Self {
        let statistics = &solution.statistics;

        Self {
            tour: solution.names(problem).into_iter().map(|name| name.to_string()).collect(),
            cost: solution.cost,
            statistics: StatisticsOutput {
                expansions: statistics.expansions,
                generated: statistics.generated,
                max_frontier_size: statistics.max_frontier_size,
                duration: statistics.duration as u64,
            },
        }
    }
}

/// Writes solution as plain text: visited city names and the tour cost rounded to two decimals.
pub fn write_text_solution<W: Write>(
    problem: &Problem,
    solution: &Solution,
    writer: &mut BufWriter<W>,
) -> Result<(), GenericError> {
    writeln!(writer, "Path of Nodes to visit are [{}]", solution.names(problem).join(", "))?;
    writeln!(writer, "Cost of Path is {:.2}", solution.cost)?;

    writer.flush()?;

    Ok(())
}

/// Writes solution in json format.
pub fn write_json_solution<W: Write>(
    problem: &Problem,
    solution: &Solution,
    writer: &mut BufWriter<W>,
) -> Result<(), GenericError> {
    serde_json::to_writer_pretty(&mut *writer, &SolutionOutput::new(problem, solution))
        .map_err(|err| format!("cannot serialize solution: '{err}'"))?;

    writer.flush()?;

    Ok(())
}

/// Reads solution in json format.
pub fn read_json_solution<R: Read>(reader: BufReader<R>) -> Result<SolutionOutput, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize solution: '{err}'").into())
}
