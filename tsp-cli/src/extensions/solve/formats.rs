//! Provides the way to pick problem readers and solution writers by format name.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/formats_test.rs"]
mod formats_test;

use std::collections::HashMap;
use std::io::{BufReader, BufWriter, Read, Write};
use tsp_core::models::{City, Problem, Solution};
use tsp_core::utils::GenericError;
use tsp_formats::solution::{write_json_solution, write_text_solution};
use tsp_formats::table::TableProblem;
use tsp_formats::tsplib::TsplibProblem;

/// Names of supported problem formats.
pub const PROBLEM_FORMATS: [&str; 2] = ["table", "tsplib"];

/// Names of supported solution formats.
pub const SOLUTION_FORMATS: [&str; 2] = ["text", "json"];

/// Reads cities from a problem definition.
pub struct ProblemReader(pub Box<dyn Fn(Box<dyn Read>) -> Result<Vec<City>, GenericError>>);

/// Writes a solution.
#[allow(clippy::type_complexity)]
pub struct SolutionWriter(
    pub Box<dyn Fn(&Problem, &Solution, &mut BufWriter<Box<dyn Write>>) -> Result<(), GenericError>>,
);

/// Returns problem readers by their format names.
pub fn get_problem_readers() -> HashMap<&'static str, ProblemReader> {
    let mut readers = HashMap::new();

    readers.insert("table", ProblemReader(Box::new(|reader: Box<dyn Read>| BufReader::new(reader).read_table())));
    readers.insert("tsplib", ProblemReader(Box::new(|reader: Box<dyn Read>| BufReader::new(reader).read_tsplib())));

    readers
}

/// Returns solution writers by their format names.
pub fn get_solution_writers() -> HashMap<&'static str, SolutionWriter> {
    let mut writers = HashMap::new();

    writers.insert("text", SolutionWriter(Box::new(write_text_solution::<Box<dyn Write>>)));
    writers.insert("json", SolutionWriter(Box::new(write_json_solution::<Box<dyn Write>>)));

    writers
}
