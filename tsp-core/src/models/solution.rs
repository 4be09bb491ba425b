use crate::models::{Location, Problem};
use crate::utils::Float;

/// Keeps essential information about the search which produced the solution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Amount of states taken from the frontier and expanded.
    pub expansions: usize,
    /// Amount of states pushed to the frontier, including the initial one.
    pub generated: usize,
    /// The biggest size of the frontier observed during the search.
    pub max_frontier_size: usize,
    /// Search duration in milliseconds.
    pub duration: u128,
}

/// Represents an optimal closed tour.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Visited locations in order. The first and the last elements are the origin.
    pub tour: Vec<Location>,
    /// Total cost of the closed tour.
    pub cost: Float,
    /// Search statistics.
    pub statistics: SearchStatistics,
}

impl Solution {
    /// Returns city names of the tour in visiting order, ending with the origin.
    pub fn names<'a>(&self, problem: &'a Problem) -> Vec<&'a str> {
        self.tour.iter().map(|&location| problem.city(location).name.as_str()).collect()
    }
}
