//! Core crate contains an exact solver for small instances of ***Traveling Salesman Problem*** (TSP).
//!
//! The solver runs A* search over partial tours starting at a designated origin city. Each partial
//! tour is scored by `f = g + h`, where `g` is the realized length of the partial tour and `h` is an
//! admissible lower bound on the remaining cost:
//!
//! - the cost of a minimum spanning tree (Prim's algorithm) over not yet visited cities
//! - the distance from the current city to the nearest unvisited city
//! - the distance from the origin to its nearest unvisited city
//!
//! As the bound never overestimates, the first complete tour taken from the frontier is optimal.
//! The search is exponential in the worst case, so it is meant for small instances only.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tsp_core::prelude::*;
//!
//! let cities = vec![City::new("A", 0., 0.), City::new("B", 3., 0.), City::new("C", 0., 4.)];
//! let problem = Arc::new(Problem::new(cities)?);
//!
//! let solution = solve_problem(problem.clone())?;
//!
//! assert_eq!(solution.names(&problem), vec!["A", "B", "C", "A"]);
//! assert_eq!(solution.cost, 12.);
//! # Ok::<(), SolveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod models;
pub mod prelude;
pub mod search;
pub mod utils;

pub use self::search::{solve, solve_problem};
