//! A collection of models to represent a problem and its solution.

mod city;
pub use self::city::*;

mod costs;
pub use self::costs::*;

mod error;
pub use self::error::SolveError;

mod problem;
pub use self::problem::Problem;

mod solution;
pub use self::solution::*;
