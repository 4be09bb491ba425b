//! Formats crate contains logic to read problems and write solutions of the TSP solver.
//!
//!
//! # Supported formats
//!
//! - **table**: a header line followed by `name x y` rows separated by whitespace
//! - **tsplib**: subset of TSPLIB95 format with `EUC_2D` coordinates
//!
//! Solutions can be written as plain text or json.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub use tsp_core as core;

pub mod common;
pub mod solution;
pub mod table;
pub mod tsplib;
