//! A crate contains command line front end of the exact TSP solver together with helper
//! functionality which is useful outside of the binary: solver configuration, format selection,
//! interruption handling and problem generation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub use tsp_core as core;
pub use tsp_formats as formats;

pub mod extensions;
