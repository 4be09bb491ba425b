//! Contains command line extensions.

pub mod generate;
pub mod solve;
