//! A collection of reusable algorithms without dependencies on the search module.

pub mod mst;
