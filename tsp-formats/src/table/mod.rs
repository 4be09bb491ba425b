//! Contains functionality to read and write problems in a simple table format: the first line is
//! a header which is ignored, each next non-empty line defines a city as `name x y`.
//!
//! The first city is considered as the tour origin.

mod reader;
pub use self::reader::TableProblem;

mod writer;
pub use self::writer::write_table;
