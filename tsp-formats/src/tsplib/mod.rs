//! Contains functionality to read a subset of TSPLIB95 format: symmetric problems with `EUC_2D`
//! node coordinates. Node ids are used as city names, the first node is the tour origin.

mod reader;
pub use self::reader::TsplibProblem;
