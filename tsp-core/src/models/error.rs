use crate::utils::GenericError;
use std::fmt::{Display, Formatter};

/// Specifies distinct outcomes of a failed attempt to solve a problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The problem definition cannot be searched: too few cities, duplicate names, etc.
    InvalidInput(String),

    /// The frontier was exhausted without reaching a complete tour.
    NoSolutionFound {
        /// Amount of expanded states.
        expansions: usize,
    },

    /// The search was stopped by a budget (expansion limit, time, interruption) before
    /// a complete tour was reached.
    QuotaReached {
        /// Amount of expanded states.
        expansions: usize,
    },
}

impl Display for SolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::InvalidInput(cause) => write!(f, "invalid input: {cause}"),
            SolveError::NoSolutionFound { expansions } => {
                write!(f, "no solution found after {expansions} expansions")
            }
            SolveError::QuotaReached { expansions } => {
                write!(f, "search quota reached after {expansions} expansions")
            }
        }
    }
}

impl std::error::Error for SolveError {}

impl From<SolveError> for GenericError {
    fn from(value: SolveError) -> Self {
        GenericError::from(value.to_string())
    }
}
