#[cfg(test)]
#[path = "../../tests/unit/search/cost_test.rs"]
mod cost_test;

use crate::models::{EdgeCostTable, Location};
use crate::utils::Float;

/// Returns the realized cost of the path: a sum of consecutive edge costs in visiting order.
/// Empty and single location paths cost nothing.
pub fn path_cost(path: &[Location], costs: &EdgeCostTable) -> Float {
    path.windows(2).map(|pair| costs.cost(pair[0], pair[1])).sum()
}

/// Returns the cost of the closed tour: the path cost plus the edge from the last location back
/// to the first one.
pub fn tour_cost(path: &[Location], costs: &EdgeCostTable) -> Float {
    match (path.first(), path.last()) {
        (Some(&first), Some(&last)) => path_cost(path, costs) + costs.cost(last, first),
        _ => 0.,
    }
}
