#[cfg(test)]
#[path = "../../tests/unit/search/heuristic_test.rs"]
mod heuristic_test;

use crate::algorithms::mst::mst_cost;
use crate::models::{EdgeCostTable, Location};
use crate::utils::{Float, compare_floats_refs};

/// Estimates the remaining cost of the tour from `current` location through all `unvisited` ones
/// and back to the `origin`. The estimate is a sum of:
/// - a minimum spanning tree cost over unvisited locations
/// - a distance from the current location to the nearest unvisited one
/// - a distance from the origin to the nearest unvisited one
///
/// Each term is a lower bound for a separate part of any completion, so the estimate never exceeds
/// the true remaining cost. When nothing is left to visit, returns zero.
pub fn heuristic(current: Location, unvisited: &[Location], costs: &EdgeCostTable, origin: Location) -> Float {
    if unvisited.is_empty() {
        return 0.;
    }

    let nearest_unvisited =
        nearest_cost(current, unvisited.iter().copied().filter(|&location| location != current), costs);
    let nearest_to_origin = nearest_cost(origin, unvisited.iter().copied(), costs);

    mst_cost(unvisited, costs) + nearest_unvisited + nearest_to_origin
}

/// Returns a priority of the partial tour ending at `current`: its realized cost `g_score` plus
/// the heuristic estimate. For a complete tour, it is the cost of the open path.
pub fn f_score(
    g_score: Float,
    current: Location,
    unvisited: &[Location],
    costs: &EdgeCostTable,
    origin: Location,
) -> Float {
    g_score + heuristic(current, unvisited, costs, origin)
}

fn nearest_cost(from: Location, candidates: impl Iterator<Item = Location>, costs: &EdgeCostTable) -> Float {
    candidates.map(|to| costs.cost(from, to)).min_by(compare_floats_refs).unwrap_or(0.)
}
