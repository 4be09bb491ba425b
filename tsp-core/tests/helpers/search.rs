use crate::models::{EdgeCostTable, Location, Problem};
use crate::utils::{Float, compare_floats};

/// Returns the optimal closed tour cost by enumerating all permutations.
pub fn brute_force_tour_cost(problem: &Problem) -> Float {
    let unvisited = problem.locations().filter(|&location| location != problem.origin).collect::<Vec<_>>();

    brute_force_remaining_cost(&problem.costs, problem.origin, &unvisited, problem.origin)
}

/// Returns the optimal cost to visit all `unvisited` locations starting from `current` and
/// returning to `origin`.
pub fn brute_force_remaining_cost(
    costs: &EdgeCostTable,
    current: Location,
    unvisited: &[Location],
    origin: Location,
) -> Float {
    if unvisited.is_empty() {
        return costs.cost(current, origin);
    }

    unvisited
        .iter()
        .map(|&next| {
            let rest = unvisited.iter().copied().filter(|&location| location != next).collect::<Vec<_>>();
            costs.cost(current, next) + brute_force_remaining_cost(costs, next, &rest, origin)
        })
        .min_by(|a, b| compare_floats(*a, *b))
        .expect("no permutations")
}

/// Returns the amount of states in a complete search tree rooted at origin: the upper bound on
/// expansions for a problem of given size.
pub fn get_search_tree_size(size: usize) -> usize {
    let unvisited = size - 1;

    (0..=unvisited).fold((0, 1), |(total, level), depth| (total + level, level * (unvisited - depth))).0
}

pub fn assert_float_eq(actual: Float, expected: Float) {
    assert!((actual - expected).abs() < 1E-9, "expected {expected}, got {actual}");
}
