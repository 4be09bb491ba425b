//! Minimum spanning tree estimation using Prim's algorithm.
//!
//! The spanning tree is grown from the first node of the given slice. On every step, the node with
//! the cheapest connection to the tree is added. When several nodes share the cheapest connection,
//! the one which comes first in the slice wins, so the result is reproducible for the same input.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/mst_test.rs"]
mod mst_test;

use crate::models::{EdgeCostTable, Location};
use crate::utils::Float;

/// Returns the total cost of a minimum spanning tree over given nodes.
/// Empty and single node sets have zero cost.
pub fn mst_cost(nodes: &[Location], costs: &EdgeCostTable) -> Float {
    if nodes.len() < 2 {
        return 0.;
    }

    let mut key = vec![Float::INFINITY; nodes.len()];
    let mut in_tree = vec![false; nodes.len()];
    key[0] = 0.;

    let mut total = 0.;
    while let Some(selected) = min_key(&key, &in_tree) {
        in_tree[selected] = true;
        total += key[selected];

        let from = nodes[selected];
        nodes.iter().enumerate().filter(|&(idx, _)| !in_tree[idx]).for_each(|(idx, &to)| {
            let cost = costs.cost(from, to);
            if cost < key[idx] {
                key[idx] = cost;
            }
        });
    }

    total
}

/// Selects a node which is not yet in the tree and has the smallest key. Ties, including the case
/// when all remaining keys are infinite, are resolved in favor of the earliest node. Returns `None`
/// only when all nodes are in the tree.
fn min_key(key: &[Float], in_tree: &[bool]) -> Option<usize> {
    (0..key.len()).filter(|&idx| !in_tree[idx]).fold(None, |best, idx| match best {
        Some(best_idx) if key[best_idx] <= key[idx] => Some(best_idx),
        _ => Some(idx),
    })
}
