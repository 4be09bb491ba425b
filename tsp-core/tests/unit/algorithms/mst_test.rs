use super::*;
use crate::helpers::models::{create_costs, create_random_problem, create_square_problem};
use crate::helpers::search::assert_float_eq;

#[test]
fn can_calculate_mst_cost_for_square() {
    let problem = create_square_problem();

    let cost = mst_cost(&[0, 1, 2, 3], &problem.costs);

    assert_float_eq(cost, 3.);
}

parameterized_test! {can_return_zero_for_trivial_sets, nodes, {
    let nodes: &[Location] = nodes;
    let problem = create_square_problem();

    assert_eq!(mst_cost(nodes, &problem.costs), 0.);
}}

can_return_zero_for_trivial_sets! {
    case_01_empty: &[],
    case_02_single: &[2],
}

#[test]
fn can_calculate_mst_cost_for_subset() {
    let problem = create_square_problem();

    assert_float_eq(mst_cost(&[0, 2], &problem.costs), 2_f64.sqrt());
    assert_float_eq(mst_cost(&[1, 2, 3], &problem.costs), 2.);
}

#[test]
fn can_calculate_mst_cost_for_known_graph() {
    // a graph where greedy nearest neighbour chain is not a minimum tree
    let costs = create_costs(vec![
        vec![0., 2., 6., 3.],
        vec![2., 0., 1., 9.],
        vec![6., 1., 0., 4.],
        vec![3., 9., 4., 0.],
    ]);

    assert_eq!(mst_cost(&[0, 1, 2, 3], &costs), 6.);
    assert_eq!(mst_cost(&[3, 2, 1, 0], &costs), 6.);
}

#[test]
fn can_get_the_same_cost_regardless_of_node_order() {
    let problem = create_random_problem(8, 7);
    let nodes = problem.locations().collect::<Vec<_>>();
    let reversed = nodes.iter().rev().copied().collect::<Vec<_>>();

    assert_float_eq(mst_cost(&nodes, &problem.costs), mst_cost(&reversed, &problem.costs));
}

#[test]
fn can_get_deterministic_cost_on_repeated_runs() {
    let problem = create_random_problem(9, 11);
    let nodes = problem.locations().collect::<Vec<_>>();

    let expected = mst_cost(&nodes, &problem.costs);

    (0..10).for_each(|_| assert_eq!(mst_cost(&nodes, &problem.costs), expected));
}

parameterized_test! {can_select_min_key, (key, in_tree, expected), {
    let key: &[Float] = key;
    let in_tree: &[bool] = in_tree;

    assert_eq!(min_key(key, in_tree), expected);
}}

can_select_min_key! {
    case_01_smallest: (&[3., 1., 2.], &[false, false, false], Some(1)),
    case_02_skips_tree: (&[3., 1., 2.], &[false, true, false], Some(2)),
    case_03_first_on_tie: (&[2., 1., 1.], &[false, false, false], Some(1)),
    case_04_all_infinite: (&[0., Float::INFINITY, Float::INFINITY], &[true, false, false], Some(1)),
    case_05_all_in_tree: (&[0., 1.], &[true, true], None),
}
