use super::*;
use crate::helpers::models::{create_problem, create_random_problem, create_square_problem};
use crate::helpers::search::{assert_float_eq, brute_force_remaining_cost};
use crate::models::Problem;
use crate::search::SearchState;

#[test]
fn can_return_zero_at_goal() {
    let problem = create_random_problem(5, 3);

    problem.locations().for_each(|current| {
        assert_eq!(heuristic(current, &[], &problem.costs, problem.origin), 0.);
    });
}

#[test]
fn can_estimate_square_from_origin() {
    let problem = create_square_problem();

    // mst(B, C, D) = 2, nearest to A = 1, nearest to origin = 1
    assert_float_eq(heuristic(0, &[1, 2, 3], &problem.costs, 0), 4.);
}

#[test]
fn can_estimate_single_unvisited_exactly() {
    let problem = create_problem(&[("A", 0., 0.), ("B", 3., 0.), ("C", 0., 4.)]);

    // from B, only C is left: B -> C -> A
    assert_eq!(heuristic(1, &[2], &problem.costs, 0), 9.);
}

#[test]
fn can_measure_nearest_to_origin_from_fixed_origin() {
    let problem = create_problem(&[("A", 0., 0.), ("B", 10., 0.), ("C", 11., 0.), ("D", 20., 0.)]);

    // mst(C, D) = 9, nearest to B = C (1), nearest to A = C (11)
    assert_eq!(heuristic(1, &[2, 3], &problem.costs, 0), 21.);
}

#[test]
fn can_calculate_f_score() {
    let problem = create_square_problem();

    assert_float_eq(f_score(0., 0, &[1, 2, 3], &problem.costs, 0), 4.);
    assert_float_eq(f_score(1., 1, &[2, 3], &problem.costs, 0), 4.);
    assert_float_eq(f_score(3., 3, &[], &problem.costs, 0), 3.);
}

fn assert_admissible(problem: &Problem, state: &SearchState) {
    let estimate = heuristic(state.current(), state.unvisited(), &problem.costs, problem.origin);
    let actual = brute_force_remaining_cost(&problem.costs, state.current(), state.unvisited(), problem.origin);

    assert!(estimate <= actual + 1E-9, "estimate {estimate} exceeds remaining cost {actual}");

    state.expand(problem).for_each(|child| assert_admissible(problem, &child));
}

parameterized_test! {can_never_overestimate_remaining_cost, (size, seed), {
    let problem = create_random_problem(size, seed);

    assert_admissible(&problem, &SearchState::new_initial(&problem));
}}

can_never_overestimate_remaining_cost! {
    case_01: (3, 1),
    case_02: (4, 2),
    case_03: (5, 3),
    case_04: (6, 4),
    case_05: (6, 5),
    case_06: (7, 6),
}
