//! Property-based tests for the breadth-first solver, checked against the explicit state graph.

use itertools::Itertools;
use missionaries::{Crossing, Objective, PuzzleSize, Shore, Solver, State, StateGraph};
use proptest::prelude::*;

fn any_start() -> impl Strategy<Value = State> {
    (0usize..=5, 0usize..=5, 1usize..=4)
        .prop_flat_map(|(missionaries, cannibals, boat_capacity)| (
            Just(PuzzleSize::new(missionaries, cannibals, boat_capacity)),
            0..=missionaries,
            0..=cannibals,
            prop_oneof![Just(Shore::Left), Just(Shore::Right)],
        ))
        .prop_map(|(size, missionaries_left, cannibals_left, boat)| {
            State::new(size, missionaries_left, cannibals_left, boat, Objective::all_across(size))
        })
}

fn safe_start() -> impl Strategy<Value = State> {
    any_start().prop_filter("missionaries outnumbered at the start", State::is_valid)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: a found solution starts where asked, ends at the objective, and only passes through safe states
    #[test]
    fn prop_solution_is_a_safe_walk(start in safe_start()) {
        let solution = Solver::from(&start).solve_from_state(&start);
        if solution.is_empty() {
            return Ok(());
        }

        prop_assert_eq!(solution.steps()[0].state, start);
        prop_assert!(solution.final_state().unwrap().is_objective());
        prop_assert!(solution.states().all(State::is_valid));
        prop_assert_eq!(
            solution.iter().map(|step| step.position).collect_vec(),
            (0..solution.len()).collect_vec()
        );

        for (from, to) in solution.states().tuple_windows() {
            let crossing = Crossing::between(from, to);
            prop_assert!(crossing.is_some(), "{} -> {} is not a single trip", from, to);
        }
    }

    /// Property: the solver's path is as short as the shortest route through the explored state graph
    #[test]
    fn prop_solution_is_shortest(start in safe_start()) {
        let solution = Solver::from(&start).solve_from_state(&start);
        let graph = StateGraph::explore(&start);
        let shortest = graph.goals(&start.objective(), &start.size())
            .into_iter()
            .filter_map(|goal| graph.distance(start.key(), goal))
            .min();

        match shortest {
            None => prop_assert!(solution.is_empty()),
            Some(distance) => prop_assert_eq!(solution.crossings(), distance),
        }
    }

    /// Property: the search never visits more states than the size allows, and never fewer than the path needs
    #[test]
    fn prop_state_graph_is_bounded(start in any_start()) {
        let graph = StateGraph::explore(&start);
        prop_assert!(graph.len() <= start.size().key_space());
        prop_assert!(graph.contains(start.key()));
    }

    /// Property: solving twice gives the same answer
    #[test]
    fn prop_solving_is_deterministic(start in any_start()) {
        let solver = Solver::from(&start);
        prop_assert_eq!(solver.solve_from_state(&start), solver.solve_from_state(&start));
    }
}
