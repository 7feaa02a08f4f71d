//! Bindings for browser front ends.

use itertools::Itertools;
use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::builder::PuzzleBuilder;
use crate::puzzle::PuzzleSize;
use crate::shore::Shore;
use crate::solver::Solver;

/// Solve a puzzle of the given size from its usual start, for browser front ends.
///
/// Each element of the returned array is `[missionariesLeft, cannibalsLeft, boatOnLeft]`, starting state first.
/// The array is empty if the puzzle has no solution. A size the builder rejects is thrown as an error.
#[wasm_bindgen(js_name = solvePuzzle)]
pub fn solve_puzzle(missionaries: u32, cannibals: u32, boat_capacity: u32) -> Result<Array, JsError> {
    let initial = PuzzleBuilder::with_size(PuzzleSize::new(missionaries as usize, cannibals as usize, boat_capacity as usize))
        .build()
        .map_err(|reasons| JsError::new(&reasons.iter().join(", ")))?;

    Ok(Solver::from(&initial)
        .solve_from_state(&initial)
        .states()
        .map(|state| Array::of3(
            &JsValue::from(state.missionaries_left()),
            &JsValue::from(state.cannibals_left()),
            &JsValue::from_bool(state.boat() == Shore::Left),
        ))
        .collect())
}
