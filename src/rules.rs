use itertools::Itertools;

use crate::grid::{Digit, Grid, Pos};

/// Whether `d` may be placed at `p` given the current fill.
///
/// Checks `p`'s row, column, and 3x3 box for an existing occurrence of
/// `d`. The target cell is expected to be empty; emptiness is the
/// caller's check, not re-done here. Read-only, never fails.
pub fn is_valid_placement(grid: &Grid, p: Pos, d: Digit) -> bool {
    for i in 0..9 {
        if grid.get(Pos { r: p.r, c: i }) == d { return false; }
        if grid.get(Pos { r: i, c: p.c }) == d { return false; }
    }
    let br = (p.r / 3) * 3;
    let bc = (p.c / 3) * 3;
    for (r, c) in (br..br + 3).cartesian_product(bc..bc + 3) {
        if grid.get(Pos { r, c }) == d { return false; }
    }
    true
}

/// True once every cell holds a digit. Fullness is the game's whole
/// completion condition; no whole-board validity re-check happens.
pub fn is_full(grid: &Grid) -> bool {
    grid.cells().iter().all(|&d| d != 0)
}
