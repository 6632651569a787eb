//! Dyadic merge transform (Brady–Yong style fast Hough transform).
//!
//! The `D × D` accumulator is folded over `log2(D)` doubling levels. At level
//! `step`, every row already holds the mass of a height-`step` sub-line
//! family; merging rows `i` and `i + step` of a `2·step`-row block with
//! cyclic column shifts `i` and `i + 1` produces the two height-`2·step`
//! children of each parent slope. After the final level the row index reads
//! as the line's total column drift (mod `D`) and the column index as its
//! start column at row 0.
//!
//! The source formulation is tail-recursive over the doubling `step`; an
//! explicit level loop avoids any recursion-depth concern and makes the
//! snapshot invariant obvious: each level reads only the previous level's
//! full output, never its own partial writes.

use crate::grid::{add_shifted, Grid};

/// Number of merge levels for side `d`: `log2(d)`, zero for the trivial
/// `d = 1` grid.
#[inline]
pub fn level_count(d: usize) -> u32 {
    debug_assert!(d.is_power_of_two());
    d.trailing_zeros()
}

/// Run the full transform. Entry `(drift, start)` of the result holds the
/// total mass of the discrete line that crosses row 0 at column `start` and
/// accumulates `drift` columns of displacement (cyclically) by row `D-1`.
///
/// `O(D² log D)` time, one `O(D²)` scratch grid per level for the snapshot.
pub fn transform(plane: &Grid) -> Grid {
    let d = plane.side();
    let mut out = plane.clone();
    let mut step = 1;
    while step < d {
        // Double-buffer between levels: blocks within a level commute, but
        // every merged row must be derived from the pre-level state.
        let snapshot = out.clone();
        for block in (0..d).step_by(2 * step) {
            for i in 0..step {
                add_shifted(
                    out.row_mut(block + 2 * i),
                    snapshot.row(block + i),
                    snapshot.row(block + i + step),
                    i,
                );
                add_shifted(
                    out.row_mut(block + 2 * i + 1),
                    snapshot.row(block + i),
                    snapshot.row(block + i + step),
                    i + 1,
                );
            }
        }
        step *= 2;
    }
    out
}
