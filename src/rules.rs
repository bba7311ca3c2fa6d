//! # Swap Legality
//!
//! Pure evaluation of whether exchanging two cells' gems would create a run
//! of equal gems through either cell. The swap is simulated by substitution:
//! the *other* coordinate's gem is tested into each candidate window while
//! every neighbor is read from the unmutated grid, including the other swap
//! coordinate's pre-swap value when it happens to fall inside a window.

use crate::config::BoardConfig;
use crate::events::{Axis, Coord};
use crate::grid::Grid;
use crate::GemId;

/// Returns true if swapping `selected` and `target` would leave at least one
/// axis-aligned run of [`BoardConfig::run_length`] equal gems through either
/// coordinate. No side effects; both coordinates must be in bounds.
pub fn swap_creates_run(
    grid: &Grid,
    selected: Coord,
    target: Coord,
    config: &BoardConfig,
) -> bool {
    let selected_gem = grid.gem(selected.row, selected.col);
    let target_gem = grid.gem(target.row, target.col);

    // After the swap the target's gem sits in the selected slot and vice
    // versa, so each coordinate is tested with the other's gem.
    run_through(grid, selected, target_gem, config) || run_through(grid, target, selected_gem, config)
}

/// True if placing `gem` at `at` completes any run window through `at`.
fn run_through(grid: &Grid, at: Coord, gem: GemId, config: &BoardConfig) -> bool {
    for axis in [Axis::Col, Axis::Row] {
        // Every window of run_length consecutive cells containing `at`: the
        // window whose k-th cell is `at`, for each k. For run_length 3 these
        // are the (+1,+2), (-1,+1), and (-2,-1) neighbor triples.
        for k in 0..config.run_length {
            if window_matches(grid, at, gem, axis, k, config) {
                return true;
            }
        }
    }
    false
}

/// Checks the window along `axis` in which `at` occupies position `k`. Every
/// other cell of the window must hold `gem` and lie in bounds under the
/// configured edge policy; a window that would read outside those bounds is
/// skipped entirely (never matches).
fn window_matches(
    grid: &Grid,
    at: Coord,
    gem: GemId,
    axis: Axis,
    k: usize,
    config: &BoardConfig,
) -> bool {
    let (base, size) = match axis {
        Axis::Row => (at.col, grid.cols()),
        Axis::Col => (at.row, grid.rows()),
    };
    let floor = config.edge_policy.low_floor() as isize;

    for offset in -(k as isize)..=(config.run_length - 1 - k) as isize {
        if offset == 0 {
            continue;
        }
        let index = base as isize + offset;
        // The legacy policy rejects index 0 for negative offsets, a strict
        // `> 0` boundary test.
        let low = if offset < 0 { floor } else { 0 };
        if index < low || index >= size as isize {
            return false;
        }
        let neighbor = match axis {
            Axis::Row => grid.gem(at.row, index as usize),
            Axis::Col => grid.gem(index as usize, at.col),
        };
        if neighbor != gem {
            return false;
        }
    }
    true
}
