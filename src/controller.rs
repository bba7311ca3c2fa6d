//! # Swap Controller
//!
//! The two-click selection protocol: a press stores a pending selection, the
//! following release attempts the swap. Legality is decided by [`rules`] on
//! the pre-swap grid; a legal swap is applied and arms the scanner, an
//! illegal one mutates nothing. Either way the selection is consumed.
//!
//! [`rules`]: crate::rules

use crate::config::BoardConfig;
use crate::events::{Coord, EffectSink};
use crate::grid::Grid;
use crate::rules;
use crate::scanner::BoardScanner;

/// What a release did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The swap was legal and has been applied.
    Applied { a: Coord, b: Coord },
    /// The swap would create no run; the grid is untouched.
    Rejected { a: Coord, b: Coord },
    /// No press preceded this release.
    NoSelection,
}

/// Press/release state machine. Idle until a press stores a selection; the
/// next release consumes it regardless of the swap outcome.
#[derive(Debug, Default)]
pub struct SwapController {
    selection: Option<Coord>,
}

impl SwapController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pending selection, for the presentation layer's highlight.
    pub fn selection(&self) -> Option<Coord> {
        self.selection
    }

    /// Stores `at` as the pending selection. A press while something is
    /// already selected simply overwrites it; the last press wins.
    pub fn press(&mut self, at: Coord) {
        self.selection = Some(at);
    }

    /// Consumes the pending selection and attempts to swap it with `at`.
    /// On a legal swap the grid is mutated, the sink is notified, and the
    /// scanner is armed for its next sweep.
    pub fn release(
        &mut self,
        grid: &mut Grid,
        at: Coord,
        config: &BoardConfig,
        scanner: &mut BoardScanner,
        sink: &mut impl EffectSink,
    ) -> SwapOutcome {
        let Some(selected) = self.selection.take() else {
            return SwapOutcome::NoSelection;
        };

        if !grid.in_bounds(selected) || !grid.in_bounds(at) {
            return SwapOutcome::Rejected { a: selected, b: at };
        }
        if !rules::swap_creates_run(grid, selected, at, config) {
            log::debug!("rejected swap {} <-> {}", selected, at);
            return SwapOutcome::Rejected { a: selected, b: at };
        }
        if grid.swap(selected, at).is_err() {
            // Unreachable after the bounds check above, but a swap that
            // failed must not arm the scanner.
            return SwapOutcome::Rejected { a: selected, b: at };
        }

        log::debug!("applied swap {} <-> {}", selected, at);
        sink.on_swap_applied(selected, at);
        scanner.arm();
        SwapOutcome::Applied { a: selected, b: at }
    }
}
