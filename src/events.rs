//! # Events and the Effect Sink
//!
//! The core never draws; it reports what happened through the [`EffectSink`]
//! trait and lets the presentation layer decide how to animate it. A swap that
//! was applied, a run of equal gems found by the scanner, and a single-cell
//! bomb are the only three intents the core produces.

use std::fmt;

/// A grid coordinate. Row 0 is the bottom row in the logical world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The axis a run lies along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// A horizontal run (consecutive columns within one row).
    Row,
    /// A vertical run (consecutive rows within one column).
    Col,
}

/// A run of `run_length` equal gems found by the scanner. Overlapping events
/// are possible for runs longer than the configured length; consumers must
/// tolerate seeing the same cell in more than one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEvent {
    pub axis: Axis,
    pub cells: Vec<Coord>,
}

/// Receives effect intents from the core. The presentation layer implements
/// this to drive highlights and clear animations; clearing is visual only and
/// never removes cells from the grid.
pub trait EffectSink {
    /// A legal swap was applied between `a` and `b`.
    fn on_swap_applied(&mut self, a: Coord, b: Coord);
    /// The scanner found a run of equal gems.
    fn on_match_found(&mut self, event: &MatchEvent);
    /// A single cell was bombed (manually or by the random trigger).
    fn on_bomb(&mut self, at: Coord);
}

/// Discards every event. Useful when only the grid mutation matters.
pub struct NullSink;

impl EffectSink for NullSink {
    fn on_swap_applied(&mut self, _a: Coord, _b: Coord) {}
    fn on_match_found(&mut self, _event: &MatchEvent) {}
    fn on_bomb(&mut self, _at: Coord) {}
}

/// Buffers every event in order. The frontend drains it once per tick; tests
/// assert on its contents directly.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub swaps: Vec<(Coord, Coord)>,
    pub matches: Vec<MatchEvent>,
    pub bombs: Vec<Coord>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no events have been recorded since the last clear.
    pub fn is_empty(&self) -> bool {
        self.swaps.is_empty() && self.matches.is_empty() && self.bombs.is_empty()
    }

    pub fn clear(&mut self) {
        self.swaps.clear();
        self.matches.clear();
        self.bombs.clear();
    }
}

impl EffectSink for RecordingSink {
    fn on_swap_applied(&mut self, a: Coord, b: Coord) {
        self.swaps.push((a, b));
    }

    fn on_match_found(&mut self, event: &MatchEvent) {
        self.matches.push(event.clone());
    }

    fn on_bomb(&mut self, at: Coord) {
        self.bombs.push(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_orders_events() {
        let mut sink = RecordingSink::new();
        assert!(sink.is_empty());

        sink.on_swap_applied(Coord::new(1, 2), Coord::new(1, 3));
        sink.on_bomb(Coord::new(4, 4));
        sink.on_match_found(&MatchEvent {
            axis: Axis::Row,
            cells: vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(0, 3)],
        });

        assert_eq!(sink.swaps, vec![(Coord::new(1, 2), Coord::new(1, 3))]);
        assert_eq!(sink.bombs, vec![Coord::new(4, 4)]);
        assert_eq!(sink.matches.len(), 1);

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_coord_display() {
        assert_eq!(Coord::new(4, 7).to_string(), "(4, 7)");
    }
}
