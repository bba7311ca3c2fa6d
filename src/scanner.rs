//! # Board Scanner and Bomb Triggers
//!
//! After a mutation the whole board is swept for runs of equal gems. The
//! sweep is gated: it only runs when the scanner has been armed by a
//! successful swap or a bomb, and each arming buys exactly one sweep. The
//! board cannot change between sweeps, so re-scanning while idle would only
//! find the same runs again.

use crate::config::BoardConfig;
use crate::events::{Axis, Coord, EffectSink, MatchEvent};
use crate::grid::Grid;
use rand::Rng;

/// Gated full-board run detector.
#[derive(Debug, Default)]
pub struct BoardScanner {
    armed: bool,
}

impl BoardScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the scan flag. Called by the controller after a successful swap
    /// and by [`BoardScanner::bomb`].
    pub fn arm(&mut self) {
        self.armed = true;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Bombs a single cell: emits the effect intent and arms a sweep. The
    /// cell itself is untouched; clearing is the presentation layer's
    /// business.
    pub fn bomb(&mut self, at: Coord, sink: &mut impl EffectSink) {
        sink.on_bomb(at);
        self.arm();
    }

    /// Sweeps the board for runs if armed, emitting one [`MatchEvent`] per
    /// matching window, and clears the flag. Returns the number of events
    /// emitted; zero when idle.
    ///
    /// Runs longer than `run_length` produce one event per overlapping
    /// window; consumers must tolerate seeing a cell more than once.
    pub fn scan(
        &mut self,
        grid: &Grid,
        config: &BoardConfig,
        sink: &mut impl EffectSink,
    ) -> usize {
        if !self.armed {
            return 0;
        }
        self.armed = false;

        let n = config.run_length;
        let floor = config.edge_policy.low_floor();
        let mut found = 0;

        // Horizontal windows: the legacy edge policy keeps windows off
        // column 0.
        for row in 0..grid.rows() {
            for start in floor..(grid.cols() + 1).saturating_sub(n) {
                if (1..n).all(|i| grid.gem(row, start + i) == grid.gem(row, start)) {
                    let cells = (0..n).map(|i| Coord::new(row, start + i)).collect();
                    sink.on_match_found(&MatchEvent {
                        axis: Axis::Row,
                        cells,
                    });
                    found += 1;
                }
            }
        }

        // Vertical windows.
        for col in 0..grid.cols() {
            for start in floor..(grid.rows() + 1).saturating_sub(n) {
                if (1..n).all(|i| grid.gem(start + i, col) == grid.gem(start, col)) {
                    let cells = (0..n).map(|i| Coord::new(start + i, col)).collect();
                    sink.on_match_found(&MatchEvent {
                        axis: Axis::Col,
                        cells,
                    });
                    found += 1;
                }
            }
        }

        found
    }
}

/// Injectable per-tick random bomb policy: with the configured probability,
/// each tick bombs one uniformly random cell. Sampled only while quake mode
/// is on; 1/1000 per tick by default.
#[derive(Debug, Clone, Copy)]
pub struct BombTrigger {
    probability: f64,
}

impl BombTrigger {
    pub fn new(probability: f64) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
        }
    }

    /// Samples the trigger for one tick. Returns the cell to bomb, if any.
    pub fn fire<R: Rng>(&self, rng: &mut R, rows: usize, cols: usize) -> Option<Coord> {
        if rows == 0 || cols == 0 || !rng.gen_bool(self.probability) {
            return None;
        }
        Some(Coord::new(rng.gen_range(0..rows), rng.gen_range(0..cols)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EdgePolicy;
    use crate::events::{NullSink, RecordingSink};
    use crate::GemId;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn grid_with(placements: &[(usize, usize, GemId)], config: &BoardConfig) -> Grid {
        let mut gems: Vec<Vec<GemId>> = (0..config.rows)
            .map(|r| {
                (0..config.cols)
                    .map(|c| ((r * 2 + c * 3) % 5 + 10) as GemId)
                    .collect()
            })
            .collect();
        for &(row, col, gem) in placements {
            gems[row][col] = gem;
        }
        Grid::from_gems(config, &gems).unwrap()
    }

    #[test]
    fn test_idle_scanner_does_nothing() {
        let config = BoardConfig::default();
        let grid = grid_with(&[(4, 4, 2), (4, 5, 2), (4, 6, 2)], &config);
        let mut scanner = BoardScanner::new();
        let mut sink = RecordingSink::new();

        assert_eq!(scanner.scan(&grid, &config, &mut sink), 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_armed_scan_finds_horizontal_run() {
        let config = BoardConfig::default();
        let grid = grid_with(&[(4, 4, 2), (4, 5, 2), (4, 6, 2)], &config);
        let mut scanner = BoardScanner::new();
        let mut sink = RecordingSink::new();

        scanner.arm();
        assert_eq!(scanner.scan(&grid, &config, &mut sink), 1);

        let event = &sink.matches[0];
        assert_eq!(event.axis, Axis::Row);
        assert_eq!(
            event.cells,
            vec![Coord::new(4, 4), Coord::new(4, 5), Coord::new(4, 6)]
        );
    }

    #[test]
    fn test_armed_scan_finds_vertical_run() {
        let config = BoardConfig::default();
        let grid = grid_with(&[(3, 7, 1), (4, 7, 1), (5, 7, 1)], &config);
        let mut scanner = BoardScanner::new();
        let mut sink = RecordingSink::new();

        scanner.arm();
        scanner.scan(&grid, &config, &mut sink);
        assert_eq!(sink.matches.len(), 1);
        assert_eq!(sink.matches[0].axis, Axis::Col);
    }

    #[test]
    fn test_scan_disarms_after_sweep() {
        let config = BoardConfig::default();
        let grid = grid_with(&[(4, 4, 2), (4, 5, 2), (4, 6, 2)], &config);
        let mut scanner = BoardScanner::new();
        let mut sink = RecordingSink::new();

        scanner.arm();
        scanner.scan(&grid, &config, &mut sink);
        assert!(!scanner.is_armed());
        assert_eq!(scanner.scan(&grid, &config, &mut sink), 0);
        assert_eq!(sink.matches.len(), 1);
    }

    #[test]
    fn test_run_of_four_emits_overlapping_windows() {
        let config = BoardConfig::default();
        let grid = grid_with(&[(4, 4, 2), (4, 5, 2), (4, 6, 2), (4, 7, 2)], &config);
        let mut scanner = BoardScanner::new();
        let mut sink = RecordingSink::new();

        scanner.arm();
        assert_eq!(scanner.scan(&grid, &config, &mut sink), 2);
    }

    #[test]
    fn test_legacy_policy_skips_runs_at_column_zero() {
        let config = BoardConfig::default();
        let grid = grid_with(&[(4, 0, 2), (4, 1, 2), (4, 2, 2)], &config);
        let mut scanner = BoardScanner::new();
        let mut sink = RecordingSink::new();

        scanner.arm();
        assert_eq!(scanner.scan(&grid, &config, &mut sink), 0);

        let config = BoardConfig {
            edge_policy: EdgePolicy::Inclusive,
            ..BoardConfig::default()
        };
        scanner.arm();
        assert_eq!(scanner.scan(&grid, &config, &mut sink), 1);
    }

    #[test]
    fn test_scan_counts_runs_even_when_events_are_discarded() {
        let config = BoardConfig::default();
        let grid = grid_with(&[(4, 4, 2), (4, 5, 2), (4, 6, 2)], &config);
        let mut scanner = BoardScanner::new();

        scanner.arm();
        assert_eq!(scanner.scan(&grid, &config, &mut NullSink), 1);
        assert!(!scanner.is_armed());
    }

    #[test]
    fn test_bomb_emits_event_and_arms() {
        let mut scanner = BoardScanner::new();
        let mut sink = RecordingSink::new();

        scanner.bomb(Coord::new(3, 3), &mut sink);
        assert_eq!(sink.bombs, vec![Coord::new(3, 3)]);
        assert!(scanner.is_armed());
    }

    #[test]
    fn test_trigger_never_fires_at_zero_probability() {
        let trigger = BombTrigger::new(0.0);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        for _ in 0..1000 {
            assert_eq!(trigger.fire(&mut rng, 10, 10), None);
        }
    }

    #[test]
    fn test_trigger_always_fires_at_full_probability() {
        let trigger = BombTrigger::new(1.0);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        for _ in 0..100 {
            let at = trigger.fire(&mut rng, 10, 10).unwrap();
            assert!(at.row < 10 && at.col < 10);
        }
    }

    #[test]
    fn test_trigger_probability_is_clamped() {
        let trigger = BombTrigger::new(7.5);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        assert!(trigger.fire(&mut rng, 10, 10).is_some());
    }
}
