//! End-to-end exercise of the core: deal a board, perform the press/release
//! swap protocol, and verify the gated scan reports exactly the run the swap
//! created.

use match3::{
    Axis, BoardConfig, BoardScanner, Coord, EdgePolicy, GemId, Grid, RecordingSink,
    SwapController, SwapOutcome,
};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// A board whose filler pattern never forms a run, with explicit placements.
fn board(placements: &[(usize, usize, GemId)], config: &BoardConfig) -> Grid {
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
fn test_swap_then_scan_reports_the_created_run() {
    let config = BoardConfig::default();
    // Gem 2 sits at (4,4); two more wait at (4,6) and (4,7). Dragging it one
    // cell right completes the run.
    let mut grid = board(&[(4, 4, 2), (4, 6, 2), (4, 7, 2)], &config);
    let mut controller = SwapController::new();
    let mut scanner = BoardScanner::new();
    let mut sink = RecordingSink::new();

    // Nothing to report before the swap.
    assert_eq!(scanner.scan(&grid, &config, &mut sink), 0);

    controller.press(Coord::new(4, 4));
    let outcome = controller.release(&mut grid, Coord::new(4, 5), &config, &mut scanner, &mut sink);
    assert_eq!(
        outcome,
        SwapOutcome::Applied {
            a: Coord::new(4, 4),
            b: Coord::new(4, 5),
        }
    );

    assert_eq!(scanner.scan(&grid, &config, &mut sink), 1);
    let event = &sink.matches[0];
    assert_eq!(event.axis, Axis::Row);
    assert_eq!(
        event.cells,
        vec![Coord::new(4, 5), Coord::new(4, 6), Coord::new(4, 7)]
    );

    // One arming buys one sweep.
    assert_eq!(scanner.scan(&grid, &config, &mut sink), 0);
}

#[test]
fn test_rejected_swap_leaves_board_and_scanner_untouched() {
    let config = BoardConfig::default();
    let mut grid = board(&[(4, 4, 2), (4, 7, 2)], &config);
    let before = grid.clone();
    let mut controller = SwapController::new();
    let mut scanner = BoardScanner::new();
    let mut sink = RecordingSink::new();

    controller.press(Coord::new(4, 4));
    let outcome = controller.release(&mut grid, Coord::new(4, 5), &config, &mut scanner, &mut sink);

    assert!(matches!(outcome, SwapOutcome::Rejected { .. }));
    assert_eq!(grid, before);
    assert_eq!(scanner.scan(&grid, &config, &mut sink), 0);
    assert!(sink.is_empty());
}

#[test]
fn test_bomb_then_scan_finds_preexisting_runs() {
    let config = BoardConfig::default();
    // A run already on the board stays invisible until something arms the
    // scanner; a bomb anywhere does.
    let grid = board(&[(6, 3, 1), (7, 3, 1), (8, 3, 1)], &config);
    let mut scanner = BoardScanner::new();
    let mut sink = RecordingSink::new();

    assert_eq!(scanner.scan(&grid, &config, &mut sink), 0);

    scanner.bomb(Coord::new(0, 0), &mut sink);
    assert_eq!(scanner.scan(&grid, &config, &mut sink), 1);
    assert_eq!(sink.bombs, vec![Coord::new(0, 0)]);
    assert_eq!(sink.matches[0].axis, Axis::Col);
}

#[test]
fn test_dealt_boards_are_reproducible_and_in_range() {
    let config = BoardConfig::default();
    let mut rng_a = Xoshiro256PlusPlus::seed_from_u64(42);
    let mut rng_b = Xoshiro256PlusPlus::seed_from_u64(42);

    let a = Grid::new(&config, &mut rng_a);
    let b = Grid::new(&config, &mut rng_b);
    assert_eq!(a, b);

    for row in 0..config.rows {
        for col in 0..config.cols {
            assert!(a.gem(row, col) < config.gem_kinds);
        }
    }
}

#[test]
fn test_edge_policy_changes_what_a_scan_sees() {
    // The same bottom-row run is invisible under the legacy edge rule and
    // reported under the inclusive one.
    let legacy = BoardConfig::default();
    let inclusive = BoardConfig {
        edge_policy: EdgePolicy::Inclusive,
        ..BoardConfig::default()
    };
    let grid = board(&[(0, 4, 3), (1, 4, 3), (2, 4, 3)], &legacy);
    let mut scanner = BoardScanner::new();
    let mut sink = RecordingSink::new();

    scanner.arm();
    assert_eq!(scanner.scan(&grid, &legacy, &mut sink), 0);

    scanner.arm();
    assert_eq!(scanner.scan(&grid, &inclusive, &mut sink), 1);
}
