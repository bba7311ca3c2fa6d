//! # GemSwap
//!
//! This is the main entry point for a terminal match-3 puzzle: a grid of
//! colored gems where pressing one cell and releasing on another swaps the
//! two gems, provided the swap lines up a run of equal gems. A gated scanner
//! then sweeps the board and plays an exit animation on every run it finds.
//!
//! The application provides a terminal user interface (TUI) built with
//! Ratatui, with mouse-driven swaps and keyboard camera controls.
//!
//! ## Features
//! - Press/release swap protocol with run-based legality
//! - Configurable board size, gem count, and run length
//! - Bomb mode and a quake mode with random bombs
//! - Deterministic boards via a seed flag
//!
//! ## Usage
//! Run with `cargo run --release` in a terminal with mouse support.

pub mod app;
pub mod tui;

use anyhow::Context;
use clap::Parser;
use match3::{BoardConfig, EdgePolicy};

use crate::app::App;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Board height in cells.
    #[clap(long, default_value_t = 10)]
    rows: usize,

    /// Board width in cells.
    #[clap(long, default_value_t = 10)]
    cols: usize,

    /// Number of distinct gem kinds to deal onto the board.
    #[clap(short, long, default_value_t = 6)]
    gem_kinds: u8,

    /// How many equal gems in a line count as a run.
    #[clap(short, long, default_value_t = 3)]
    run_length: usize,

    /// Let runs touch the low board edges (row and column zero). The default
    /// edge rule keeps them off.
    #[clap(long, action = clap::ArgAction::SetTrue)]
    inclusive_edges: bool,

    /// Per-tick probability of a random bomb while quake mode is on.
    #[clap(short, long, default_value_t = 0.001)]
    bomb_chance: f64,

    /// Seed for the board deal and random bombs; random when omitted.
    #[clap(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = BoardConfig {
        rows: args.rows,
        cols: args.cols,
        gem_kinds: args.gem_kinds,
        run_length: args.run_length,
        edge_policy: if args.inclusive_edges {
            EdgePolicy::Inclusive
        } else {
            EdgePolicy::Legacy
        },
    };
    config.validate().context("invalid board configuration")?;

    let mut app = App::new(config, args.bomb_chance, args.seed);
    tui::run(&mut app).context("terminal session failed")?;

    Ok(())
}
