//! # Match-3 Puzzle Core
//!
//! This library implements the grid, match-detection, and swap-legality engine
//! of a real-time match-3 puzzle game. A board of typed gem cells is mutated
//! through a two-click (press/release) swap protocol; a gated full-board scan
//! finds runs of equal gems and reports them as effect intents.
//!
//! The core is presentation-agnostic: it consumes grid coordinates and emits
//! events through the [`EffectSink`] trait, which the frontend (a terminal UI
//! in this repository) realizes as highlights and bomb animations. No drawing,
//! input polling, or asset concerns live here.
//!
//! ## Components
//! - [`Grid`]: owns the cells, their gem ids, and their render positions
//! - [`rules`]: pure swap-legality evaluation with a configurable edge policy
//! - [`SwapController`]: the press/release selection state machine
//! - [`BoardScanner`]: the gated full-board run sweep and bomb triggers
//! - [`Camera`]: a logical pan/rotate camera with a decorative quake shake

pub mod camera;
pub mod config;
pub mod controller;
pub mod events;
pub mod grid;
pub mod rules;
pub mod scanner;

pub use camera::{Camera, CameraInput};
pub use config::{BoardConfig, ConfigError, EdgePolicy};
pub use controller::{SwapController, SwapOutcome};
pub use events::{Axis, Coord, EffectSink, MatchEvent, NullSink, RecordingSink};
pub use grid::{Cell, Grid, GridError};
pub use scanner::{BoardScanner, BombTrigger};

/// Identifies the visual/gameplay kind of a gem. Ids are dense, starting at 0;
/// the number of kinds in play is [`BoardConfig::gem_kinds`].
pub type GemId = u8;

/// A 2D point or offset in the logical world space the presentation layer
/// renders from. The board occupies `[-1, 1]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, s: f32) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
}
