//! # Grid Model
//!
//! The grid owns every cell: its gem id and the logical render position the
//! presentation layer draws it at. Every slot is always occupied; swapping
//! exchanges occupants and "clearing" a matched cell is an animation intent
//! only, never a structural removal.

use crate::config::BoardConfig;
use crate::events::Coord;
use crate::{GemId, Vec2};
use rand::Rng;
use std::fmt;

/// A single grid slot: a typed gem and its rendered position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub gem: GemId,
    pub pos: Vec2,
}

/// A fixed-size board of cells, indexed `[row][col]` with row 0 at the bottom
/// of the world space. Pure data container; legality of mutations is the
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a board filled with uniformly random gems, each cell placed at
    /// its slot's world position.
    pub fn new<R: Rng>(config: &BoardConfig, rng: &mut R) -> Self {
        let mut cells = Vec::with_capacity(config.rows * config.cols);
        for row in 0..config.rows {
            for col in 0..config.cols {
                cells.push(Cell {
                    gem: rng.gen_range(0..config.gem_kinds),
                    pos: slot_position(row, col, config.rows, config.cols),
                });
            }
        }
        Self {
            rows: config.rows,
            cols: config.cols,
            cells,
        }
    }

    /// Builds a board from explicit gem ids, bottom row first. Used by tests
    /// and scripted scenarios.
    pub fn from_gems(config: &BoardConfig, gems: &[Vec<GemId>]) -> Result<Self, GridError> {
        if gems.len() != config.rows || gems.iter().any(|row| row.len() != config.cols) {
            return Err(GridError::ShapeMismatch {
                rows: config.rows,
                cols: config.cols,
            });
        }
        let mut cells = Vec::with_capacity(config.rows * config.cols);
        for (row, row_gems) in gems.iter().enumerate() {
            for (col, &gem) in row_gems.iter().enumerate() {
                cells.push(Cell {
                    gem,
                    pos: slot_position(row, col, config.rows, config.cols),
                });
            }
        }
        Ok(Self {
            rows: config.rows,
            cols: config.cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, at: Coord) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    /// Bounds-checked cell access.
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds { row, col });
        }
        Ok(&self.cells[row * self.cols + col])
    }

    /// Raw gem access for the match loops, which validate indices themselves
    /// before reading.
    pub fn gem(&self, row: usize, col: usize) -> GemId {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col].gem
    }

    /// Updates a cell's rendered position without changing its identity.
    pub fn set_position(&mut self, row: usize, col: usize, pos: Vec2) -> Result<(), GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds { row, col });
        }
        self.cells[row * self.cols + col].pos = pos;
        Ok(())
    }

    /// Exchanges the gems of two slots atomically. Render positions stay
    /// anchored to their slots; only the occupants move. Swapping a slot
    /// with itself is a no-op.
    pub fn swap(&mut self, a: Coord, b: Coord) -> Result<(), GridError> {
        for at in [a, b] {
            if !self.in_bounds(at) {
                return Err(GridError::OutOfBounds {
                    row: at.row,
                    col: at.col,
                });
            }
        }
        let ia = a.row * self.cols + a.col;
        let ib = b.row * self.cols + b.col;
        if ia != ib {
            let tmp = self.cells[ia].gem;
            self.cells[ia].gem = self.cells[ib].gem;
            self.cells[ib].gem = tmp;
        }
        Ok(())
    }
}

fn slot_position(row: usize, col: usize, rows: usize, cols: usize) -> Vec2 {
    // Cell centers tile [-1, 1]; for a 10-wide board that is a center every
    // 0.2 units starting at -0.9.
    Vec2::new(
        (2 * col + 1) as f32 / cols as f32 - 1.0,
        (2 * row + 1) as f32 / rows as f32 - 1.0,
    )
}

/// Errors reported by grid accessors. Boundary behavior is load-bearing for
/// match legality, so out-of-range coordinates are reported, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate fell outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Explicit gem data did not match the configured dimensions.
    ShapeMismatch { rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { row, col } => {
                write!(f, "coordinate ({}, {}) is outside the board", row, col)
            }
            GridError::ShapeMismatch { rows, cols } => {
                write!(f, "gem data does not have {}x{} shape", rows, cols)
            }
        }
    }
}

impl std::error::Error for GridError {}
