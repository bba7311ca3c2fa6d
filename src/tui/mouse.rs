//! # Mouse Module
//!
//! Maps terminal mouse events onto the grid. A left press selects a cell, a
//! left release attempts the swap against the pending selection; events that
//! land outside the board are dropped.

use crate::app::App;
use crate::tui::widgets;
use crossterm::event::{MouseButton, MouseEventKind};
use match3::Coord;
use ratatui::layout::Rect;

/// Routes a mouse event into the press/release swap protocol.
pub fn handle_mouse_event(app: &mut App, kind: MouseEventKind, col: u16, row: u16, terminal_size: Rect) {
    match kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(at) = screen_to_grid(app, col, row, terminal_size) {
                app.on_press(at);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(at) = screen_to_grid(app, col, row, terminal_size) {
                app.on_release(at);
            }
        }
        _ => {}
    }
}

/// Inverse of the board rendering: terminal cell to grid coordinate, undoing
/// the camera's whole-cell pan offset. Returns `None` outside the board.
fn screen_to_grid(app: &App, col: u16, row: u16, terminal_size: Rect) -> Option<Coord> {
    let board = widgets::board_area(app, terminal_size);
    // Inner area, inside the block borders.
    let x0 = i32::from(board.x) + 1;
    let y0 = i32::from(board.y) + 1;
    let (dx, dy) = app.camera_cell_offset();

    // Each cell is two terminal columns wide.
    let px = i32::from(col) - x0 - 2 * dx;
    let py = i32::from(row) - y0 - dy;
    if px < 0 || py < 0 {
        return None;
    }
    let grid_col = (px / 2) as usize;
    let row_from_top = py as usize;
    if grid_col >= app.grid.cols() || row_from_top >= app.grid.rows() {
        return None;
    }
    // Row 0 is the bottom of the world, so it renders last.
    Some(Coord::new(app.grid.rows() - 1 - row_from_top, grid_col))
}
