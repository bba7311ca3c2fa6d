//! # UI Widgets Module
//!
//! Draws the board, the status panel, and the control help. Gem kinds render
//! as colored glyphs; matched or bombed cells play a short spin-out before
//! the effect expires.

use crate::app::{App, EFFECT_SECS};
use match3::Coord;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// One glyph per gem kind: triangle, quad, star, heart, and two sparkles.
/// Kinds beyond six wrap around.
const GEM_GLYPHS: [char; 6] = ['▲', '■', '★', '♥', '●', '✦'];
const GEM_COLORS: [Color; 6] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
];
/// Exit-animation frames for matched and bombed cells.
const SPIN_GLYPHS: [char; 4] = ['|', '/', '-', '\\'];

pub fn render(app: &App, frame: &mut Frame) {
    let board = board_area(app, frame.size());
    draw_board(frame, app, board);

    let below = Rect::new(
        0,
        board.bottom(),
        frame.size().width,
        frame.size().height.saturating_sub(board.bottom()),
    );
    if below.height == 0 {
        return;
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(below);
    draw_status(frame, app, chunks[0]);
    draw_help(frame, chunks[1]);
}

/// The rectangle the board block occupies. The mouse mapping recomputes this
/// to invert clicks, so it must stay in lockstep with [`render`].
pub fn board_area(app: &App, size: Rect) -> Rect {
    let width = (app.grid.cols() as u16 * 2 + 2).min(size.width);
    let height = (app.grid.rows() as u16 + 2).min(size.height);
    Rect::new(0, 0, width, height)
}

fn draw_board(f: &mut Frame, app: &App, area: Rect) {
    let rows = app.grid.rows();
    let cols = app.grid.cols();
    let (dx, dy) = app.camera_cell_offset();
    let selection = app.controller.selection();

    let mut lines: Vec<Line> = Vec::with_capacity(rows);
    for display_row in 0..rows {
        // The camera offset shifts the whole board; rows pushed outside the
        // block are simply blank.
        let shifted = display_row as i32 - dy;
        if shifted < 0 || shifted >= rows as i32 {
            lines.push(Line::from(""));
            continue;
        }
        let grid_row = rows - 1 - shifted as usize;

        let mut spans: Vec<Span> = Vec::with_capacity(cols + 1);
        if dx > 0 {
            spans.push(Span::raw(" ".repeat(2 * dx as usize)));
        }
        let first_col = if dx < 0 { (-dx) as usize } else { 0 };
        for col in first_col..cols {
            let at = Coord::new(grid_row, col);
            spans.push(cell_span(app, at, selection));
        }
        lines.push(Line::from(spans));
    }

    let title = if app.keys.bomb_mode {
        "GemSwap [bomb mode]"
    } else {
        "GemSwap"
    };
    let board = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(board, area);
}

/// Styles one cell: its gem glyph, the selection highlight, or the spin-out
/// animation when an effect is playing on it.
fn cell_span(app: &App, at: Coord, selection: Option<Coord>) -> Span<'static> {
    let gem = app.grid.gem(at.row, at.col) as usize;
    let mut glyph = GEM_GLYPHS[gem % GEM_GLYPHS.len()];
    let mut style = Style::default().fg(GEM_COLORS[gem % GEM_COLORS.len()]);

    if let Some(age) = app.effect_age(at) {
        glyph = SPIN_GLYPHS[(age * 8.0) as usize % SPIN_GLYPHS.len()];
        style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
        if age > EFFECT_SECS / 2.0 {
            style = style.add_modifier(Modifier::DIM);
        }
    } else if selection == Some(at) {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }

    Span::styled(format!("{} ", glyph), style)
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.stats;
    let lines = vec![
        Line::from(app.status.clone()),
        Line::from(format!(
            "swaps {} | runs {} | bombs {} | quake {}",
            stats.swaps,
            stats.matches,
            stats.bombs,
            if app.keys.quake { "ON" } else { "off" },
        )),
    ];
    let status =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let help = Paragraph::new(
        "press selects, release swaps | i/j/k/l pan, a/d rotate | q quake | b bomb mode | Esc quit",
    )
    .block(Block::default().borders(Borders::ALL).title("Controls"));
    f.render_widget(help, area);
}
