//! # Terminal User Interface Module
//!
//! This module provides the terminal frontend for the puzzle core, built
//! using the Ratatui library. It owns the frame loop that drives the game
//! tick, routes keyboard and mouse events into the application state, and
//! renders the board and its effect animations.
//!
//! ## Key Components
//! - **Terminal Management**: Initialization and cleanup of raw terminal mode
//! - **Event Loop**: Tick, render, poll at roughly 10 FPS
//! - **Input Processing**: Keyboard nudges/toggles and the press/release
//!   mouse protocol that performs swaps
//! - **Widget Rendering**: Board glyphs, selection highlight, bomb spin-out

use crate::app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::{
    io,
    time::{Duration, Instant},
};

pub mod input;
pub mod mouse;
pub mod widgets;

/// Main entry point for the terminal user interface
///
/// Initializes the terminal, runs the frame loop, and handles cleanup. Each
/// iteration advances the game by the measured frame time, renders, then
/// polls for input; press and release mouse events are delivered to the
/// swap controller between ticks.
///
/// # Arguments
/// * `app` - Mutable reference to the application state
///
/// # Returns
/// IO result indicating success or failure of terminal operations
pub fn run(app: &mut App) -> io::Result<()> {
    let mut terminal = init_terminal()?;
    let mut last_tick = Instant::now();

    loop {
        if app.should_quit {
            break;
        }

        let now = Instant::now();
        app.tick(now.duration_since(last_tick).as_secs_f32());
        last_tick = now;

        terminal.draw(|f| widgets::render(app, f))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        input::handle_key_press(app, key.code);
                    }
                }
                Event::Mouse(m) => {
                    let terminal_size = terminal.size()?;
                    let terminal_rect =
                        Rect::new(0, 0, terminal_size.width, terminal_size.height);
                    mouse::handle_mouse_event(app, m.kind, m.column, m.row, terminal_rect);
                }
                _ => {}
            }
        }
    }

    restore_terminal(&mut terminal)
}

/// Initializes the terminal for raw mode operation
///
/// Enables raw mode, switches to the alternate screen, enables mouse capture
/// (required for the press/release swap protocol), and hides the cursor.
fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute!(
        handle,
        EnterAlternateScreen,
        EnableMouseCapture,
        crossterm::cursor::Hide
    )?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Restores the terminal to normal operation mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    terminal.show_cursor()?;
    disable_raw_mode()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute!(
        handle,
        LeaveAlternateScreen,
        DisableMouseCapture,
        crossterm::cursor::Show
    )?;
    Ok(())
}
