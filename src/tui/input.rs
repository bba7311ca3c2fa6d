//! # Input Handling Module
//!
//! Translates key presses into camera nudges and mode toggles. Terminal
//! input has no key-up events, so held-key camera movement becomes per-press
//! nudges, and the quake and bomb keys become toggles.

use crate::app::App;
use crossterm::event::KeyCode;
use match3::CameraInput;

/// Handles a single key press.
///
/// - `i`/`j`/`k`/`l` pan the camera up/left/down/right
/// - `a`/`d` rotate counter-/clockwise
/// - `q` toggles quake mode (shake plus the random bomb trigger)
/// - `b` toggles bomb mode (left click bombs instead of selecting)
/// - `Esc` or `Q` quits
pub fn handle_key_press(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('i') => app.nudge_camera(CameraInput {
            pan_up: true,
            ..CameraInput::default()
        }),
        KeyCode::Char('k') => app.nudge_camera(CameraInput {
            pan_down: true,
            ..CameraInput::default()
        }),
        KeyCode::Char('j') => app.nudge_camera(CameraInput {
            pan_left: true,
            ..CameraInput::default()
        }),
        KeyCode::Char('l') => app.nudge_camera(CameraInput {
            pan_right: true,
            ..CameraInput::default()
        }),
        KeyCode::Char('a') => app.nudge_camera(CameraInput {
            rotate_ccw: true,
            ..CameraInput::default()
        }),
        KeyCode::Char('d') => app.nudge_camera(CameraInput {
            rotate_cw: true,
            ..CameraInput::default()
        }),
        KeyCode::Char('q') => {
            app.keys.quake = !app.keys.quake;
            app.status = if app.keys.quake {
                String::from("quake on, hold tight")
            } else {
                String::from("quake off")
            };
        }
        KeyCode::Char('b') => {
            app.keys.bomb_mode = !app.keys.bomb_mode;
            app.status = if app.keys.bomb_mode {
                String::from("bomb mode: click a cell to bomb it")
            } else {
                String::from("bomb mode off")
            };
        }
        _ => {}
    }
}
