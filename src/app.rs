//! # Application State
//!
//! This module defines the application-state struct that ties the core engine
//! together for the terminal frontend: the grid, the selection controller,
//! the gated scanner, the camera, toggled key modes, and the pool of active
//! cell effects the renderer animates. One struct passed to every update;
//! no globals.

use match3::{
    BoardConfig, BoardScanner, BombTrigger, Camera, CameraInput, Coord, Grid, RecordingSink,
    SwapController, SwapOutcome,
};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::time::{SystemTime, UNIX_EPOCH};

/// How long a bombed or matched cell keeps its exit animation, in seconds.
pub const EFFECT_SECS: f32 = 1.2;
/// Seconds of camera motion applied per pan/rotate key press. Terminal input
/// has no key-up events, so held keys arrive as repeated presses and each
/// press nudges the camera by this much.
const KEY_NUDGE_SECS: f32 = 0.1;

/// Toggled input modes. Terminals deliver no key-up events, so `q` and `b`
/// toggle instead of acting only while held.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    /// Quake mode: the camera shakes and the random bomb trigger is live.
    pub quake: bool,
    /// Bomb mode: a left click bombs the cell instead of selecting it.
    pub bomb_mode: bool,
}

/// A cell currently playing its exit animation.
#[derive(Debug, Clone, Copy)]
pub struct CellEffect {
    pub at: Coord,
    pub age: f32,
}

/// Running totals shown in the status panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stats {
    pub swaps: u32,
    pub matches: u32,
    pub bombs: u32,
}

/// Everything the frontend needs, in one place.
pub struct App {
    pub config: BoardConfig,
    pub grid: Grid,
    pub controller: SwapController,
    pub scanner: BoardScanner,
    pub camera: Camera,
    pub keys: KeyState,
    pub effects: Vec<CellEffect>,
    pub stats: Stats,
    pub status: String,
    pub should_quit: bool,
    bomb_trigger: BombTrigger,
    events: RecordingSink,
    rng: Xoshiro256PlusPlus,
}

impl App {
    /// Builds the application state. `seed` makes the board and every random
    /// trigger reproducible; without it the clock seeds the generator.
    pub fn new(config: BoardConfig, bomb_chance: f64, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let grid = Grid::new(&config, &mut rng);
        log::info!(
            "new {}x{} board, {} gem kinds, seed {}",
            config.rows,
            config.cols,
            config.gem_kinds,
            seed
        );
        Self {
            grid,
            controller: SwapController::new(),
            scanner: BoardScanner::new(),
            camera: Camera::new(),
            keys: KeyState::default(),
            effects: Vec::new(),
            stats: Stats::default(),
            status: String::from("click a gem, then click where to swap it"),
            should_quit: false,
            bomb_trigger: BombTrigger::new(bomb_chance),
            events: RecordingSink::new(),
            rng,
            config,
        }
    }

    /// One frame of game time: quake shake and its random bomb trigger, the
    /// gated board scan, then effect aging. Input events arrive between
    /// ticks; everything here completes within the tick.
    pub fn tick(&mut self, dt: f32) {
        if self.keys.quake {
            self.camera.quake(&mut self.rng);
            if let Some(at) =
                self.bomb_trigger
                    .fire(&mut self.rng, self.grid.rows(), self.grid.cols())
            {
                log::info!("random bomb at {}", at);
                self.scanner.bomb(at, &mut self.events);
            }
        } else {
            self.camera.reset();
        }

        self.scanner.scan(&self.grid, &self.config, &mut self.events);
        self.drain_events();

        for effect in &mut self.effects {
            effect.age += dt;
        }
        self.effects.retain(|e| e.age < EFFECT_SECS);
    }

    /// A left press: select, or bomb when bomb mode is toggled on.
    pub fn on_press(&mut self, at: Coord) {
        if self.keys.bomb_mode {
            self.scanner.bomb(at, &mut self.events);
        } else {
            self.controller.press(at);
        }
    }

    /// A left release: attempt the swap against the pending selection.
    pub fn on_release(&mut self, at: Coord) {
        if self.keys.bomb_mode {
            return;
        }
        let outcome = self.controller.release(
            &mut self.grid,
            at,
            &self.config,
            &mut self.scanner,
            &mut self.events,
        );
        self.status = match outcome {
            SwapOutcome::Applied { a, b } => format!("swapped {} and {}", a, b),
            SwapOutcome::Rejected { a, b } => format!("no run from swapping {} and {}", a, b),
            SwapOutcome::NoSelection => return,
        };
    }

    /// Applies one key-press worth of camera motion.
    pub fn nudge_camera(&mut self, input: CameraInput) {
        self.camera.step(KEY_NUDGE_SECS, &input);
    }

    /// The exit-animation age of the cell at `at`, if one is playing.
    pub fn effect_age(&self, at: Coord) -> Option<f32> {
        self.effects.iter().find(|e| e.at == at).map(|e| e.age)
    }

    /// Whole-cell offset the camera pan/quake shifts the drawn board by.
    /// Positive x shifts the board right on screen, positive y shifts it
    /// down. The mouse mapping applies the same offset in reverse.
    pub fn camera_cell_offset(&self) -> (i32, i32) {
        let center = self.camera.center();
        let dx = (-center.x * self.grid.cols() as f32 / 2.0).round() as i32;
        let dy = (center.y * self.grid.rows() as f32 / 2.0).round() as i32;
        (dx, dy)
    }

    /// Moves queued core events into renderable state.
    fn drain_events(&mut self) {
        for &(a, b) in &self.events.swaps {
            log::debug!("swap applied {} <-> {}", a, b);
            self.stats.swaps += 1;
        }
        for event in &self.events.matches {
            self.stats.matches += 1;
            for &cell in &event.cells {
                self.effects.push(CellEffect { at: cell, age: 0.0 });
            }
        }
        for &at in &self.events.bombs {
            self.stats.bombs += 1;
            self.effects.push(CellEffect { at, age: 0.0 });
        }
        if !self.events.matches.is_empty() {
            self.status = format!(
                "{} run{} cleared",
                self.events.matches.len(),
                if self.events.matches.len() == 1 { "" } else { "s" }
            );
        }
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new(BoardConfig::default(), 0.0, Some(11));
        // A run-free board, so scans triggered by test bombs stay quiet.
        let gems: Vec<Vec<u8>> = (0..10)
            .map(|r| (0..10).map(|c| ((r * 2 + c * 3) % 5) as u8).collect())
            .collect();
        app.grid = Grid::from_gems(&app.config, &gems).unwrap();
        app
    }

    #[test]
    fn test_seeded_boards_are_reproducible() {
        let a = App::new(BoardConfig::default(), 0.0, Some(11));
        let b = App::new(BoardConfig::default(), 0.0, Some(11));
        assert_eq!(a.grid, b.grid);
    }

    #[test]
    fn test_quake_shakes_and_reset_recenters() {
        let mut app = test_app();
        app.keys.quake = true;
        app.tick(0.1);
        assert_ne!(app.camera.center(), match3::Vec2::default());

        app.keys.quake = false;
        app.tick(0.1);
        assert_eq!(app.camera.center(), match3::Vec2::default());
    }

    #[test]
    fn test_bomb_mode_press_spawns_effect() {
        let mut app = test_app();
        app.keys.bomb_mode = true;
        app.on_press(Coord::new(4, 4));
        app.tick(0.0);
        assert!(app.effect_age(Coord::new(4, 4)).is_some());
        assert_eq!(app.stats.bombs, 1);
    }

    #[test]
    fn test_effects_expire() {
        let mut app = test_app();
        app.keys.bomb_mode = true;
        app.on_press(Coord::new(2, 2));
        app.tick(0.0);
        assert_eq!(app.effects.len(), 1);
        app.tick(EFFECT_SECS + 0.1);
        assert!(app.effects.is_empty());
    }
}
