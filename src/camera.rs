//! # Logical Camera
//!
//! A 2D camera over the board's world space: pan, rotation, and the
//! decorative "quake" shake. Purely numeric state for the presentation layer
//! to consume; no matrices or drawing here. Input arrives as an explicit
//! [`CameraInput`] snapshot rather than being polled from global key state.

use crate::Vec2;
use rand::Rng;

/// Degrees of rotation per second while a rotate input is held.
const ROTATE_SPEED: f32 = 20.0;
/// World units of pan per second while a pan input is held.
const PAN_SPEED: f32 = 1.0;
/// Displacement applied by each quake jolt.
const QUAKE_RADIUS: f32 = 0.1;

/// One tick's worth of camera input.
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraInput {
    pub pan_left: bool,
    pub pan_right: bool,
    pub pan_up: bool,
    pub pan_down: bool,
    pub rotate_ccw: bool,
    pub rotate_cw: bool,
}

/// View state: where the camera looks, how much world it spans, and its
/// roll in degrees.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    center: Vec2,
    half_size: Vec2,
    orientation: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            center: Vec2::default(),
            half_size: Vec2::new(1.0, 1.0),
            orientation: 0.0,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn orientation(&self) -> f32 {
        self.orientation
    }

    pub fn half_size(&self) -> Vec2 {
        self.half_size
    }

    /// Widens the horizontal span to match the viewport's aspect ratio.
    pub fn set_aspect_ratio(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.half_size = Vec2::new(width as f32 / height as f32, 1.0);
        }
    }

    /// Advances pan and rotation by `dt` seconds of the given input.
    pub fn step(&mut self, dt: f32, input: &CameraInput) {
        if input.pan_left {
            self.center = self.center + Vec2::new(-PAN_SPEED, 0.0) * dt;
        }
        if input.pan_right {
            self.center = self.center + Vec2::new(PAN_SPEED, 0.0) * dt;
        }
        if input.pan_up {
            self.center = self.center + Vec2::new(0.0, PAN_SPEED) * dt;
        }
        if input.pan_down {
            self.center = self.center + Vec2::new(0.0, -PAN_SPEED) * dt;
        }
        if input.rotate_ccw {
            self.orientation += ROTATE_SPEED * dt;
        }
        if input.rotate_cw {
            self.orientation -= ROTATE_SPEED * dt;
        }
    }

    /// One quake jolt: a fixed-radius displacement in a random direction.
    /// Applied every tick while the quake input is held, the jolts form a
    /// shaking random walk; [`Camera::reset`] recenters when the input is
    /// released.
    pub fn quake<R: Rng>(&mut self, rng: &mut R) {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        self.center = self.center + Vec2::new(angle.sin(), angle.cos()) * QUAKE_RADIUS;
    }

    /// Recenters the view; called every tick that quake mode is off.
    pub fn reset(&mut self) {
        self.center = Vec2::default();
    }
}
