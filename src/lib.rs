//! Block Breaker - a single-screen ball-and-paddle brick breaker
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (physics, power-ups, scoring, game phases)
//! - `tuning`: Data-driven game balance

pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep for the optional fixed-step driver (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the fixed-step driver will accept
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Play field
    pub const PLAY_X: f32 = 70.0;
    pub const PLAY_Y: f32 = 90.0;
    pub const PLAY_W: f32 = 860.0;
    pub const PLAY_H: f32 = 640.0;

    /// Brick grid
    pub const BRICK_ROWS: usize = 8;
    pub const BRICK_COLS: usize = 12;
    pub const BRICK_GAP: f32 = 6.0;
    pub const BRICK_H: f32 = 24.0;
    /// Distance from the field top to the first brick row
    pub const BRICK_TOP_MARGIN: f32 = 40.0;

    /// Number of selectable levels (anything higher uses the last table)
    pub const LEVEL_COUNT: u32 = 3;

    /// Entity caps
    pub const MAX_BALLS: usize = 4;
    pub const MAX_POWER_UPS: usize = 6;

    /// Paddle defaults
    pub const PADDLE_H: f32 = 16.0;
    /// Distance from the field bottom up to the paddle's top edge
    pub const PADDLE_BOTTOM_MARGIN: f32 = 40.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Gap between a stuck ball and the paddle top
    pub const STUCK_BALL_GAP: f32 = 2.0;
    /// Height above the paddle top where MULTIBALL balls appear
    pub const MULTIBALL_SPAWN_LIFT: f32 = 20.0;
    /// Velocity magnitude below which a direction is considered degenerate
    pub const MIN_DIRECTION_LEN: f32 = 0.0001;

    /// Power-up pickup radius
    pub const POWER_UP_RADIUS: f32 = 12.0;
}

/// Normalize a direction, falling back to straight up when it has collapsed
#[inline]
pub fn normalize_or_up(v: Vec2) -> Vec2 {
    let len = v.length();
    if len <= consts::MIN_DIRECTION_LEN {
        Vec2::new(0.0, -1.0)
    } else {
        v / len
    }
}

/// Direction for a launch angle in degrees measured from the horizontal.
///
/// Screen space has y growing downward, so angles in (0°, 180°) point up.
#[inline]
pub fn launch_direction(angle_deg: f32) -> Vec2 {
    let angle = angle_deg.to_radians();
    Vec2::new(angle.cos(), -angle.sin())
}

/// Clamp a requested level index to the selectable range
#[inline]
pub fn clamp_level(level: u32) -> u32 {
    level.clamp(1, consts::LEVEL_COUNT)
}
