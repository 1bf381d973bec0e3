//! Events emitted by the simulation for the presentation layer
//!
//! Events are queued on the game state and drained once per frame. Nothing in
//! the simulation waits on them or reads them back.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::BrickKind;

/// Sound effect tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    /// Wall, paddle, solid brick, or a brick that survives the hit
    Hit,
    /// Brick destroyed
    Break,
    /// Power-up collected
    Power,
    /// Last life lost
    Lose,
    /// Level cleared
    Clear,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Sound(Sound),
    /// Particle burst at a destroyed brick (kind selects the color)
    Burst { pos: Vec2, kind: BrickKind },
    /// Camera shake
    Shake { duration: f32, magnitude: f32 },
}
