//! Read-only view of a session for the presentation layer

use serde::{Deserialize, Serialize};

use super::powerup::SpeedState;
use super::rect::Rect;
use super::state::{Ball, Brick, GamePhase, GameState, PowerUp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub frame: u64,
    pub phase: GamePhase,
    pub level: u32,
    pub selected_level: u32,
    pub score: u64,
    pub lives: u32,
    pub combo: u32,
    pub speed: SpeedState,
    /// Seconds left on SLOW/FAST
    pub speed_remaining: f32,
    pub paddle: Rect,
    pub balls: Vec<Ball>,
    /// Alive bricks only
    pub bricks: Vec<Brick>,
    pub power_ups: Vec<PowerUp>,
    pub breakable: u32,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            frame: state.frame,
            phase: state.phase,
            level: state.level,
            selected_level: state.selected_level,
            score: state.scoring.score,
            lives: state.lives,
            combo: state.scoring.combo,
            speed: state.speed.state,
            speed_remaining: state.speed.remaining,
            paddle: state.paddle.rect(),
            balls: state.balls.values().cloned().collect(),
            bricks: state.bricks.iter().filter(|b| b.alive).cloned().collect(),
            power_ups: state.power_ups.values().cloned().collect(),
            breakable: state.breakable,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
