//! Power-up spawning, falling, collection and effects

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{below_field, circle_rect_overlap};
use super::events::{GameEvent, Sound};
use super::rect::play_field;
use super::slots::{SlotId, Slots};
use super::state::{Ball, GamePhase, GameState, PowerKind, PowerUp};
use crate::consts::MULTIBALL_SPAWN_LIFT;
use crate::tuning::Tuning;

/// Session-wide ball speed state from SLOW/FAST
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpeedState {
    Slow,
    #[default]
    Normal,
    Fast,
}

/// Active speed state and its countdown. Only one is ever in effect.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpeedModifier {
    pub state: SpeedState,
    /// Seconds left; zero whenever the state is normal
    pub remaining: f32,
}

impl SpeedModifier {
    /// Replace whatever is active and restart the countdown
    pub fn set(&mut self, state: SpeedState, secs: f32) {
        if state == SpeedState::Normal || secs <= 0.0 {
            self.reset();
        } else {
            self.state = state;
            self.remaining = secs;
        }
    }

    /// Count down; returns true on the frame the effect expires
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining <= 0.0 {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.reset();
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.state = SpeedState::Normal;
        self.remaining = 0.0;
    }

    pub fn multiplier(&self, tuning: &Tuning) -> f32 {
        match self.state {
            SpeedState::Slow => tuning.slow_multiplier,
            SpeedState::Normal => 1.0,
            SpeedState::Fast => tuning.fast_multiplier,
        }
    }
}

/// Drop a pickup at `pos`; silently skipped when every slot is taken
pub fn spawn_power_up(
    power_ups: &mut Slots<PowerUp>,
    pos: Vec2,
    kind: PowerKind,
    tuning: &Tuning,
) -> Option<SlotId> {
    let id = power_ups.insert(PowerUp::new(pos, kind, tuning.power_up_fall_speed));
    if id.is_none() {
        log::debug!("Pickup {:?} dropped: no free slot", kind);
    }
    id
}

/// Move pickups, discard the ones that fell out, and apply the ones the
/// paddle caught. `frozen` holds pickups in place while a ball is stuck.
pub fn update_power_ups(state: &mut GameState, dt: f32, frozen: bool) {
    let field = play_field();
    let paddle = state.paddle.rect();

    let mut missed: Vec<SlotId> = Vec::new();
    let mut caught: Vec<SlotId> = Vec::new();
    for (id, pickup) in state.power_ups.iter_mut() {
        if !frozen {
            pickup.pos += pickup.vel * dt;
        }
        if below_field(pickup.pos, pickup.radius, &field) {
            missed.push(id);
        } else if circle_rect_overlap(pickup.pos, pickup.radius, &paddle) {
            caught.push(id);
        }
    }

    for id in missed {
        state.power_ups.remove(id);
    }

    // Every caught pickup leaves the field, even if an earlier one ends the run
    let kinds: Vec<PowerKind> = caught
        .into_iter()
        .filter_map(|id| state.power_ups.remove(id))
        .map(|pickup| pickup.kind)
        .collect();
    for kind in kinds {
        state.emit(GameEvent::Sound(Sound::Power));
        apply_power(state, kind);
        if state.phase != GamePhase::Play {
            break;
        }
    }
}

/// Apply a collected pickup's effect
pub fn apply_power(state: &mut GameState, kind: PowerKind) {
    log::debug!("Power-up collected: {:?}", kind);
    match kind {
        PowerKind::Extend => {
            state.paddle.target_width = state.tuning.extended_width();
        }
        PowerKind::MultiBall => {
            let spawned = spawn_multiball(state);
            log::debug!("MULTIBALL added {} balls", spawned);
        }
        PowerKind::Slow => {
            let secs = state.tuning.speed_effect_secs;
            state.speed.set(SpeedState::Slow, secs);
        }
        PowerKind::Fast => {
            let secs = state.tuning.speed_effect_secs;
            state.speed.set(SpeedState::Fast, secs);
        }
        PowerKind::Life => {
            state.lives += 1;
        }
        PowerKind::Death => {
            state.lose_life();
        }
    }
}

/// Fill every free ball slot with a freshly launched ball above the paddle.
/// Returns how many balls were added.
fn spawn_multiball(state: &mut GameState) -> usize {
    let origin = Vec2::new(
        state.paddle.center_x(),
        state.paddle.y - MULTIBALL_SPAWN_LIFT,
    );
    let mut spawned = 0;
    while state.balls.free_count() > 0 {
        let angle = state.random_launch_angle();
        if state.balls.insert(Ball::launched_from(origin, angle)).is_none() {
            break;
        }
        spawned += 1;
    }
    spawned
}
