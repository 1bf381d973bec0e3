//! Per-frame simulation tick
//!
//! Game loop that advances the session by one frame and sequences the
//! Menu / Play / Pause / Clear / Over phases.

use super::events::{GameEvent, Sound};
use super::input::{FrameInput, level_at};
use super::physics::update_balls;
use super::powerup::update_power_ups;
use super::state::{GamePhase, GameState};
use crate::clamp_level;
use crate::consts::LEVEL_COUNT;

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &FrameInput, dt: f32) {
    state.frame += 1;

    match state.phase {
        GamePhase::Menu => tick_menu(state, input),
        GamePhase::Play => tick_play(state, input, dt),
        GamePhase::Pause => {
            if input.pause {
                state.set_phase(GamePhase::Play);
            }
        }
        GamePhase::Clear | GamePhase::Over => {
            if input.confirm {
                state.set_phase(GamePhase::Menu);
            }
        }
    }
}

fn tick_menu(state: &mut GameState, input: &FrameInput) {
    if let Some(level) = input.select_level {
        state.selected_level = clamp_level(level);
    }
    if input.menu_up {
        state.selected_level = if state.selected_level <= 1 {
            LEVEL_COUNT
        } else {
            state.selected_level - 1
        };
    }
    if input.menu_down {
        state.selected_level = if state.selected_level >= LEVEL_COUNT {
            1
        } else {
            state.selected_level + 1
        };
    }

    // Clicking a button picks the level and starts right away
    if let Some(level) = input.click.and_then(level_at) {
        state.selected_level = level;
        start_selected(state);
        return;
    }

    if input.confirm {
        start_selected(state);
    }
}

fn start_selected(state: &mut GameState) {
    let level = state.selected_level;
    if let Err(err) = state.start_level(level) {
        log::error!("Cannot start level {}: {}", level, err);
    }
}

fn tick_play(state: &mut GameState, input: &FrameInput, dt: f32) {
    if input.pause {
        state.set_phase(GamePhase::Pause);
        return;
    }

    // Pickups stay put while the player is still aiming the serve
    let frozen = state.any_stuck();

    if !frozen {
        let speed = state.tuning.paddle_speed;
        state.paddle.steer(input.steer(), speed, dt);
    }
    let rate = state.tuning.paddle_ease_rate;
    state.paddle.ease_width(rate, dt);

    if input.launch {
        let launched = state.launch_stuck_balls();
        if launched > 0 {
            log::debug!("Launched {} ball(s)", launched);
        }
    }

    update_balls(state, dt);

    if state.balls.is_empty() {
        state.scoring.break_combo();
        if !state.lose_life() {
            log::info!("Ball lost, {} lives left", state.lives);
            state.reset_serve();
        }
    }

    if state.phase == GamePhase::Play {
        update_power_ups(state, dt, frozen);
    }
    if state.phase == GamePhase::Play && state.speed.tick(dt) {
        log::debug!("Speed effect expired");
    }

    // An emptied board clears the level even if the run ended this frame
    if state.breakable == 0 {
        state.emit(GameEvent::Sound(Sound::Clear));
        state.set_phase(GamePhase::Clear);
        log::info!("Level {} cleared with {} points", state.level, state.scoring.score);
    }
}
