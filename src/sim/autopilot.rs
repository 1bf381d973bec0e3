//! Demo player
//!
//! Produces a [`FrameInput`] from the current state: starts the selected
//! level, launches the serve, and keeps the paddle under the most dangerous
//! ball. When no ball is falling it goes after useful pickups.

use super::input::FrameInput;
use super::state::{GamePhase, GameState, PowerKind};

/// Paddle center must be this far off target before the autopilot moves
const DEAD_ZONE: f32 = 6.0;

pub fn autopilot(state: &GameState) -> FrameInput {
    match state.phase {
        GamePhase::Menu => FrameInput {
            confirm: true,
            ..Default::default()
        },
        GamePhase::Pause => FrameInput {
            pause: true,
            ..Default::default()
        },
        GamePhase::Clear | GamePhase::Over => FrameInput::default(),
        GamePhase::Play => play(state),
    }
}

fn play(state: &GameState) -> FrameInput {
    if state.any_stuck() {
        return FrameInput {
            launch: true,
            ..Default::default()
        };
    }

    let Some(target) = target_x(state) else {
        return FrameInput::default();
    };
    let offset = target - state.paddle.center_x();
    FrameInput {
        left: offset < -DEAD_ZONE,
        right: offset > DEAD_ZONE,
        ..Default::default()
    }
}

fn target_x(state: &GameState) -> Option<f32> {
    // Lowest ball that is on its way down
    let falling = state
        .balls
        .values()
        .filter(|b| b.vel.y > 0.0)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));
    if let Some(ball) = falling {
        return Some(ball.pos.x);
    }

    // Every ball is rising: safe to grab the lowest good pickup
    let pickup = state
        .power_ups
        .values()
        .filter(|p| p.kind != PowerKind::Death)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));
    if let Some(pickup) = pickup {
        return Some(pickup.pos.x);
    }

    state.balls.values().next().map(|b| b.pos.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::powerup::spawn_power_up;
    use crate::sim::state::Ball;
    use crate::sim::tick::tick;
    use glam::Vec2;

    fn playing() -> GameState {
        let mut state = GameState::new(21);
        state.start_level(1).expect("level 1 loads");
        state
    }

    fn one_ball(state: &mut GameState, pos: Vec2, vel: Vec2) {
        state.balls.clear();
        state.balls.insert(Ball {
            pos,
            vel,
            radius: 8.0,
            stuck: false,
        });
    }

    #[test]
    fn test_menu_confirms() {
        let state = GameState::new(1);
        assert!(autopilot(&state).confirm);
    }

    #[test]
    fn test_launches_stuck_ball() {
        let state = playing();
        let input = autopilot(&state);
        assert!(input.launch);
        assert_eq!(input.steer(), 0.0);
    }

    #[test]
    fn test_steers_toward_falling_ball() {
        let mut state = playing();
        one_ball(&mut state, Vec2::new(150.0, 500.0), Vec2::new(0.0, 1.0));
        assert_eq!(autopilot(&state).steer(), -1.0);
        one_ball(&mut state, Vec2::new(850.0, 500.0), Vec2::new(0.0, 1.0));
        assert_eq!(autopilot(&state).steer(), 1.0);
        one_ball(&mut state, Vec2::new(502.0, 500.0), Vec2::new(0.0, 1.0));
        assert_eq!(autopilot(&state).steer(), 0.0);
    }

    #[test]
    fn test_chases_pickup_but_not_death() {
        let mut state = playing();
        one_ball(&mut state, Vec2::new(500.0, 300.0), Vec2::new(0.0, -1.0));
        let tuning = state.tuning.clone();
        spawn_power_up(&mut state.power_ups, Vec2::new(800.0, 600.0), PowerKind::Death, &tuning);
        assert_eq!(autopilot(&state).steer(), 0.0);
        spawn_power_up(&mut state.power_ups, Vec2::new(150.0, 400.0), PowerKind::Life, &tuning);
        assert_eq!(autopilot(&state).steer(), -1.0);
    }

    #[test]
    fn test_autopilot_session_progresses() {
        let mut state = GameState::new(5);
        for _ in 0..3_000 {
            let input = autopilot(&state);
            tick(&mut state, &input, 1.0 / 60.0);
            state.drain_events();
            if matches!(state.phase, GamePhase::Clear | GamePhase::Over) {
                break;
            }
        }
        assert_ne!(state.phase, GamePhase::Menu);
        assert!(state.scoring.score > 0);
    }
}
