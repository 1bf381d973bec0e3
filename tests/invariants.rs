//! Property tests: session invariants hold under arbitrary input and frame timing

use block_breaker::consts::{MAX_BALLS, MAX_POWER_UPS};
use block_breaker::sim::collision::paddle_bounce;
use block_breaker::sim::{FrameInput, GamePhase, GameState, Rect, SpeedState, play_field, tick};
use proptest::prelude::*;

fn frame_input() -> impl Strategy<Value = FrameInput> {
    (any::<bool>(), any::<bool>(), prop::bool::weighted(0.2), prop::bool::weighted(0.02)).prop_map(
        |(left, right, launch, pause)| FrameInput {
            left,
            right,
            launch,
            pause,
            ..Default::default()
        },
    )
}

fn check_invariants(state: &GameState) -> Result<(), TestCaseError> {
    let field = play_field();
    let paddle = &state.paddle;
    prop_assert!(paddle.x >= field.left() - 1e-3, "paddle left {}", paddle.x);
    prop_assert!(
        paddle.x + paddle.width <= field.right() + 1e-3,
        "paddle right {}",
        paddle.x + paddle.width
    );

    prop_assert!(state.balls.len() <= MAX_BALLS);
    prop_assert!(state.power_ups.len() <= MAX_POWER_UPS);
    prop_assert_eq!(state.breakable, state.count_breakable());

    match state.speed.state {
        SpeedState::Normal => prop_assert_eq!(state.speed.remaining, 0.0),
        _ => prop_assert!(state.speed.remaining > 0.0),
    }

    if state.phase == GamePhase::Play {
        prop_assert!(!state.balls.is_empty());
    }
    for ball in state.balls.values().filter(|b| !b.stuck) {
        prop_assert!((ball.vel.length() - 1.0).abs() < 1e-3, "vel {:?}", ball.vel);
    }
    Ok(())
}

proptest! {
    #[test]
    fn test_invariants_hold(
        seed in any::<u64>(),
        level in 1u32..=3,
        frames in prop::collection::vec((frame_input(), 0.001f32..0.05), 1..400),
    ) {
        let mut state = GameState::new(seed);
        state.start_level(level).expect("built-in level loads");
        check_invariants(&state)?;

        let mut score = state.scoring.score;
        for (input, dt) in &frames {
            tick(&mut state, input, *dt);
            check_invariants(&state)?;
            prop_assert!(state.scoring.score >= score);
            score = state.scoring.score;
            state.drain_events();
        }
    }

    #[test]
    fn test_paddle_bounce_always_upward(offset in -200.0f32..200.0, width in 60.0f32..300.0) {
        let paddle = Rect::new(400.0, 690.0, width, 16.0);
        let dir = paddle_bounce(paddle.center().x + offset, &paddle, 70.0);
        prop_assert!(dir.y < 0.0);
        prop_assert!((dir.length() - 1.0).abs() < 1e-5);
        let from_vertical = dir.x.atan2(-dir.y).to_degrees().abs();
        prop_assert!(from_vertical <= 70.0 + 1e-3);
    }
}
