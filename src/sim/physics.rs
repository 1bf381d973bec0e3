//! Ball motion and collision resolution
//!
//! Per frame, each free ball is integrated, bounced off the walls, the paddle
//! and at most one brick. Stuck balls just ride the paddle.

use glam::Vec2;

use super::collision::{
    bounce_axis, bounce_off_walls, below_field, circle_rect_overlap, paddle_bounce, reflect_axis,
};
use super::events::{GameEvent, Sound};
use super::powerup::spawn_power_up;
use super::rect::play_field;
use super::score::Scoring;
use super::slots::SlotId;
use super::state::{Ball, Brick, GameState};
use crate::tuning::Tuning;

/// What a single brick contact did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrickOutcome {
    /// Breakable brick lost its last hit-point
    Destroyed,
    /// Breakable brick survived the hit
    Damaged,
    /// Solid brick
    Deflected,
}

/// Index of the first alive brick the ball overlaps, in scan order
pub fn first_overlapping_brick(ball: &Ball, bricks: &[Brick]) -> Option<usize> {
    bricks
        .iter()
        .position(|b| b.alive && circle_rect_overlap(ball.pos, ball.radius, &b.rect))
}

/// Apply one contact to a brick and award points
pub fn strike_brick(brick: &mut Brick, scoring: &mut Scoring, tuning: &Tuning) -> BrickOutcome {
    if brick.is_solid() {
        scoring.award_solid(tuning);
        return BrickOutcome::Deflected;
    }
    brick.hp = brick.hp.saturating_sub(1);
    if brick.hp == 0 {
        brick.alive = false;
        scoring.award_kill(tuning);
        BrickOutcome::Destroyed
    } else {
        scoring.award_damage(tuning);
        BrickOutcome::Damaged
    }
}

/// Advance every ball by one frame. Balls that leave the bottom of the field
/// are removed; the caller decides what losing the last one means.
pub fn update_balls(state: &mut GameState, dt: f32) {
    let step = state.ball_speed() * dt;
    let field = play_field();
    let paddle_rect = state.paddle.rect();

    let mut lost: Vec<SlotId> = Vec::new();
    let mut events: Vec<GameEvent> = Vec::new();

    let GameState {
        tuning,
        paddle,
        balls,
        bricks,
        power_ups,
        scoring,
        breakable,
        ..
    } = &mut *state;

    for (id, ball) in balls.iter_mut() {
        if ball.stuck {
            ball.follow(paddle);
            continue;
        }

        ball.pos += ball.vel * step;

        let wall_hits = bounce_off_walls(&mut ball.pos, &mut ball.vel, ball.radius, &field);
        for _ in 0..wall_hits {
            events.push(GameEvent::Sound(Sound::Hit));
        }

        if below_field(ball.pos, ball.radius, &field) {
            lost.push(id);
            continue;
        }

        // Paddle only catches balls on their way down
        if ball.vel.y > 0.0 && circle_rect_overlap(ball.pos, ball.radius, &paddle_rect) {
            ball.vel = paddle_bounce(ball.pos.x, &paddle_rect, tuning.paddle_bounce_max_deg);
            scoring.break_combo();
            events.push(GameEvent::Sound(Sound::Hit));
        }

        // One brick per ball per frame, first match in scan order
        let Some(idx) = first_overlapping_brick(ball, bricks) else {
            continue;
        };
        let brick = &mut bricks[idx];
        ball.vel = reflect_axis(ball.vel, bounce_axis(ball.pos, &brick.rect));

        match strike_brick(brick, scoring, tuning) {
            BrickOutcome::Destroyed => {
                *breakable = breakable.saturating_sub(1);
                let center: Vec2 = brick.rect.center();
                events.push(GameEvent::Burst {
                    pos: center,
                    kind: brick.kind,
                });
                events.push(GameEvent::Shake {
                    duration: tuning.shake_secs,
                    magnitude: tuning.shake_magnitude,
                });
                events.push(GameEvent::Sound(Sound::Break));
                if let Some(kind) = brick.power() {
                    spawn_power_up(power_ups, center, kind, tuning);
                }
            }
            BrickOutcome::Damaged | BrickOutcome::Deflected => {
                events.push(GameEvent::Sound(Sound::Hit));
            }
        }

        // Step clear of the brick along the new direction
        ball.pos += ball.vel * step;
    }

    for id in lost {
        balls.remove(id);
    }
    for event in events {
        state.emit(event);
    }
}
