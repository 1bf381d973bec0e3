//! Game state and core simulation types
//!
//! Everything a session needs between frames lives in [`GameState`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::events::{GameEvent, Sound};
use super::level::{LevelError, load_level};
use super::powerup::SpeedModifier;
use super::rect::{Rect, play_field};
use super::score::Scoring;
use super::slots::{SlotId, Slots};
use super::snapshot::Snapshot;
use crate::consts::*;
use crate::tuning::Tuning;
use crate::{clamp_level, launch_direction};

/// Top-level phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Level selection
    Menu,
    /// Active gameplay
    Play,
    /// Play suspended
    Pause,
    /// Every breakable brick destroyed
    Clear,
    /// Out of lives
    Over,
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerKind {
    Extend,
    MultiBall,
    Slow,
    Life,
    Fast,
    Death,
}

/// Brick types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickKind {
    #[default]
    Plain,
    /// Drops a pickup of the bound type when destroyed
    Power(PowerKind),
    /// Indestructible, doesn't count for level clear
    Solid,
}

/// A brick entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub kind: BrickKind,
    pub hp: u8,
    pub max_hp: u8,
    pub alive: bool,
}

impl Brick {
    pub fn new(rect: Rect, kind: BrickKind) -> Self {
        Self {
            rect,
            kind,
            hp: 1,
            max_hp: 1,
            alive: true,
        }
    }

    pub fn is_solid(&self) -> bool {
        self.kind == BrickKind::Solid
    }

    /// Power bound to this brick, if it is a power-brick
    pub fn power(&self) -> Option<PowerKind> {
        match self.kind {
            BrickKind::Power(kind) => Some(kind),
            _ => None,
        }
    }

    /// Returns true if this brick must be destroyed to clear the level
    pub fn counts_for_clear(&self) -> bool {
        self.alive && !self.is_solid()
    }
}

/// A ball entity. Occupying a ball slot means the ball is in play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Unit direction; speed is applied per frame
    pub vel: Vec2,
    pub radius: f32,
    /// Riding the paddle, waiting for launch
    pub stuck: bool,
}

impl Ball {
    /// A ball resting on the paddle
    pub fn stuck_on(paddle: &Paddle) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::new(0.0, -1.0),
            radius: BALL_RADIUS,
            stuck: true,
        };
        ball.follow(paddle);
        ball
    }

    /// A free ball at `pos` heading along the launch angle
    pub fn launched_from(pos: Vec2, angle_deg: f32) -> Self {
        Self {
            pos,
            vel: launch_direction(angle_deg),
            radius: BALL_RADIUS,
            stuck: false,
        }
    }

    /// Keep a stuck ball centered on top of the paddle
    pub fn follow(&mut self, paddle: &Paddle) {
        self.pos = Vec2::new(paddle.center_x(), paddle.y - self.radius - STUCK_BALL_GAP);
    }

    pub fn launch(&mut self, angle_deg: f32) {
        self.vel = launch_direction(angle_deg);
        self.stuck = false;
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed)
    pub y: f32,
    pub width: f32,
    /// Width the paddle is easing toward
    pub target_width: f32,
    pub height: f32,
}

impl Paddle {
    /// A centered paddle of the given base width
    pub fn new(base_width: f32) -> Self {
        let field = play_field();
        Self {
            x: field.center().x - base_width * 0.5,
            y: field.bottom() - PADDLE_BOTTOM_MARGIN,
            width: base_width,
            target_width: base_width,
            height: PADDLE_H,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width * 0.5
    }

    /// Move by `intent` (-1, 0, +1) and clamp inside the field
    pub fn steer(&mut self, intent: f32, speed: f32, dt: f32) {
        self.x += intent * speed * dt;
        self.clamp_to_field();
    }

    /// Exponentially approach the target width, then re-clamp
    pub fn ease_width(&mut self, rate: f32, dt: f32) {
        let t = (rate * dt).min(1.0);
        self.width += (self.target_width - self.width) * t;
        self.clamp_to_field();
    }

    pub fn clamp_to_field(&mut self) {
        let field = play_field();
        let max_x = (field.right() - self.width).max(field.left());
        self.x = self.x.clamp(field.left(), max_x);
    }

    /// Back to base width, centered
    pub fn reset(&mut self, base_width: f32) {
        *self = Self::new(base_width);
    }
}

/// A falling pickup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub kind: PowerKind,
}

impl PowerUp {
    pub fn new(pos: Vec2, kind: PowerKind, fall_speed: f32) -> Self {
        Self {
            pos,
            vel: Vec2::new(0.0, fall_speed),
            radius: POWER_UP_RADIUS,
            kind,
        }
    }
}

/// Complete session state
///
/// Sounds, bursts and shakes pile up in an internal queue until
/// [`GameState::drain_events`] is called. Callers drain once per frame; the
/// queue is never trimmed on its own.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance parameters for this session
    pub tuning: Tuning,
    /// Session RNG (launch angles)
    rng: Pcg32,
    pub phase: GamePhase,
    /// Level being played (1-based)
    pub level: u32,
    /// Level highlighted in the menu
    pub selected_level: u32,
    /// Alive non-solid bricks remaining
    pub breakable: u32,
    pub scoring: Scoring,
    pub lives: u32,
    /// SLOW/FAST state and its countdown
    pub speed: SpeedModifier,
    pub paddle: Paddle,
    pub balls: Slots<Ball>,
    /// Bricks in row-major scan order
    pub bricks: Vec<Brick>,
    pub power_ups: Slots<PowerUp>,
    /// Frames simulated so far
    pub frame: u64,
    /// Events queued for the presentation layer
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session in the menu with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let paddle = Paddle::new(tuning.paddle_base_width);
        let mut state = Self {
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            level: 1,
            selected_level: 1,
            breakable: 0,
            scoring: Scoring::default(),
            lives: tuning.starting_lives,
            speed: SpeedModifier::default(),
            paddle,
            balls: Slots::with_capacity(MAX_BALLS),
            bricks: Vec::new(),
            power_ups: Slots::with_capacity(MAX_POWER_UPS),
            frame: 0,
            events: Vec::new(),
            tuning,
        };

        // The menu is drawn over the first level's board
        if let Ok(level) = load_level(1) {
            state.bricks = level.bricks;
            state.breakable = level.breakable;
        }
        state.spawn_stuck_ball();

        state
    }

    /// Reset the session and begin `level` in the Play phase
    pub fn start_level(&mut self, level: u32) -> Result<(), LevelError> {
        let level = clamp_level(level);
        let layout = load_level(level)?;

        self.level = level;
        self.selected_level = level;
        self.bricks = layout.bricks;
        self.breakable = layout.breakable;
        self.scoring.reset();
        self.lives = self.tuning.starting_lives;
        self.power_ups.clear();
        self.reset_serve();
        self.set_phase(GamePhase::Play);

        log::info!("Level {} started: {} breakable bricks", level, self.breakable);
        Ok(())
    }

    /// Fresh serve after a start or a lost life: one stuck ball, base paddle,
    /// normal speed
    pub fn reset_serve(&mut self) {
        self.balls.clear();
        self.paddle.reset(self.tuning.paddle_base_width);
        self.speed.reset();
        self.spawn_stuck_ball();
    }

    pub fn spawn_stuck_ball(&mut self) -> Option<SlotId> {
        let ball = Ball::stuck_on(&self.paddle);
        self.balls.insert(ball)
    }

    pub fn any_stuck(&self) -> bool {
        self.balls.values().any(|b| b.stuck)
    }

    /// Launch every stuck ball at its own random angle
    pub fn launch_stuck_balls(&mut self) -> usize {
        let (min, max) = (self.tuning.launch_min_deg, self.tuning.launch_max_deg);
        let mut launched = 0;
        for ball in self.balls.values_mut().filter(|b| b.stuck) {
            ball.launch(self.rng.random_range(min..=max));
            launched += 1;
        }
        launched
    }

    /// Draw a launch angle (degrees from horizontal)
    pub fn random_launch_angle(&mut self) -> f32 {
        let (min, max) = (self.tuning.launch_min_deg, self.tuning.launch_max_deg);
        self.rng.random_range(min..=max)
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Lose one life and end the run when none remain. Returns true on game over.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.emit(GameEvent::Sound(Sound::Lose));
            self.set_phase(GamePhase::Over);
            true
        } else {
            false
        }
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all queued events. Call once per frame.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Recount alive breakable bricks from the grid
    pub fn count_breakable(&self) -> u32 {
        self.bricks.iter().filter(|b| b.counts_for_clear()).count() as u32
    }

    /// Current ball speed in px/s
    pub fn ball_speed(&self) -> f32 {
        self.tuning.ball_base_speed
            * self.tuning.level_speed(self.level)
            * self.speed.multiplier(&self.tuning)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_in_menu() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.lives, 3);
        assert_eq!(state.balls.len(), 1);
        assert!(state.any_stuck());
        assert_eq!(state.breakable, state.count_breakable());
    }

    #[test]
    fn test_stuck_ball_rests_on_paddle() {
        let paddle = Paddle::new(120.0);
        let ball = Ball::stuck_on(&paddle);
        assert_eq!(ball.pos.x, paddle.center_x());
        assert_eq!(ball.pos.y, paddle.y - BALL_RADIUS - STUCK_BALL_GAP);
        assert!(ball.stuck);
    }

    #[test]
    fn test_paddle_steer_clamps() {
        let field = play_field();
        let mut paddle = Paddle::new(120.0);
        paddle.steer(-1.0, 520.0, 10.0);
        assert_eq!(paddle.x, field.left());
        paddle.steer(1.0, 520.0, 10.0);
        assert_eq!(paddle.x, field.right() - paddle.width);
    }

    #[test]
    fn test_paddle_growth_reclamps_at_wall() {
        let field = play_field();
        let mut paddle = Paddle::new(120.0);
        paddle.x = field.right() - paddle.width;
        paddle.target_width = 192.0;
        for _ in 0..120 {
            paddle.ease_width(8.0, 1.0 / 60.0);
            assert!(paddle.x + paddle.width <= field.right() + 1e-3);
            assert!(paddle.width <= 192.0 + 1e-4);
        }
        assert!((paddle.width - 192.0).abs() < 0.5);
    }

    #[test]
    fn test_start_level_resets_session() {
        let mut state = GameState::new(7);
        state.scoring.score = 900;
        state.lives = 1;
        state.paddle.target_width = 192.0;
        state.start_level(2).expect("level 2 loads");
        assert_eq!(state.phase, GamePhase::Play);
        assert_eq!(state.level, 2);
        assert_eq!(state.scoring.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.paddle.target_width, 120.0);
        assert_eq!(state.balls.len(), 1);
        assert!(state.power_ups.is_empty());
    }

    #[test]
    fn test_start_level_clamps_index() {
        let mut state = GameState::new(7);
        state.start_level(42).expect("clamped level loads");
        assert_eq!(state.level, 3);
        state.start_level(0).expect("clamped level loads");
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_launch_angles_in_range() {
        let mut state = GameState::new(3);
        for _ in 0..200 {
            let a = state.random_launch_angle();
            assert!((40.0..=140.0).contains(&a));
        }
    }

    #[test]
    fn test_same_seed_same_launch() {
        let mut a = GameState::new(99);
        let mut b = GameState::new(99);
        a.launch_stuck_balls();
        b.launch_stuck_balls();
        let va = a.balls.values().next().map(|ball| ball.vel);
        let vb = b.balls.values().next().map(|ball| ball.vel);
        assert_eq!(va, vb);
    }
}
