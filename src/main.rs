//! Block Breaker headless runner
//!
//! Plays one autopilot session through the fixed-step driver, logs the
//! events a presentation layer would render, and prints the final snapshot.
//!
//! Environment:
//! - `BLOCK_BREAKER_TUNING`: path to a JSON tuning file
//! - `BLOCK_BREAKER_SEED`: RNG seed (defaults to the current time)
//! - `BLOCK_BREAKER_LEVEL`: level to start (1-3)

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use block_breaker::Tuning;
use block_breaker::sim::{FixedStepper, GameEvent, GamePhase, GameState, autopilot};

/// Render frame length of the headless loop (60 fps)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up after ten simulated minutes
const MAX_FRAMES: u32 = 60 * 60 * 10;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Block Breaker (headless) starting...");

    let tuning = match env::var("BLOCK_BREAKER_TUNING") {
        Ok(path) => Tuning::load(&path).with_context(|| format!("loading tuning from {path}"))?,
        Err(_) => Tuning::default(),
    };

    let seed = match env::var("BLOCK_BREAKER_SEED") {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("BLOCK_BREAKER_SEED is not a number: {raw}"))?,
        Err(_) => time_seed(),
    };
    log::info!("Game initialized with seed: {}", seed);

    let mut state = GameState::with_tuning(seed, tuning);
    if let Ok(raw) = env::var("BLOCK_BREAKER_LEVEL") {
        match raw.parse::<u32>() {
            Ok(level) => state.selected_level = block_breaker::clamp_level(level),
            Err(_) => log::warn!("Ignoring BLOCK_BREAKER_LEVEL={}", raw),
        }
    }

    let mut stepper = FixedStepper::new();
    let mut frames = 0;
    while frames < MAX_FRAMES {
        let input = autopilot(&state);
        stepper.advance(&mut state, &input, FRAME_DT);
        for event in state.drain_events() {
            report(&event);
        }
        frames += 1;

        if matches!(state.phase, GamePhase::Clear | GamePhase::Over) {
            break;
        }
    }

    log::info!(
        "Finished after {} frames: {:?}, level {}, score {}, lives {}",
        frames,
        state.phase,
        state.level,
        state.scoring.score,
        state.lives
    );

    let json = state
        .snapshot()
        .to_json()
        .context("serializing final snapshot")?;
    println!("{json}");
    Ok(())
}

fn report(event: &GameEvent) {
    match event {
        GameEvent::Sound(sound) => log::debug!("sound: {:?}", sound),
        GameEvent::Burst { pos, kind } => {
            log::debug!("burst: {:?} at ({:.0}, {:.0})", kind, pos.x, pos.y)
        }
        GameEvent::Shake {
            duration,
            magnitude,
        } => log::trace!("shake: {:.2}s x{}", duration, magnitude),
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(12345)
}
