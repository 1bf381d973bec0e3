//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module is pure:
//! - Time comes in as a frame delta, input as a [`FrameInput`]
//! - Seeded RNG only
//! - Stable iteration order (slot order for balls and pickups, row-major for bricks)
//! - No rendering, audio or platform dependencies; effects go out as [`GameEvent`]s

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod events;
pub mod input;
pub mod level;
pub mod physics;
pub mod powerup;
pub mod rect;
pub mod score;
pub mod slots;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use clock::FixedStepper;
pub use events::{GameEvent, Sound};
pub use input::FrameInput;
pub use level::{Level, LevelError, decode_layout, load_level};
pub use powerup::{SpeedModifier, SpeedState};
pub use rect::{Rect, play_field};
pub use slots::{SlotId, Slots};
pub use snapshot::Snapshot;
pub use state::{Ball, Brick, BrickKind, GamePhase, GameState, Paddle, PowerKind, PowerUp};
pub use tick::tick;
