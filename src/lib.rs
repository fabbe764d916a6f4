//! # Platform Motion
//!
//! Fixed-timestep player motion for tile-based platformers.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PLATFORM MOTION                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Value types                               │
//! │  ├── vec2.rs     - 2D f32 vector                             │
//! │  ├── rect.rs     - Axis-aligned rectangles                   │
//! │  └── hash.rs     - Snapshot digests                          │
//! │                                                              │
//! │  physics/        - Force-driven body                         │
//! │  ├── force.rs    - Tagged, optionally timed forces           │
//! │  └── body.rs     - Accumulation and integration              │
//! │                                                              │
//! │  level/          - Collision geometry (built once per level) │
//! │  ├── grid.rs     - Tile id grid                              │
//! │  └── collision_index.rs - Merged solid / one-way rectangles  │
//! │                                                              │
//! │  motion/         - Per-tick platformer state machine         │
//! │  ├── controller.rs - Coyote, jump, apex, drop-through        │
//! │  ├── events.rs   - Transitions for collaborators             │
//! │  └── replay.rs   - Recorded-input playback                   │
//! │                                                              │
//! │  config.rs       - JSON configuration and validation         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tick Flow
//!
//! Input intents and the level's [`LevelCollisionIndex`] go into
//! [`MotionController::update`], which drives the [`PhysicsBody`], resolves
//! collisions and moves the caller's hitbox. Animation and camera code read
//! `in_air`, `is_jumping`, `velocity` and `is_moving` afterwards.
//!
//! Everything is single-threaded and allocation-free per tick apart from
//! event buffering. The collision index is immutable after construction and
//! can be shared by reference with other systems.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod physics;
pub mod level;
pub mod motion;
pub mod config;

// Re-export commonly used types
pub use crate::core::rect::Rect;
pub use crate::core::vec2::Vector2D;
pub use config::{Config, ConfigError, LevelConfig};
pub use level::{LevelCollisionIndex, LevelError, TileGrid, TileId};
pub use motion::{MotionConfig, MotionController, MotionEvent, MotionInput, MotionSnapshot};
pub use physics::{Force, ForceType, PhysicsBody};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Logic tick rate (Hz) the default tuning is authored for
pub const TICK_RATE: u32 = 60;
