//! Platformer Motion
//!
//! ## Module Structure
//!
//! - `config`: tuning constants
//! - `input`: per-tick intent booleans
//! - `controller`: the ten-phase tick
//! - `events`: transitions for animation/audio collaborators
//! - `snapshot`: observable state and digests
//! - `replay`: recorded-input playback

pub mod config;
pub mod input;
pub mod controller;
pub mod events;
pub mod snapshot;
pub mod replay;

// Re-export key types
pub use config::MotionConfig;
pub use input::MotionInput;
pub use controller::MotionController;
pub use events::{MotionEvent, MotionEventData, Surface};
pub use snapshot::MotionSnapshot;
pub use replay::{replay, replay_bits, ReplayResult};
