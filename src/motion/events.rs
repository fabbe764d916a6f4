//! Motion Events
//!
//! Transitions emitted by the controller so animation, audio and camera
//! collaborators can react without diffing state themselves.

use serde::{Serialize, Deserialize};

/// What the body landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    /// A solid rectangle
    Solid,
    /// A one-way platform
    OneWay,
}

/// Event payload.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum MotionEventData {
    /// A jump started.
    Jumped {
        /// Accepted through the coyote window rather than from the ground
        coyote: bool,
    },
    /// The body touched down.
    Landed {
        /// Surface type
        surface: Surface,
        /// Vertical speed at impact
        impact_speed: f32,
    },
    /// The body left the ground without jumping (walked off, dropped).
    LeftGround,
    /// A rising body hit a ceiling.
    CeilingBump,
    /// The body started dropping through a one-way platform.
    DroppedThrough,
    /// The jump was released early.
    JumpCut,
}

/// A tick-stamped event.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionEvent {
    /// Controller tick on which it happened
    pub tick: u32,
    /// Payload
    pub data: MotionEventData,
}

impl MotionEvent {
    /// Create an event.
    pub fn new(tick: u32, data: MotionEventData) -> Self {
        Self { tick, data }
    }

    /// Create jumped event.
    pub fn jumped(tick: u32, coyote: bool) -> Self {
        Self::new(tick, MotionEventData::Jumped { coyote })
    }

    /// Create landed event.
    pub fn landed(tick: u32, surface: Surface, impact_speed: f32) -> Self {
        Self::new(tick, MotionEventData::Landed { surface, impact_speed })
    }

    /// Whether this is a landing.
    pub fn is_landing(&self) -> bool {
        matches!(self.data, MotionEventData::Landed { .. })
    }
}
