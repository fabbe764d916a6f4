//! Forces
//!
//! A force is a tagged vector contribution with an optional frame budget.
//! Continuous forces (gravity, input) are permanent and replaced every tick;
//! impulses like jumps and knockback carry a duration and expire on their own.

use serde::{Serialize, Deserialize};

use crate::core::vec2::Vector2D;

/// What produced a force. Used as the slot key for replace-by-type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ForceType {
    /// Constant downward pull while airborne
    Gravity = 0,
    /// Horizontal steering from player intent
    Input = 1,
    /// Sustain force of a held jump
    Jump = 2,
    /// Short horizontal burst
    Dash = 3,
    /// Hit reaction
    Knockback = 4,
    /// Ground drag expressed as a force
    Friction = 5,
    /// Air drag expressed as a force
    AirResistance = 6,
    /// Anything else (wind, conveyors, scripted pushes)
    Custom = 7,
}

/// A single force acting on a body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Force {
    /// Force vector (mass-scaled; acceleration is `vector / mass`)
    pub vector: Vector2D,
    /// Slot tag
    pub kind: ForceType,
    /// Lifetime in frames, `None` for permanent
    duration: Option<u32>,
    /// Frames elapsed since creation
    elapsed: u32,
    /// Cleared once the duration is spent
    active: bool,
}

impl Force {
    /// Create a permanent force.
    pub fn permanent(vector: Vector2D, kind: ForceType) -> Self {
        Self {
            vector,
            kind,
            duration: None,
            elapsed: 0,
            active: true,
        }
    }

    /// Create a force that lasts `frames` updates.
    ///
    /// A zero-frame force is inactive from the start and never contributes.
    pub fn timed(vector: Vector2D, kind: ForceType, frames: u32) -> Self {
        Self {
            vector,
            kind,
            duration: Some(frames),
            elapsed: 0,
            active: frames > 0,
        }
    }

    /// Advance the force's timer by one frame.
    ///
    /// Returns whether the force is still active. Permanent forces always are;
    /// timed forces deactivate once `elapsed >= duration`, which tells the
    /// owner to drop them.
    pub fn update(&mut self) -> bool {
        if !self.active {
            return false;
        }
        if let Some(duration) = self.duration {
            self.elapsed = self.elapsed.saturating_add(1);
            if self.elapsed >= duration {
                self.active = false;
            }
        }
        self.active
    }

    /// Scale the vector, for decaying effects.
    #[inline]
    pub fn apply_reduction(&mut self, factor: f32) {
        self.vector *= factor;
    }

    /// Whether the force still contributes.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the force has no duration limit.
    #[inline]
    pub fn is_permanent(&self) -> bool {
        self.duration.is_none()
    }

    /// Lifetime in frames (`None` = permanent).
    #[inline]
    pub fn duration(&self) -> Option<u32> {
        self.duration
    }

    /// Frames elapsed so far.
    #[inline]
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Frames left before expiry (`None` = permanent).
    pub fn remaining(&self) -> Option<u32> {
        self.duration.map(|d| d.saturating_sub(self.elapsed))
    }
}
