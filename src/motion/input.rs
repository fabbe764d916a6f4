//! Input Intents
//!
//! The four booleans the motion core understands. Device binding happens
//! elsewhere; only intent reaches the controller.
//!
//! Intents pack into a single byte for compact replay recordings.

use serde::{Serialize, Deserialize};

/// Player intent for a single tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MotionInput {
    /// Move left held
    pub left: bool,
    /// Move right held
    pub right: bool,
    /// Down held (fast fall, drop-through)
    pub down: bool,
    /// Jump requested
    pub jump: bool,
}

impl MotionInput {
    /// Left flag bit
    pub const FLAG_LEFT: u8 = 0x01;

    /// Right flag bit
    pub const FLAG_RIGHT: u8 = 0x02;

    /// Down flag bit
    pub const FLAG_DOWN: u8 = 0x04;

    /// Jump flag bit
    pub const FLAG_JUMP: u8 = 0x08;

    /// No intent.
    pub const IDLE: Self = Self {
        left: false,
        right: false,
        down: false,
        jump: false,
    };

    /// Create an idle input.
    pub const fn new() -> Self {
        Self::IDLE
    }

    /// Hold left.
    pub const fn left() -> Self {
        Self { left: true, ..Self::IDLE }
    }

    /// Hold right.
    pub const fn right() -> Self {
        Self { right: true, ..Self::IDLE }
    }

    /// Hold down.
    pub const fn down() -> Self {
        Self { down: true, ..Self::IDLE }
    }

    /// Request a jump.
    pub const fn jump() -> Self {
        Self { jump: true, ..Self::IDLE }
    }

    /// Same input with jump set.
    pub const fn with_jump(self) -> Self {
        Self { jump: true, ..self }
    }

    /// Same input with down set.
    pub const fn with_down(self) -> Self {
        Self { down: true, ..self }
    }

    /// Net horizontal direction: -1, 0 or +1.
    ///
    /// Both directions held cancel out.
    #[inline]
    pub fn horizontal(&self) -> i8 {
        self.right as i8 - self.left as i8
    }

    /// Check if this is an idle frame (no input).
    #[inline]
    pub fn is_idle(&self) -> bool {
        !(self.left || self.right || self.down || self.jump)
    }

    /// Pack into flag bits.
    pub fn to_bits(self) -> u8 {
        let mut bits = 0;
        if self.left {
            bits |= Self::FLAG_LEFT;
        }
        if self.right {
            bits |= Self::FLAG_RIGHT;
        }
        if self.down {
            bits |= Self::FLAG_DOWN;
        }
        if self.jump {
            bits |= Self::FLAG_JUMP;
        }
        bits
    }

    /// Unpack from flag bits. Unknown bits are ignored.
    pub fn from_bits(bits: u8) -> Self {
        Self {
            left: bits & Self::FLAG_LEFT != 0,
            right: bits & Self::FLAG_RIGHT != 0,
            down: bits & Self::FLAG_DOWN != 0,
            jump: bits & Self::FLAG_JUMP != 0,
        }
    }
}
