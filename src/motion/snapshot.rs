//! Motion Snapshots
//!
//! Serializable copy of everything observable about a controller after a tick.

use serde::{Serialize, Deserialize};

use crate::core::hash::{SnapshotDigest, SnapshotHasher};
use crate::core::rect::Rect;
use crate::core::vec2::Vector2D;

/// Observable motion state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionSnapshot {
    /// Ticks simulated so far
    pub tick: u32,
    /// Hitbox after the tick
    pub hitbox: Rect,
    /// Velocity after the tick
    pub velocity: Vector2D,
    /// Airborne per the ground sensor
    pub in_air: bool,
    /// A jump is in progress
    pub is_jumping: bool,
    /// Moving fast enough to animate
    pub is_moving: bool,
    /// Coyote frames left
    pub coyote_time_counter: u32,
    /// One-way grace frames left
    pub drop_through_grace_frames: u32,
}

impl MotionSnapshot {
    /// Feed the snapshot into a hasher, field by field.
    pub fn hash_into(&self, hasher: &mut SnapshotHasher) {
        hasher.update_u32(self.tick);
        hasher.update_rect(&self.hitbox);
        hasher.update_vec2(self.velocity);
        hasher.update_bool(self.in_air);
        hasher.update_bool(self.is_jumping);
        hasher.update_bool(self.is_moving);
        hasher.update_u32(self.coyote_time_counter);
        hasher.update_u32(self.drop_through_grace_frames);
    }

    /// SHA-256 digest of this snapshot.
    pub fn digest(&self) -> SnapshotDigest {
        let mut hasher = SnapshotHasher::for_snapshot();
        self.hash_into(&mut hasher);
        hasher.finalize()
    }
}
