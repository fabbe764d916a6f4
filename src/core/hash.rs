//! Snapshot Hashing
//!
//! Deterministic hashing of motion state for:
//! - Replay validation (same inputs, same digest)
//! - Regression fixtures in tests
//!
//! Floats are hashed by their IEEE-754 bit pattern, so `-0.0` and `0.0` differ.

use sha2::{Sha256, Digest};
use super::rect::Rect;
use super::vec2::Vector2D;

/// Hash output type (256 bits / 32 bytes)
pub type SnapshotDigest = [u8; 32];

/// Deterministic hasher for motion state.
///
/// Wraps SHA-256 with helpers for the crate's value types.
/// Order of updates is critical for determinism.
pub struct SnapshotHasher {
    hasher: Sha256,
}

impl SnapshotHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Create hasher for a single motion snapshot.
    pub fn for_snapshot() -> Self {
        Self::new(b"PLATFORM_MOTION_SNAPSHOT_V1")
    }

    /// Create hasher for a full replay trace.
    pub fn for_replay() -> Self {
        Self::new(b"PLATFORM_MOTION_REPLAY_V1")
    }

    /// Update with a u8 value.
    #[inline]
    pub fn update_u8(&mut self, value: u8) {
        self.hasher.update([value]);
    }

    /// Update with a u32 value (little-endian).
    #[inline]
    pub fn update_u32(&mut self, value: u32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with an f32 value (bit pattern, little-endian).
    #[inline]
    pub fn update_f32(&mut self, value: f32) {
        self.update_u32(value.to_bits());
    }

    /// Update with a Vector2D.
    #[inline]
    pub fn update_vec2(&mut self, value: Vector2D) {
        self.update_f32(value.x);
        self.update_f32(value.y);
    }

    /// Update with a Rect.
    #[inline]
    pub fn update_rect(&mut self, value: &Rect) {
        self.update_f32(value.x);
        self.update_f32(value.y);
        self.update_f32(value.w);
        self.update_f32(value.h);
    }

    /// Update with a boolean.
    #[inline]
    pub fn update_bool(&mut self, value: bool) {
        self.update_u8(value as u8);
    }

    /// Finalize and return the digest.
    pub fn finalize(self) -> SnapshotDigest {
        self.hasher.finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_determinism() {
        let mut h1 = SnapshotHasher::for_snapshot();
        let mut h2 = SnapshotHasher::for_snapshot();

        h1.update_vec2(Vector2D::new(1.5, -2.0));
        h2.update_vec2(Vector2D::new(1.5, -2.0));

        assert_eq!(h1.finalize(), h2.finalize());
    }

    #[test]
    fn test_domain_separation() {
        let mut snapshot = SnapshotHasher::for_snapshot();
        let mut replay = SnapshotHasher::for_replay();

        snapshot.update_bool(true);
        replay.update_bool(true);

        assert_ne!(snapshot.finalize(), replay.finalize());
    }

    #[test]
    fn test_float_bits_matter() {
        let mut pos = SnapshotHasher::for_snapshot();
        let mut neg = SnapshotHasher::for_snapshot();
        pos.update_f32(0.0);
        neg.update_f32(-0.0);
        assert_ne!(pos.finalize(), neg.finalize());
    }
}
