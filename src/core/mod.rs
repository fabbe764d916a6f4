//! Core value types.
//!
//! Plain `Copy` geometry shared by every other module, plus the snapshot hasher
//! used for replay verification.

pub mod vec2;
pub mod rect;
pub mod hash;

// Re-export core types
pub use vec2::Vector2D;
pub use rect::Rect;
pub use hash::{SnapshotDigest, SnapshotHasher};
