//! Force-driven rigid body.
//!
//! - `force`: tagged, optionally timed force contributions
//! - `body`: force accumulation and integration

pub mod force;
pub mod body;

pub use force::{Force, ForceType};
pub use body::PhysicsBody;
