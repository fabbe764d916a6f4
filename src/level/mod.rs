//! Level collision geometry.
//!
//! - `grid`: tile ids as handed over by the level loader
//! - `collision_index`: merged solid / one-way rectangles

pub mod grid;
pub mod collision_index;

pub use grid::{LevelError, TileGrid, TileId};
pub use collision_index::LevelCollisionIndex;
