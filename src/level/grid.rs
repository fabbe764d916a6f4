//! Tile Grid
//!
//! In-memory H×W grid of tile ids as handed over by the level loader.
//! One id is reserved as "empty"; every other id is collidable.

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Tile identifier.
pub type TileId = u32;

/// Errors raised while assembling a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        /// Offending row index
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of this row
        found: usize,
    },

    /// A glyph in an ASCII layout has no tile mapping.
    #[error("unknown tile glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph {
        /// The glyph
        glyph: char,
        /// Row index
        row: usize,
        /// Column index
        col: usize,
    },
}

/// Row-major tile grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: usize,
    height: usize,
    empty: TileId,
    tiles: Vec<TileId>,
}

impl TileGrid {
    /// Create a grid filled with the empty id.
    pub fn new(width: usize, height: usize, empty: TileId) -> Self {
        Self {
            width,
            height,
            empty,
            tiles: vec![empty; width * height],
        }
    }

    /// Build from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<TileId>>, empty: TileId) -> Result<Self, LevelError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut tiles = Vec::with_capacity(width * height);

        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(LevelError::RaggedRow {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            tiles.extend(cells);
        }

        Ok(Self { width, height, empty, tiles })
    }

    /// Build from an ASCII layout.
    ///
    /// `.` and space map to `empty`; `0-9` map to 0-9 and `a-z` to 10-35.
    /// Leading and trailing blank lines are ignored.
    pub fn from_ascii(layout: &str, empty: TileId) -> Result<Self, LevelError> {
        let mut rows = Vec::new();
        for (row, line) in layout.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col, glyph) in line.trim_end().chars().enumerate() {
                let id = match glyph {
                    '.' | ' ' => empty,
                    c => c
                        .to_digit(36)
                        .ok_or(LevelError::UnknownGlyph { glyph, row, col })?,
                };
                cells.push(id);
            }
            rows.push(cells);
        }
        Self::from_rows(rows, empty)
    }

    /// Columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The reserved empty id.
    #[inline]
    pub fn empty_id(&self) -> TileId {
        self.empty
    }

    /// Tile at `(col, row)`, `None` when out of range.
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> Option<TileId> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.tiles[row * self.width + col])
    }

    /// Set a tile. Out-of-range writes are ignored.
    pub fn set(&mut self, col: usize, row: usize, id: TileId) {
        if col < self.width && row < self.height {
            self.tiles[row * self.width + col] = id;
        }
    }

    /// Whether `id` is the reserved empty id.
    #[inline]
    pub fn is_empty_tile(&self, id: TileId) -> bool {
        id == self.empty
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[TileId] {
        let start = row * self.width;
        &self.tiles[start..start + self.width]
    }

    /// Number of non-empty tiles.
    pub fn non_empty_count(&self) -> usize {
        self.tiles.iter().filter(|&&id| id != self.empty).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let grid = TileGrid::from_rows(vec![vec![0, 1, 1], vec![2, 0, 0]], 0).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(1, 0), Some(1));
        assert_eq!(grid.get(0, 1), Some(2));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.non_empty_count(), 3);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = TileGrid::from_rows(vec![vec![0, 1], vec![1]], 0).unwrap_err();
        assert_eq!(err, LevelError::RaggedRow { row: 1, expected: 2, found: 1 });
    }

    #[test]
    fn test_from_ascii() {
        let grid = TileGrid::from_ascii("..2..\n11111\n", 0).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.row(0), &[0, 0, 2, 0, 0]);
        assert_eq!(grid.row(1), &[1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_unknown_glyph() {
        let err = TileGrid::from_ascii("..#", 0).unwrap_err();
        assert_eq!(err, LevelError::UnknownGlyph { glyph: '#', row: 0, col: 2 });
    }

    #[test]
    fn test_set_out_of_range_ignored() {
        let mut grid = TileGrid::new(2, 2, 0);
        grid.set(5, 5, 3);
        grid.set(1, 1, 3);
        assert_eq!(grid.non_empty_count(), 1);
    }
}
