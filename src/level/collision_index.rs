//! Level Collision Index
//!
//! Precomputes a small set of maximal axis-aligned rectangles from a tile grid
//! so per-tick collision tests run against a handful of boxes instead of every
//! tile.
//!
//! ## Construction
//!
//! 1. Horizontal merge: each row is scanned left to right and runs of equal
//!    non-empty ids become one rectangle.
//! 2. Vertical merge: row runs with the same x, width and id that touch
//!    vertically are folded into one bounding rectangle.
//! 3. Classification: ids in the one-way set go to the one-way list, the rest
//!    are solid.
//!
//! The index is immutable once built and safe to share by reference.

use std::collections::BTreeSet;
use tracing::{debug, warn};

use crate::config::LevelConfig;
use crate::core::rect::Rect;
use super::grid::{TileGrid, TileId};

/// Vertical gap below which two row runs count as adjacent.
const ADJACENCY_EPSILON: f32 = 1.0;

/// A merged rectangle and the tile id it was built from.
#[derive(Clone, Copy, Debug, PartialEq)]
struct TileRun {
    rect: Rect,
    tile: TileId,
}

/// Solid and one-way collision rectangles for one level.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LevelCollisionIndex {
    solid: Vec<Rect>,
    one_way: Vec<Rect>,
    tile_size: f32,
}

impl LevelCollisionIndex {
    /// Build the index for a grid.
    ///
    /// Emptiness follows the grid's own empty id. A config naming a
    /// different one is logged and otherwise ignored.
    ///
    /// Runs once per level load; cost is linear in tiles for pass 1 and
    /// quadratic in row runs for pass 2, which is far smaller than the tile count.
    pub fn build(grid: &TileGrid, config: &LevelConfig) -> Self {
        if grid.empty_id() != config.empty_tile_id {
            warn!(
                grid_empty = grid.empty_id(),
                config_empty = config.empty_tile_id,
                "grid and level config disagree on the empty tile id; using the grid's"
            );
        }

        let rows = merge_rows(grid, config.tile_size);
        let row_run_count = rows.len();
        let merged = merge_columns(rows);

        let mut index = Self::from_runs(merged, &config.one_way_tile_ids);
        index.tile_size = config.tile_size;

        debug!(
            width = grid.width(),
            height = grid.height(),
            tiles = grid.non_empty_count(),
            row_runs = row_run_count,
            solid = index.solid.len(),
            one_way = index.one_way.len(),
            "built level collision index"
        );

        index
    }

    /// Build directly from rectangles, bypassing the tile merge.
    ///
    /// Useful for hand-authored collision and for tests.
    pub fn from_rects(solid: Vec<Rect>, one_way: Vec<Rect>) -> Self {
        Self {
            solid,
            one_way,
            tile_size: 0.0,
        }
    }

    fn from_runs(runs: Vec<TileRun>, one_way_ids: &BTreeSet<TileId>) -> Self {
        let (one_way, solid): (Vec<TileRun>, Vec<TileRun>) = runs
            .into_iter()
            .partition(|run| one_way_ids.contains(&run.tile));

        Self {
            solid: solid.into_iter().map(|run| run.rect).collect(),
            one_way: one_way.into_iter().map(|run| run.rect).collect(),
            tile_size: 0.0,
        }
    }

    /// Rectangles that block movement in every direction.
    #[inline]
    pub fn solid_collisions(&self) -> &[Rect] {
        &self.solid
    }

    /// Rectangles that only block qualifying downward movement.
    #[inline]
    pub fn one_way_platform_collisions(&self) -> &[Rect] {
        &self.one_way
    }

    /// Tile size the index was built with (0 for hand-built indices).
    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Total rectangle count.
    #[inline]
    pub fn len(&self) -> usize {
        self.solid.len() + self.one_way.len()
    }

    /// True when the level has no collision at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.solid.is_empty() && self.one_way.is_empty()
    }

    /// Solid rectangles overlapping `area`.
    pub fn solid_overlaps<'a>(&'a self, area: &'a Rect) -> impl Iterator<Item = &'a Rect> + 'a {
        self.solid.iter().filter(move |r| r.intersects(area))
    }

    /// One-way rectangles overlapping `area`.
    pub fn one_way_overlaps<'a>(&'a self, area: &'a Rect) -> impl Iterator<Item = &'a Rect> + 'a {
        self.one_way.iter().filter(move |r| r.intersects(area))
    }

    /// Whether any solid rectangle overlaps `area`.
    pub fn collides_solid(&self, area: &Rect) -> bool {
        self.solid.iter().any(|r| r.intersects(area))
    }

    /// Whether any one-way rectangle overlaps `area`.
    pub fn collides_one_way(&self, area: &Rect) -> bool {
        self.one_way.iter().any(|r| r.intersects(area))
    }

    /// Bounding box of all collision, for camera clamping.
    pub fn bounds(&self) -> Option<Rect> {
        self.solid
            .iter()
            .chain(self.one_way.iter())
            .copied()
            .reduce(|acc, r| acc.union(&r))
    }
}

/// Pass 1: horizontal runs of equal non-empty ids, row by row.
fn merge_rows(grid: &TileGrid, tile_size: f32) -> Vec<TileRun> {
    let mut runs = Vec::new();

    for row in 0..grid.height() {
        let y = row as f32 * tile_size;
        let mut current: Option<TileRun> = None;

        for (col, &tile) in grid.row(row).iter().enumerate() {
            if grid.is_empty_tile(tile) {
                runs.extend(current.take());
                continue;
            }

            match current.as_mut() {
                Some(run) if run.tile == tile => {
                    run.rect.w += tile_size;
                }
                _ => {
                    runs.extend(current.take());
                    current = Some(TileRun {
                        rect: Rect::new(col as f32 * tile_size, y, tile_size, tile_size),
                        tile,
                    });
                }
            }
        }

        runs.extend(current.take());
    }

    runs
}

/// Pass 2: fold vertically adjacent runs with identical x, width and id.
///
/// Runs arrive in row order, so each chain is grown downward from its topmost
/// member.
fn merge_columns(runs: Vec<TileRun>) -> Vec<TileRun> {
    let mut visited = vec![false; runs.len()];
    let mut merged = Vec::with_capacity(runs.len());

    for i in 0..runs.len() {
        if visited[i] {
            continue;
        }
        visited[i] = true;
        let mut group = runs[i];

        for j in (i + 1)..runs.len() {
            if visited[j] {
                continue;
            }
            let candidate = &runs[j];
            if candidate.rect.y - group.rect.bottom() >= ADJACENCY_EPSILON {
                // Later runs only sit lower; the chain is broken.
                break;
            }
            if candidate.tile == group.tile
                && candidate.rect.x == group.rect.x
                && candidate.rect.w == group.rect.w
                && (candidate.rect.y - group.rect.bottom()).abs() < ADJACENCY_EPSILON
            {
                visited[j] = true;
                group.rect = group.rect.union(&candidate.rect);
            }
        }

        merged.push(group);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_config(one_way: &[TileId]) -> LevelConfig {
        LevelConfig {
            tile_size: 16.0,
            empty_tile_id: 0,
            one_way_tile_ids: one_way.iter().copied().collect(),
        }
    }

    #[test]
    fn test_one_way_row_merges_into_single_rect() {
        let grid = TileGrid::from_ascii(
            ".......\n\
             .22222.\n\
             .......\n",
            0,
        )
        .unwrap();
        let index = LevelCollisionIndex::build(&grid, &level_config(&[2]));

        assert!(index.solid_collisions().is_empty());
        assert_eq!(
            index.one_way_platform_collisions(),
            &[Rect::new(16.0, 16.0, 80.0, 16.0)]
        );
    }

    #[test]
    fn test_block_merges_into_single_rect() {
        let grid = TileGrid::from_ascii("111\n111\n111\n", 0).unwrap();
        let index = LevelCollisionIndex::build(&grid, &level_config(&[]));
        assert_eq!(index.solid_collisions(), &[Rect::new(0.0, 0.0, 48.0, 48.0)]);
    }

    #[test]
    fn test_different_ids_do_not_merge() {
        // Same columns, different ids stacked; and two ids side by side.
        let grid = TileGrid::from_ascii("1133\n2233\n", 0).unwrap();
        let index = LevelCollisionIndex::build(&grid, &level_config(&[]));

        let mut rects = index.solid_collisions().to_vec();
        rects.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        assert_eq!(
            rects,
            vec![
                Rect::new(0.0, 0.0, 32.0, 16.0),
                Rect::new(0.0, 16.0, 32.0, 16.0),
                Rect::new(32.0, 0.0, 32.0, 32.0),
            ]
        );
    }

    #[test]
    fn test_width_mismatch_blocks_vertical_merge() {
        let grid = TileGrid::from_ascii("111.\n1111\n", 0).unwrap();
        let index = LevelCollisionIndex::build(&grid, &level_config(&[]));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_gap_row_blocks_vertical_merge() {
        let grid = TileGrid::from_ascii("11\n..\n11\n", 0).unwrap();
        let index = LevelCollisionIndex::build(&grid, &level_config(&[]));
        assert_eq!(
            index.solid_collisions(),
            &[Rect::new(0.0, 0.0, 32.0, 16.0), Rect::new(0.0, 32.0, 32.0, 16.0)]
        );
    }

    #[test]
    fn test_classification_splits_solid_and_one_way() {
        let grid = TileGrid::from_ascii("..22..\n......\n111111\n", 0).unwrap();
        let index = LevelCollisionIndex::build(&grid, &level_config(&[2]));
        assert_eq!(index.solid_collisions(), &[Rect::new(0.0, 32.0, 96.0, 16.0)]);
        assert_eq!(index.one_way_platform_collisions(), &[Rect::new(32.0, 0.0, 32.0, 16.0)]);
        assert_eq!(index.bounds(), Some(Rect::new(0.0, 0.0, 96.0, 48.0)));
    }

    #[test]
    fn test_queries() {
        let index = LevelCollisionIndex::from_rects(
            vec![Rect::new(0.0, 100.0, 200.0, 16.0)],
            vec![Rect::new(50.0, 50.0, 50.0, 16.0)],
        );
        let probe = Rect::new(60.0, 60.0, 10.0, 50.0);
        assert!(index.collides_solid(&probe));
        assert!(index.collides_one_way(&probe));
        assert_eq!(index.solid_overlaps(&probe).count(), 1);

        let clear = Rect::new(300.0, 0.0, 10.0, 10.0);
        assert!(!index.collides_solid(&clear));
        assert_eq!(index.one_way_overlaps(&clear).count(), 0);
    }

    #[test]
    fn test_grid_empty_id_wins_over_config() {
        let grid = TileGrid::from_rows(vec![vec![9, 1, 9], vec![9, 9, 9]], 9).unwrap();
        let config = level_config(&[]);
        assert_ne!(grid.empty_id(), config.empty_tile_id);

        let index = LevelCollisionIndex::build(&grid, &config);
        assert_eq!(index.solid_collisions(), &[Rect::new(16.0, 0.0, 16.0, 16.0)]);
    }

    #[test]
    fn test_empty_grid() {
        let grid = TileGrid::new(4, 4, 0);
        let index = LevelCollisionIndex::build(&grid, &level_config(&[]));
        assert!(index.is_empty());
        assert_eq!(index.bounds(), None);
    }
}
