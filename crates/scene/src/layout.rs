//! World-space placement of the nine tiles.
//!
//! The board itself has no notion of space. Tile positions are a scene
//! annotation keyed by [`Pos`], computed once and never mutated.

use glam::Vec3;

use crate::types::{Pos, CELL_COUNT, TILE_HALF_EXTENTS, TILE_SIZE};

/// Centre of a tile on the `z = 0` board plane
///
/// Column 0 is on the left (negative x), row 0 at the top (positive y).
pub fn tile_center(pos: Pos) -> Vec3 {
    Vec3::new(
        -TILE_SIZE + f32::from(pos.col()) * TILE_SIZE,
        TILE_SIZE - f32::from(pos.row()) * TILE_SIZE,
        0.0,
    )
}

/// Fixed per-tile world positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileLayout {
    positions: [Vec3; CELL_COUNT],
    half_extents: Vec3,
}

impl TileLayout {
    pub fn new() -> Self {
        Self {
            positions: Pos::ALL.map(tile_center),
            half_extents: Vec3::from_array(TILE_HALF_EXTENTS),
        }
    }

    pub fn position(&self, pos: Pos) -> Vec3 {
        self.positions[pos.index()]
    }

    pub fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, Vec3)> + '_ {
        Pos::ALL.iter().map(move |&pos| (pos, self.position(pos)))
    }
}

impl Default for TileLayout {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_and_center_positions() {
        let layout = TileLayout::new();
        assert_eq!(layout.position(Pos::new(0, 0).unwrap()), Vec3::new(-1.5, 1.5, 0.0));
        assert_eq!(layout.position(Pos::CENTER), Vec3::ZERO);
        assert_eq!(layout.position(Pos::new(2, 2).unwrap()), Vec3::new(1.5, -1.5, 0.0));
        assert_eq!(layout.position(Pos::new(0, 2).unwrap()), Vec3::new(1.5, 1.5, 0.0));
    }
}
