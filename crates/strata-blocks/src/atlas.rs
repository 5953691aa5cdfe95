//! Four-cell horizontal texture atlas: grass top, stone (also grass sides and
//! bottom), sand, water. The atlas image must follow this order.

use crate::types::{BlockType, FaceRole};

pub const ATLAS_CELLS: usize = 4;
const CELL_WIDTH: f32 = 1.0 / ATLAS_CELLS as f32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AtlasCell {
    GrassTop = 0,
    Stone = 1,
    Sand = 2,
    Water = 3,
}

/// Horizontal texture span; every cell covers the full `[0, 1]` height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UvRect {
    pub u_min: f32,
    pub u_max: f32,
}

impl UvRect {
    /// Corner UVs in emission order: `(u_min,0) (u_min,1) (u_max,1) (u_max,0)`.
    #[inline]
    pub fn corners(self) -> [[f32; 2]; 4] {
        [
            [self.u_min, 0.0],
            [self.u_min, 1.0],
            [self.u_max, 1.0],
            [self.u_max, 0.0],
        ]
    }
}

impl AtlasCell {
    /// Cell for a face of `block`. Air has no texture.
    pub fn for_face(block: BlockType, role: FaceRole) -> Option<AtlasCell> {
        match (block, role) {
            (BlockType::Air, _) => None,
            (BlockType::Grass, FaceRole::Top) => Some(AtlasCell::GrassTop),
            (BlockType::Sand, _) => Some(AtlasCell::Sand),
            (BlockType::Water, _) => Some(AtlasCell::Water),
            (BlockType::Grass | BlockType::Stone, _) => Some(AtlasCell::Stone),
        }
    }

    #[inline]
    pub fn uv_rect(self) -> UvRect {
        let i = self as usize as f32;
        UvRect {
            u_min: i * CELL_WIDTH,
            u_max: (i + 1.0) * CELL_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_tile_the_strip() {
        assert_eq!(AtlasCell::GrassTop.uv_rect(), UvRect { u_min: 0.0, u_max: 0.25 });
        assert_eq!(AtlasCell::Stone.uv_rect(), UvRect { u_min: 0.25, u_max: 0.5 });
        assert_eq!(AtlasCell::Sand.uv_rect(), UvRect { u_min: 0.5, u_max: 0.75 });
        assert_eq!(AtlasCell::Water.uv_rect(), UvRect { u_min: 0.75, u_max: 1.0 });
    }

    #[test]
    fn grass_top_differs_from_its_sides() {
        let top = AtlasCell::for_face(BlockType::Grass, FaceRole::Top);
        let side = AtlasCell::for_face(BlockType::Grass, FaceRole::Side);
        let bottom = AtlasCell::for_face(BlockType::Grass, FaceRole::Bottom);
        assert_eq!(top, Some(AtlasCell::GrassTop));
        assert_eq!(side, Some(AtlasCell::Stone));
        assert_eq!(bottom, Some(AtlasCell::Stone));
    }

    #[test]
    fn air_has_no_cell() {
        for role in [FaceRole::Top, FaceRole::Bottom, FaceRole::Side] {
            assert_eq!(AtlasCell::for_face(BlockType::Air, role), None);
        }
    }
}
