use serde::{Deserialize, Serialize};

use crate::CHUNK_SIZE;

/// Column-chunk index on the horizontal plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cz: i32) -> Self {
        Self { cx, cz }
    }

    /// Chunk containing the world column `(wx, wz)`.
    #[inline]
    pub fn containing(wx: i32, wz: i32) -> Self {
        let s = CHUNK_SIZE as i32;
        Self::new(wx.div_euclid(s), wz.div_euclid(s))
    }

    /// Local column offset of `(wx, wz)` inside its chunk.
    #[inline]
    pub fn local_of(wx: i32, wz: i32) -> (usize, usize) {
        let s = CHUNK_SIZE as i32;
        (wx.rem_euclid(s) as usize, wz.rem_euclid(s) as usize)
    }

    /// Chunk `(dx, dz)` away; indices wrap at the `i32` range.
    #[inline]
    pub fn offset(self, dx: i32, dz: i32) -> Self {
        Self {
            cx: self.cx.wrapping_add(dx),
            cz: self.cz.wrapping_add(dz),
        }
    }

    /// World x/z of local column `(0, 0)`. Chunks past `i32::MAX / 16` wrap
    /// around, like every other world-coordinate step.
    #[inline]
    pub fn base(self) -> (i32, i32) {
        let s = CHUNK_SIZE as i32;
        (self.cx.wrapping_mul(s), self.cz.wrapping_mul(s))
    }

    /// World column of local `(lx, lz)`, wrapping at the `i32` range. Local
    /// offsets may step one column outside the chunk.
    #[inline]
    pub fn world_column(self, lx: i32, lz: i32) -> (i32, i32) {
        let (bx, bz) = self.base();
        (bx.wrapping_add(lx), bz.wrapping_add(lz))
    }

    /// The four edge-sharing neighbours: -X, +X, -Z, +Z.
    #[inline]
    pub fn orthogonal_neighbors(self) -> [ChunkCoord; 4] {
        [
            self.offset(-1, 0),
            self.offset(1, 0),
            self.offset(0, -1),
            self.offset(0, 1),
        ]
    }

    #[inline]
    pub fn chebyshev_distance(self, other: ChunkCoord) -> i64 {
        let dx = (i64::from(self.cx) - i64::from(other.cx)).abs();
        let dz = (i64::from(self.cz) - i64::from(other.cz)).abs();
        dx.max(dz)
    }
}

impl From<(i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<ChunkCoord> for (i32, i32) {
    fn from(value: ChunkCoord) -> Self {
        (value.cx, value.cz)
    }
}

impl std::fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.cx, self.cz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_world_columns_floor_to_lower_chunk() {
        assert_eq!(ChunkCoord::containing(-1, -16), ChunkCoord::new(-1, -1));
        assert_eq!(ChunkCoord::containing(-17, 15), ChunkCoord::new(-2, 0));
        assert_eq!(ChunkCoord::local_of(-1, -16), (15, 0));
    }

    #[test]
    fn base_and_local_recompose_world_column() {
        for (wx, wz) in [(0, 0), (31, -5), (-33, 100), (i32::MAX / 2, i32::MIN / 2)] {
            let c = ChunkCoord::containing(wx, wz);
            let (lx, lz) = ChunkCoord::local_of(wx, wz);
            let (bx, bz) = c.base();
            assert_eq!((bx + lx as i32, bz + lz as i32), (wx, wz));
        }
    }

    #[test]
    fn extreme_coordinates_wrap() {
        let top = ChunkCoord::containing(i32::MAX, 0);
        assert_eq!(top.world_column(15, 0), (i32::MAX, 0));
        assert_eq!(top.world_column(16, 0), (i32::MIN, 0));
        assert_eq!(top.offset(1, 0).base(), (i32::MIN, 0));
        assert_eq!(ChunkCoord::new(i32::MAX, 0).offset(1, 0).cx, i32::MIN);
        assert_eq!(ChunkCoord::new(i32::MAX / 16 + 1, 0).base().0, i32::MIN);
        let bottom = ChunkCoord::containing(i32::MIN, i32::MIN);
        assert_eq!(bottom.world_column(-1, 0), (i32::MAX, i32::MIN));
    }

    #[test]
    fn neighbor_order_is_stable() {
        let n = ChunkCoord::new(2, -3).orthogonal_neighbors();
        assert_eq!(
            n,
            [
                ChunkCoord::new(1, -3),
                ChunkCoord::new(3, -3),
                ChunkCoord::new(2, -4),
                ChunkCoord::new(2, -2),
            ]
        );
    }
}
