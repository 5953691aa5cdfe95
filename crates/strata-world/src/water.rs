use hashbrown::HashMap;

use crate::ChunkCoord;

/// Published lake surface heights, one per generated chunk.
///
/// Chunks that have not published read back the default (the sand height
/// threshold), which lets a fresh chunk cap its lakes against neighbours
/// that do not exist yet.
#[derive(Clone, Debug)]
pub struct WaterSurfaceMap {
    default_height: i32,
    heights: HashMap<ChunkCoord, i32>,
}

impl WaterSurfaceMap {
    pub fn new(default_height: i32) -> Self {
        Self {
            default_height,
            heights: HashMap::new(),
        }
    }

    /// Published height for `coord`, or the default.
    #[inline]
    pub fn get(&self, coord: ChunkCoord) -> i32 {
        self.heights
            .get(&coord)
            .copied()
            .unwrap_or(self.default_height)
    }

    #[inline]
    pub fn published(&self, coord: ChunkCoord) -> Option<i32> {
        self.heights.get(&coord).copied()
    }

    /// Records the surface height of `coord`, returning the previous entry.
    pub fn publish(&mut self, coord: ChunkCoord, height: i32) -> Option<i32> {
        let prev = self.heights.insert(coord, height);
        if let Some(p) = prev {
            log::warn!(
                "water surface for chunk {} republished ({} -> {})",
                coord,
                p,
                height
            );
        }
        prev
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpublished_reads_default() {
        let m = WaterSurfaceMap::new(6);
        assert_eq!(m.get(ChunkCoord::new(4, -2)), 6);
        assert_eq!(m.published(ChunkCoord::new(4, -2)), None);
        assert!(m.is_empty());
    }

    #[test]
    fn publish_then_read() {
        let mut m = WaterSurfaceMap::new(6);
        let c = ChunkCoord::new(-1, 3);
        assert_eq!(m.publish(c, 4), None);
        assert_eq!(m.get(c), 4);
        assert_eq!(m.published(c), Some(4));
        assert_eq!(m.len(), 1);
        assert_eq!(m.get(ChunkCoord::new(0, 0)), 6);
    }
}
