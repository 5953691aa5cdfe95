use hashbrown::HashSet;

use crate::ChunkCoord;

/// Chunk coordinates to keep resident around `center`: the square
/// `[c - r, c + r]` on both axes. A negative radius yields an empty window.
pub fn retention_window(center: ChunkCoord, radius: i32) -> HashSet<ChunkCoord> {
    if radius < 0 {
        return HashSet::new();
    }
    let side = (2 * radius as usize) + 1;
    let mut out = HashSet::with_capacity(side * side);
    for dz in -radius..=radius {
        for dx in -radius..=radius {
            out.insert(center.offset(dx, dz));
        }
    }
    out
}
