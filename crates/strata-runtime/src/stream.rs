use std::time::Instant;

use strata_world::{ChunkCoord, retention_window};

use crate::world::World;

/// Outcome of one [`World::stream_window`] pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamReport {
    pub center: ChunkCoord,
    pub radius: i32,
    pub generated: usize,
    pub meshed: usize,
    pub empty: usize,
    pub released: usize,
    pub t_total_ms: u32,
}

#[inline]
fn elapsed_ms(t0: Instant) -> u32 {
    t0.elapsed().as_millis().min(u128::from(u32::MAX)) as u32
}

impl World {
    /// Generates and meshes every chunk in the square window around
    /// `center`, then drops meshes that fell outside it. Chunk voxels stay
    /// cached.
    pub fn stream_window(&mut self, center: ChunkCoord, radius: i32) -> StreamReport {
        let t0 = Instant::now();
        let before = self.stats().chunks;
        let mut report = StreamReport {
            center,
            radius,
            ..StreamReport::default()
        };
        for dx in -radius..=radius {
            for dz in -radius..=radius {
                let coord = center.offset(dx, dz);
                if self.has_mesh(coord) {
                    continue;
                }
                match self.ensure_mesh(coord) {
                    Some(_) => report.meshed += 1,
                    None => report.empty += 1,
                }
            }
        }
        let keep = retention_window(center, radius);
        for coord in self.meshed_coords() {
            if !keep.contains(&coord) && self.release_mesh(coord) {
                report.released += 1;
            }
        }
        report.generated = self.stats().chunks - before;
        report.t_total_ms = elapsed_ms(t0);
        log::info!(
            "stream {} r={}: {} generated, {} meshed, {} empty, {} released in {}ms",
            center,
            radius,
            report.generated,
            report.meshed,
            report.empty,
            report.released,
            report.t_total_ms
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use strata_world::TerrainParams;

    use super::*;

    #[test]
    fn window_meshes_every_chunk_once() {
        let mut w = World::new(TerrainParams::default()).unwrap();
        let r = w.stream_window(ChunkCoord::new(0, 0), 1);
        assert_eq!(r.meshed + r.empty, 9);
        // 3x3 window plus the ring its border faces read, minus corners.
        assert_eq!(r.generated, 21);
        let again = w.stream_window(ChunkCoord::new(0, 0), 1);
        assert_eq!(again.meshed + again.empty + again.generated + again.released, 0);
    }

    #[test]
    fn moving_releases_meshes_left_behind() {
        let mut w = World::new(TerrainParams::default()).unwrap();
        w.stream_window(ChunkCoord::new(0, 0), 1);
        let r = w.stream_window(ChunkCoord::new(1, 0), 1);
        assert_eq!(r.meshed + r.empty, 3);
        assert_eq!(r.released, 3);
        assert!(w.mesh(ChunkCoord::new(-1, 0)).is_none());
        assert!(w.is_loaded(ChunkCoord::new(-1, 0)));
    }
}
