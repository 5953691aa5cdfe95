//! Two-pass chunk generation.
//!
//! Pass 1 ([`ColumnPlan::sample`]) classifies every column: surface height,
//! lake mask and sand/grass blend weight, plus the lowest lake rim found
//! inside the chunk. Publishing the chunk's water surface is a separate step
//! ([`ColumnPlan::resolve_water_height`]) because it reads and writes state
//! shared with the neighbouring chunks. Only the resulting [`CommittedPlan`]
//! can place blocks.

use strata_world::{CHUNK_SIZE, ChunkCoord, Terrain, TerrainParams, WaterSurfaceMap};

use crate::COLUMNS;

/// Lake depth below the water surface before the sand bed starts.
pub const LAKE_DEPTH: i32 = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColumnInfo {
    pub height: i32,
    pub is_water: bool,
    pub blend: f64,
}

#[inline]
pub(crate) fn column_index(x: usize, z: usize) -> usize {
    x * CHUNK_SIZE + z
}

#[derive(Clone, Debug)]
pub struct ColumnPlan {
    pub(crate) coord: ChunkCoord,
    pub(crate) params: TerrainParams,
    pub(crate) columns: Vec<ColumnInfo>,
    // Lowest "max of self and 8 neighbours" over the water columns.
    pub(crate) rim: Option<i32>,
}

impl ColumnPlan {
    pub fn sample(coord: ChunkCoord, terrain: &Terrain) -> Self {
        let mut columns = Vec::with_capacity(COLUMNS);
        for x in 0..CHUNK_SIZE {
            for z in 0..CHUNK_SIZE {
                let (wx, wz) = coord.world_column(x as i32, z as i32);
                let s = terrain.sample_column(wx, wz);
                columns.push(ColumnInfo {
                    height: s.height,
                    is_water: s.is_water,
                    blend: s.blend,
                });
            }
        }
        let mut plan = Self {
            coord,
            params: terrain.params().clone(),
            columns,
            rim: None,
        };
        plan.rim = plan.lowest_rim(terrain);
        log::debug!(
            "chunk {}: {} water columns identified",
            coord,
            plan.water_columns()
        );
        plan
    }

    fn lowest_rim(&self, terrain: &Terrain) -> Option<i32> {
        let s = CHUNK_SIZE as i32;
        let mut rim: Option<i32> = None;
        for x in 0..CHUNK_SIZE {
            for z in 0..CHUNK_SIZE {
                let col = self.columns[column_index(x, z)];
                if !col.is_water {
                    continue;
                }
                let mut highest = col.height;
                for dx in -1..=1i32 {
                    for dz in -1..=1i32 {
                        if dx == 0 && dz == 0 {
                            continue;
                        }
                        let nx = x as i32 + dx;
                        let nz = z as i32 + dz;
                        let h = if (0..s).contains(&nx) && (0..s).contains(&nz) {
                            self.columns[column_index(nx as usize, nz as usize)].height
                        } else {
                            let (wx, wz) = self.coord.world_column(nx, nz);
                            terrain.terrain_height(wx, wz)
                        };
                        highest = highest.max(h);
                    }
                }
                rim = Some(rim.map_or(highest, |r| r.min(highest)));
            }
        }
        rim
    }

    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    #[inline]
    pub fn column(&self, x: usize, z: usize) -> ColumnInfo {
        self.columns[column_index(x, z)]
    }

    pub fn water_columns(&self) -> usize {
        self.columns.iter().filter(|c| c.is_water).count()
    }

    /// Fixes this chunk's water surface and publishes it to `water`.
    ///
    /// The surface is the lowest lake rim, lowered to any smaller height
    /// already published (or defaulted) by the four edge neighbours, then
    /// clamped to `[1, max_height - 1]`. Neighbours generated later do not
    /// revise it.
    pub fn resolve_water_height(self, water: &mut WaterSurfaceMap) -> CommittedPlan {
        let neighbors = self.coord.orthogonal_neighbors().map(|n| water.get(n));
        let surface = self
            .rim
            .into_iter()
            .chain(neighbors)
            .min()
            .unwrap_or(self.params.sand_height_threshold)
            .clamp(1, self.params.max_height - 1);
        water.publish(self.coord, surface);
        CommittedPlan {
            plan: self,
            water_height: surface,
        }
    }
}

/// A column plan whose water surface has been published.
#[derive(Clone, Debug)]
pub struct CommittedPlan {
    plan: ColumnPlan,
    water_height: i32,
}

impl CommittedPlan {
    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        self.plan.coord
    }

    #[inline]
    pub fn water_height(&self) -> i32 {
        self.water_height
    }

    #[inline]
    pub fn plan(&self) -> &ColumnPlan {
        &self.plan
    }

    #[inline]
    pub(crate) fn params(&self) -> &TerrainParams {
        &self.plan.params
    }

    /// Surface after pulling low dry columns toward the sand threshold.
    pub fn blended_height(&self, col: ColumnInfo) -> i32 {
        let p = self.params();
        let sand = f64::from(p.sand_height_threshold);
        if !col.is_water && col.blend < 1.0 && f64::from(col.height) <= p.blend_ceiling() {
            let t = col.blend.clamp(0.0, 1.0);
            (sand + (f64::from(col.height) - sand) * t) as i32
        } else {
            col.height
        }
    }
}
