//! Chunk voxel grids and their generation.
#![forbid(unsafe_code)]

mod plan;

pub use plan::{ColumnInfo, ColumnPlan, CommittedPlan, LAKE_DEPTH};

use strata_blocks::BlockType;
use strata_mesh_cpu::{BlockAccess, ChunkMesh, VoxelVolume, build_culled_mesh};
use strata_world::{CHUNK_SIZE, ChunkCoord, Terrain, WaterSurfaceMap};

pub(crate) const COLUMNS: usize = CHUNK_SIZE * CHUNK_SIZE;

/// Block counts and lake summary for one generated chunk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChunkStats {
    pub histogram: [usize; BlockType::COUNT],
    pub water_columns: usize,
    pub water_height: i32,
}

impl ChunkStats {
    #[inline]
    pub fn count(&self, b: BlockType) -> usize {
        self.histogram[b.code() as usize]
    }

    #[inline]
    pub fn solid(&self) -> usize {
        self.histogram.iter().sum::<usize>() - self.count(BlockType::Air)
    }
}

#[derive(Clone, Debug)]
pub struct Chunk {
    coord: ChunkCoord,
    sy: usize,
    blocks: Vec<u8>,
    stats: ChunkStats,
}

impl Chunk {
    /// Runs both generation passes, publishing this chunk's water surface.
    pub fn generate(coord: ChunkCoord, terrain: &Terrain, water: &mut WaterSurfaceMap) -> Self {
        let plan = ColumnPlan::sample(coord, terrain);
        Self::from_committed(plan.resolve_water_height(water))
    }

    /// Second pass: places blocks column by column.
    pub fn from_committed(plan: CommittedPlan) -> Self {
        let coord = plan.coord();
        let ws = plan.water_height();
        let p = plan.params();
        let sand = p.sand_height_threshold;
        let sy = p.max_height_usize();
        let mut chunk = Chunk {
            coord,
            sy,
            blocks: vec![BlockType::Air.code(); COLUMNS * sy],
            stats: ChunkStats {
                water_height: ws,
                water_columns: plan.plan().water_columns(),
                ..ChunkStats::default()
            },
        };
        for x in 0..CHUNK_SIZE {
            for z in 0..CHUNK_SIZE {
                let col = plan.plan().column(x, z);
                let blended = plan.blended_height(col);
                let bed = ws - LAKE_DEPTH;
                let sand_biome = !col.is_water && blended <= sand;
                for y in 0..sy {
                    let yi = y as i32;
                    let block = if col.is_water {
                        if yi > bed && yi <= ws {
                            BlockType::Water
                        } else if yi <= bed {
                            BlockType::Sand
                        } else {
                            BlockType::Air
                        }
                    } else if sand_biome && yi <= sand {
                        BlockType::Sand
                    } else if yi < blended {
                        BlockType::Stone
                    } else if yi == blended {
                        BlockType::Grass
                    } else {
                        BlockType::Air
                    };
                    let i = chunk.idx(x, y, z);
                    chunk.blocks[i] = block.code();
                    chunk.stats.histogram[block.code() as usize] += 1;
                }
            }
        }
        log::debug!(
            "chunk {}: {} water blocks placed, water surface height {}",
            coord,
            chunk.stats.count(BlockType::Water),
            ws
        );
        chunk
    }

    #[inline]
    fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (y * CHUNK_SIZE + z) * CHUNK_SIZE + x
    }

    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    #[inline]
    pub fn max_height(&self) -> usize {
        self.sy
    }

    #[inline]
    pub fn stats(&self) -> &ChunkStats {
        &self.stats
    }

    #[inline]
    pub fn water_height(&self) -> i32 {
        self.stats.water_height
    }

    /// Block at local `(x, y, z)`; air anywhere outside the grid.
    #[inline]
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockType {
        let s = CHUNK_SIZE as i32;
        if !(0..s).contains(&x) || !(0..s).contains(&z) || y < 0 || y as usize >= self.sy {
            return BlockType::Air;
        }
        BlockType::from_code(self.blocks[self.idx(x as usize, y as usize, z as usize)])
    }

    /// Face-culled mesh; lateral border faces look up neighbours in `world`.
    ///
    /// `world` is only read. Whatever it reports for a neighbouring column
    /// decides the border faces, so a lookup that reads missing chunks as air
    /// leaves extra side faces on the border. Load the four edge neighbours
    /// first to get the seamless mesh.
    pub fn generate_mesh<W: BlockAccess>(&self, world: &W) -> Option<ChunkMesh> {
        build_culled_mesh(self, world)
    }
}

impl VoxelVolume for Chunk {
    #[inline]
    fn coord(&self) -> ChunkCoord {
        self.coord
    }

    #[inline]
    fn height(&self) -> usize {
        self.sy
    }

    #[inline]
    fn local_block(&self, x: usize, y: usize, z: usize) -> BlockType {
        BlockType::from_code(self.blocks[self.idx(x, y, z)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_world::TerrainParams;

    fn generate(coord: ChunkCoord) -> (Chunk, WaterSurfaceMap) {
        let terrain = Terrain::new(TerrainParams::default()).unwrap();
        let mut water = WaterSurfaceMap::new(terrain.params().sand_height_threshold);
        let c = Chunk::generate(coord, &terrain, &mut water);
        (c, water)
    }

    #[test]
    fn out_of_range_reads_air() {
        let (c, _) = generate(ChunkCoord::new(0, 0));
        assert_eq!(c.get_block(-1, 0, 0), BlockType::Air);
        assert_eq!(c.get_block(0, -1, 0), BlockType::Air);
        assert_eq!(c.get_block(16, 0, 0), BlockType::Air);
        assert_eq!(c.get_block(0, 32, 0), BlockType::Air);
        assert_eq!(c.get_block(0, 0, 16), BlockType::Air);
    }

    #[test]
    fn origin_column_is_grass_over_stone() {
        let (c, _) = generate(ChunkCoord::new(0, 0));
        assert_eq!(c.get_block(0, 7, 0), BlockType::Grass);
        assert_eq!(c.get_block(0, 6, 0), BlockType::Stone);
        assert_eq!(c.get_block(0, 0, 0), BlockType::Stone);
        assert_eq!(c.get_block(0, 8, 0), BlockType::Air);
    }

    #[test]
    fn generation_publishes_once() {
        let (c, water) = generate(ChunkCoord::new(2, -1));
        assert_eq!(water.len(), 1);
        assert_eq!(water.published(c.coord()), Some(c.water_height()));
    }

    fn synthetic(columns: Vec<ColumnInfo>, rim: Option<i32>) -> Chunk {
        let plan = ColumnPlan {
            coord: ChunkCoord::new(0, 0),
            params: TerrainParams::default(),
            columns,
            rim,
        };
        let mut water = WaterSurfaceMap::new(6);
        Chunk::from_committed(plan.resolve_water_height(&mut water))
    }

    #[test]
    fn sand_threshold_column_is_sand_to_the_top() {
        let col = ColumnInfo {
            height: 6,
            is_water: false,
            blend: 1.0,
        };
        let c = synthetic(vec![col; COLUMNS], None);
        for y in 0..=6 {
            assert_eq!(c.get_block(3, y, 3), BlockType::Sand, "y={y}");
        }
        for y in 7..32 {
            assert_eq!(c.get_block(3, y, 3), BlockType::Air, "y={y}");
        }
    }

    #[test]
    fn lake_has_water_over_a_sand_bed() {
        let lake = ColumnInfo {
            height: 2,
            is_water: true,
            blend: 0.0,
        };
        let c = synthetic(vec![lake; COLUMNS], Some(5));
        assert_eq!(c.water_height(), 5);
        assert_eq!(c.stats().water_columns, COLUMNS);
        for y in 0..=2 {
            assert_eq!(c.get_block(0, y, 0), BlockType::Sand);
        }
        for y in 3..=5 {
            assert_eq!(c.get_block(0, y, 0), BlockType::Water);
        }
        assert_eq!(c.get_block(0, 6, 0), BlockType::Air);
        assert_eq!(c.stats().count(BlockType::Water), COLUMNS * 3);
    }

    #[test]
    fn shallow_surface_leaves_no_bed() {
        let lake = ColumnInfo {
            height: 0,
            is_water: true,
            blend: 0.0,
        };
        let c = synthetic(vec![lake; COLUMNS], Some(1));
        assert_eq!(c.water_height(), 1);
        assert_eq!(c.get_block(5, 0, 5), BlockType::Water);
        assert_eq!(c.get_block(5, 1, 5), BlockType::Water);
        assert_eq!(c.get_block(5, 2, 5), BlockType::Air);
    }

    #[test]
    fn histogram_covers_the_grid() {
        let (c, _) = generate(ChunkCoord::new(-3, 5));
        let total: usize = c.stats().histogram.iter().sum();
        assert_eq!(total, COLUMNS * c.max_height());
        let counted = (0..16)
            .flat_map(|x| (0..32).flat_map(move |y| (0..16).map(move |z| (x, y, z))))
            .filter(|&(x, y, z)| c.get_block(x, y, z) == BlockType::Water)
            .count();
        assert_eq!(counted, c.stats().count(BlockType::Water));
    }
}
