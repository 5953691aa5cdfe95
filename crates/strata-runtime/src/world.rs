use hashbrown::HashMap;

use strata_blocks::BlockType;
use strata_chunk::Chunk;
use strata_mesh_cpu::{BlockAccess, ChunkMesh};
use strata_world::{ChunkCoord, Terrain, TerrainParams, WaterSurfaceMap, WorldGenError};

#[derive(Clone, Debug, Default)]
enum MeshSlot {
    #[default]
    Unbuilt,
    Empty,
    Built(ChunkMesh),
}

#[derive(Debug)]
struct ChunkEntry {
    chunk: Chunk,
    mesh: MeshSlot,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorldStats {
    pub chunks: usize,
    pub meshed: usize,
    pub water_entries: usize,
    pub revision: u64,
}

/// Owns every generated chunk, their meshes and the shared water surfaces.
///
/// Chunks are generated on first request and kept until [`World::evict`] or
/// [`World::regenerate`]. Lookups through [`BlockAccess`] only read chunks
/// that already exist; anything else reads as air.
#[derive(Debug)]
pub struct World {
    terrain: Terrain,
    chunks: HashMap<ChunkCoord, ChunkEntry>,
    water: WaterSurfaceMap,
    rev: u64,
}

/// Neighbours a chunk's mesh reads across its border, in the order a full
/// voxel scan first touches them.
const MESH_NEIGHBORS: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

impl World {
    pub fn new(params: TerrainParams) -> Result<Self, WorldGenError> {
        let terrain = Terrain::new(params)?;
        let water = WaterSurfaceMap::new(terrain.params().sand_height_threshold);
        Ok(Self {
            terrain,
            chunks: HashMap::new(),
            water,
            rev: 0,
        })
    }

    /// Replaces the parameters and drops every cached chunk, mesh and water
    /// surface. On error the current world is left untouched.
    pub fn regenerate(&mut self, params: TerrainParams) -> Result<(), WorldGenError> {
        let terrain = Terrain::new(params)?;
        let dropped = self.chunks.len();
        self.water = WaterSurfaceMap::new(terrain.params().sand_height_threshold);
        self.chunks = HashMap::new();
        self.terrain = terrain;
        self.rev += 1;
        log::info!(
            "world regenerated: seed={} variant={} rev={} ({} chunks dropped)",
            self.terrain.params().seed,
            self.terrain.params().variant,
            self.rev,
            dropped
        );
        Ok(())
    }

    #[inline]
    pub fn params(&self) -> &TerrainParams {
        self.terrain.params()
    }

    #[inline]
    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    #[inline]
    pub fn revision(&self) -> u64 {
        self.rev
    }

    #[inline]
    pub fn terrain_height(&self, wx: i32, wz: i32) -> i32 {
        self.terrain.terrain_height(wx, wz)
    }

    #[inline]
    pub fn water_surface_height(&self, coord: ChunkCoord) -> i32 {
        self.water.get(coord)
    }

    fn entry(&mut self, coord: ChunkCoord) -> &mut ChunkEntry {
        let terrain = &self.terrain;
        let water = &mut self.water;
        self.chunks.entry(coord).or_insert_with(|| ChunkEntry {
            chunk: Chunk::generate(coord, terrain, water),
            mesh: MeshSlot::Unbuilt,
        })
    }

    /// Chunk at `(cx, cz)`, generating it on first access.
    pub fn get_chunk(&mut self, cx: i32, cz: i32) -> &Chunk {
        &self.entry(ChunkCoord::new(cx, cz)).chunk
    }

    /// Chunk at `coord` if it has been generated.
    #[inline]
    pub fn peek_chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord).map(|e| &e.chunk)
    }

    #[inline]
    pub fn is_loaded(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    /// Block at world `(wx, wy, wz)`, generating its chunk if needed.
    pub fn get_block(&mut self, wx: i32, wy: i32, wz: i32) -> BlockType {
        let coord = ChunkCoord::containing(wx, wz);
        let (lx, lz) = ChunkCoord::local_of(wx, wz);
        self.entry(coord).chunk.get_block(lx as i32, wy, lz as i32)
    }

    /// Builds the mesh of `coord` once, generating the chunk and the four
    /// chunks its border faces read. `None` when no face is visible.
    pub fn ensure_mesh(&mut self, coord: ChunkCoord) -> Option<&ChunkMesh> {
        self.entry(coord);
        let needs_build = self
            .chunks
            .get(&coord)
            .is_some_and(|e| matches!(e.mesh, MeshSlot::Unbuilt));
        if needs_build {
            for (dx, dz) in MESH_NEIGHBORS {
                self.entry(coord.offset(dx, dz));
            }
            let built = self
                .chunks
                .get(&coord)
                .and_then(|e| e.chunk.generate_mesh(&*self));
            if let Some(e) = self.chunks.get_mut(&coord) {
                e.mesh = match built {
                    Some(m) => MeshSlot::Built(m),
                    None => MeshSlot::Empty,
                };
            }
        }
        self.mesh(coord)
    }

    #[inline]
    pub fn mesh(&self, coord: ChunkCoord) -> Option<&ChunkMesh> {
        match &self.chunks.get(&coord)?.mesh {
            MeshSlot::Built(m) => Some(m),
            MeshSlot::Unbuilt | MeshSlot::Empty => None,
        }
    }

    #[inline]
    pub fn has_mesh(&self, coord: ChunkCoord) -> bool {
        self.chunks
            .get(&coord)
            .is_some_and(|e| !matches!(e.mesh, MeshSlot::Unbuilt))
    }

    /// Drops the mesh of `coord` but keeps its voxels. Returns whether a
    /// mesh (possibly empty) was held.
    pub fn release_mesh(&mut self, coord: ChunkCoord) -> bool {
        match self.chunks.get_mut(&coord) {
            Some(e) => !matches!(std::mem::take(&mut e.mesh), MeshSlot::Unbuilt),
            None => false,
        }
    }

    /// Forgets the chunk at `coord`. Its published water surface stays so a
    /// later regeneration of the chunk lines up with its neighbours.
    pub fn evict(&mut self, coord: ChunkCoord) -> bool {
        self.chunks.remove(&coord).is_some()
    }

    pub(crate) fn meshed_coords(&self) -> Vec<ChunkCoord> {
        self.chunks
            .iter()
            .filter(|(_, e)| !matches!(e.mesh, MeshSlot::Unbuilt))
            .map(|(c, _)| *c)
            .collect()
    }

    pub fn stats(&self) -> WorldStats {
        WorldStats {
            chunks: self.chunks.len(),
            meshed: self
                .chunks
                .values()
                .filter(|e| matches!(e.mesh, MeshSlot::Built(_)))
                .count(),
            water_entries: self.water.len(),
            revision: self.rev,
        }
    }
}

/// Read-only lookup over loaded chunks. Unlike [`World::get_block`] it never
/// generates, so columns of chunks that are not loaded read as air.
/// [`World::ensure_mesh`] loads the border neighbours before meshing.
impl BlockAccess for World {
    fn block_at(&self, wx: i32, wy: i32, wz: i32) -> BlockType {
        let coord = ChunkCoord::containing(wx, wz);
        let (lx, lz) = ChunkCoord::local_of(wx, wz);
        match self.peek_chunk(coord) {
            Some(c) => c.get_block(lx as i32, wy, lz as i32),
            None => BlockType::Air,
        }
    }
}
