//! Face-culled CPU meshing of chunk voxel grids.
#![forbid(unsafe_code)]

mod face;
mod mesh_build;

pub use face::Face;
pub use mesh_build::ChunkMesh;

use strata_blocks::{AtlasCell, BlockType};
use strata_world::{CHUNK_SIZE, ChunkCoord};

/// World-space voxel lookups used for faces on a chunk's lateral border.
pub trait BlockAccess {
    fn block_at(&self, wx: i32, wy: i32, wz: i32) -> BlockType;
}

impl<F> BlockAccess for F
where
    F: Fn(i32, i32, i32) -> BlockType,
{
    #[inline]
    fn block_at(&self, wx: i32, wy: i32, wz: i32) -> BlockType {
        self(wx, wy, wz)
    }
}

/// A `CHUNK_SIZE x height x CHUNK_SIZE` column of voxels.
pub trait VoxelVolume {
    fn coord(&self) -> ChunkCoord;
    fn height(&self) -> usize;
    fn local_block(&self, x: usize, y: usize, z: usize) -> BlockType;
}

/// Neighbour of local `(x, y, z)` across `face`. Voxels above or below the
/// grid are air; lateral steps out of the chunk go through `world`.
#[inline]
fn neighbor<V: VoxelVolume, W: BlockAccess>(
    vol: &V,
    world: &W,
    face: Face,
    x: usize,
    y: usize,
    z: usize,
) -> BlockType {
    let (dx, dy, dz) = face.delta();
    let ny = y as i32 + dy;
    if ny < 0 || ny >= vol.height() as i32 {
        return BlockType::Air;
    }
    let nx = x as i32 + dx;
    let nz = z as i32 + dz;
    let s = CHUNK_SIZE as i32;
    if (0..s).contains(&nx) && (0..s).contains(&nz) {
        return vol.local_block(nx as usize, ny as usize, nz as usize);
    }
    let (wx, wz) = vol.coord().world_column(nx, nz);
    world.block_at(wx, ny, wz)
}

/// Emits one quad for every face of a non-air voxel whose neighbour is air.
/// Returns `None` when no face is visible.
pub fn build_culled_mesh<V: VoxelVolume, W: BlockAccess>(vol: &V, world: &W) -> Option<ChunkMesh> {
    let coord = vol.coord();
    let mut mesh = ChunkMesh::new(coord);
    mesh.reserve_quads(CHUNK_SIZE * CHUNK_SIZE * 2);
    for x in 0..CHUNK_SIZE {
        for y in 0..vol.height() {
            for z in 0..CHUNK_SIZE {
                let block = vol.local_block(x, y, z);
                if block.is_air() {
                    continue;
                }
                let (wx, wz) = coord.world_column(x as i32, z as i32);
                let wy = y as i32;
                for face in Face::ALL {
                    if !neighbor(vol, world, face, x, y, z).is_air() {
                        continue;
                    }
                    let Some(cell) = AtlasCell::for_face(block, face.role()) else {
                        continue;
                    };
                    mesh.add_face(face, wx, wy, wz, cell.uv_rect(), block.alpha());
                }
            }
        }
    }
    if mesh.is_empty() {
        log::warn!("empty mesh for chunk {}", coord);
        return None;
    }
    log::trace!(
        "mesh chunk {}: {} quads, {} vertices",
        coord,
        mesh.quad_count(),
        mesh.vertex_count()
    );
    Some(mesh)
}
