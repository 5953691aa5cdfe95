//! Terrain parameters, chunk addressing, and world-space terrain sampling.
#![forbid(unsafe_code)]

mod chunk_coord;
mod error;
pub mod params;
pub mod terrain;
pub mod water;
pub mod window;

pub use chunk_coord::ChunkCoord;
pub use error::WorldGenError;
pub use params::{
    TerrainConfig, TerrainParams, load_config_from_path, load_params_from_path, parse_seed,
};
pub use terrain::Terrain;
pub use water::WaterSurfaceMap;
pub use window::retention_window;

/// Horizontal edge length of a chunk, in blocks.
pub const CHUNK_SIZE: usize = 16;
