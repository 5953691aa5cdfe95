use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "strata", version, about = "Deterministic voxel terrain generator")]
pub struct Cli {
    /// Terrain config (TOML). Built-in defaults when omitted.
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,
    /// Seed override; must be an integer.
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub seed: Option<String>,
    /// Noise variant override: standard, ridged, billowy or hybrid.
    #[arg(long, global = true)]
    pub variant: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Terrain height and classification of one world column.
    Height {
        #[arg(long, allow_hyphen_values = true)]
        x: i32,
        #[arg(long, allow_hyphen_values = true)]
        z: i32,
    },
    /// Block histogram and water surface of one chunk.
    Chunk(ChunkArgs),
    /// Mesh counts of one chunk.
    Mesh(ChunkArgs),
    /// Generate and mesh the window around a chunk.
    Stream(WindowArgs),
    /// Keep a window streamed and regenerate whenever the config changes.
    Watch(WindowArgs),
}

#[derive(Debug, Args)]
pub struct ChunkArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub cx: i32,
    #[arg(long, allow_hyphen_values = true)]
    pub cz: i32,
}

#[derive(Debug, Args)]
pub struct WindowArgs {
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub center_x: i32,
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub center_z: i32,
    /// Window radius in chunks; `[world] render_distance` when omitted.
    #[arg(long)]
    pub radius: Option<i32>,
}
