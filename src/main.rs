#![forbid(unsafe_code)]

mod cli;
mod watch;

use std::error::Error;
use std::path::Path;

use clap::Parser;
use strata_blocks::BlockType;
use strata_runtime::World;
use strata_world::{
    ChunkCoord, TerrainConfig, TerrainParams, WorldGenError, load_config_from_path, parse_seed,
};

use crate::cli::{Cli, Command, WindowArgs};

/// Reads the config (or defaults) and applies the command-line overrides.
pub(crate) fn resolve_config(
    path: Option<&Path>,
    seed: Option<&str>,
    variant: Option<&str>,
) -> Result<(TerrainConfig, TerrainParams), WorldGenError> {
    let cfg = match path {
        Some(p) => load_config_from_path(p)?,
        None => TerrainConfig::default(),
    };
    let mut params = TerrainParams::from_config(&cfg)?;
    if let Some(s) = seed {
        params.seed = parse_seed(s)?;
    }
    if let Some(v) = variant {
        params.variant = v.parse()?;
    }
    Ok((cfg, params))
}

fn window(cfg: &TerrainConfig, args: &WindowArgs) -> (ChunkCoord, i32) {
    (
        ChunkCoord::new(args.center_x, args.center_z),
        args.radius.unwrap_or(cfg.world.render_distance),
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let (cfg, params) = resolve_config(
        cli.config.as_deref(),
        cli.seed.as_deref(),
        cli.variant.as_deref(),
    )?;
    log::info!("seed={} variant={}", params.seed, params.variant);
    let mut world = World::new(params)?;

    match cli.command {
        Command::Height { x, z } => {
            let t = world.terrain();
            let s = t.sample_column(x, z);
            println!("column ({x}, {z})");
            println!("  height      {}", s.height);
            println!("  water       {}", s.is_water);
            println!("  grass blend {:.3}", s.blend);
            println!("  region      {:.3}", t.region_value(x, z));
        }
        Command::Chunk(a) => {
            let chunk = world.get_chunk(a.cx, a.cz);
            let stats = chunk.stats();
            println!("chunk {}", chunk.coord());
            println!("  water surface {}", stats.water_height);
            println!("  water columns {}", stats.water_columns);
            for b in BlockType::ALL {
                println!("  {:<6} {}", b.name(), stats.count(b));
            }
        }
        Command::Mesh(a) => {
            let coord = ChunkCoord::new(a.cx, a.cz);
            match world.ensure_mesh(coord) {
                Some(m) => {
                    println!("mesh {coord}");
                    println!("  quads     {}", m.quad_count());
                    println!("  vertices  {}", m.vertex_count());
                    println!("  triangles {}", m.triangle_count());
                    if let Some(b) = m.bounds() {
                        println!(
                            "  bounds    ({}, {}, {}) .. ({}, {}, {})",
                            b.min.x, b.min.y, b.min.z, b.max.x, b.max.y, b.max.z
                        );
                    }
                }
                None => println!("mesh {coord}: empty"),
            }
        }
        Command::Stream(a) => {
            let (center, radius) = window(&cfg, &a);
            let r = world.stream_window(center, radius);
            let s = world.stats();
            println!(
                "window {} r={}: {} generated, {} meshed, {} empty in {}ms",
                r.center, r.radius, r.generated, r.meshed, r.empty, r.t_total_ms
            );
            println!(
                "world: {} chunks, {} meshes, {} water surfaces",
                s.chunks, s.meshed, s.water_entries
            );
        }
        Command::Watch(a) => {
            let Some(path) = cli.config.as_deref() else {
                return Err("watch needs --config".into());
            };
            let (center, radius) = window(&cfg, &a);
            watch::run(
                &mut world,
                path,
                cli.seed.as_deref(),
                cli.variant.as_deref(),
                center,
                radius,
            )?;
        }
    }
    Ok(())
}
