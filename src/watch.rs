use std::path::Path;
use std::sync::mpsc;

use notify::{EventKind, RecursiveMode, Watcher};
use strata_runtime::World;
use strata_world::ChunkCoord;

use crate::resolve_config;

/// Streams the window, then regenerates the world on every change to the
/// config file until the watcher goes away. A config that fails to load or
/// validate is logged and the current world kept.
pub fn run(
    world: &mut World,
    config: &Path,
    seed: Option<&str>,
    variant: Option<&str>,
    center: ChunkCoord,
    radius: i32,
) -> Result<(), notify::Error> {
    let (tx, rx) = mpsc::channel::<()>();
    let file_name = config.file_name().map(|n| n.to_os_string());
    let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
        if let Ok(event) = res {
            match event.kind {
                EventKind::Modify(_) | EventKind::Create(_) | EventKind::Any => {
                    let ours = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().map(|n| n.to_os_string()) == file_name);
                    if ours {
                        let _ = tx.send(());
                    }
                }
                _ => {}
            }
        }
    })?;
    // Editors often replace the file, so watch its directory.
    let dir = config
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    log::info!("watching {:?}", config);

    world.stream_window(center, radius);
    while rx.recv().is_ok() {
        // Collapse bursts of events from a single save.
        while rx.try_recv().is_ok() {}
        match resolve_config(Some(config), seed, variant) {
            Ok((_, params)) => match world.regenerate(params) {
                Ok(()) => {
                    world.stream_window(center, radius);
                }
                Err(e) => log::warn!("terrain config rejected: {}", e),
            },
            Err(e) => log::warn!("terrain config reload failed: {}", e),
        }
    }
    Ok(())
}
