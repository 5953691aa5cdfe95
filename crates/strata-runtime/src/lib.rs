//! Chunk cache, mesh lifecycle and window streaming (single-threaded).
#![forbid(unsafe_code)]

mod stream;
mod world;

pub use stream::StreamReport;
pub use world::{World, WorldStats};
