//! Seeded 2D gradient noise and fractal (FBM) summation.
#![forbid(unsafe_code)]

mod error;
pub mod fbm;
pub mod gradient;
pub mod lcg;
pub mod permutation;
pub mod perlin;

pub use error::NoiseError;
pub use fbm::{Fbm, FbmParams, NoiseVariant};
pub use perlin::PerlinNoise;
