use serde::Deserialize;
use std::fs;
use std::path::Path;

use strata_noise::{FbmParams, NoiseVariant};

use crate::error::WorldGenError;

const MAX_WORLD_HEIGHT: i32 = 1024;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TerrainConfig {
    #[serde(default)]
    pub noise: Noise,
    #[serde(default)]
    pub height: Height,
    #[serde(default)]
    pub biome: Biome,
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub world: WorldSection,
}

/// Seed as written in the config: a number, or text parsed as one.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum SeedSetting {
    Number(i64),
    Text(String),
}

impl Default for SeedSetting {
    fn default() -> Self {
        SeedSetting::Number(default_seed())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Noise {
    #[serde(default)]
    pub seed: SeedSetting,
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default = "default_octaves")]
    pub octaves: u32,
    #[serde(default = "default_persistence")]
    pub persistence: f64,
    #[serde(default = "default_lacunarity")]
    pub lacunarity: f64,
    #[serde(default = "default_variant")]
    pub variant: String,
}
fn default_seed() -> i64 {
    67890
}
fn default_scale() -> f64 {
    0.078
}
fn default_octaves() -> u32 {
    FbmParams::TERRAIN.octaves()
}
fn default_persistence() -> f64 {
    FbmParams::TERRAIN.persistence()
}
fn default_lacunarity() -> f64 {
    FbmParams::TERRAIN.lacunarity()
}
fn default_variant() -> String {
    NoiseVariant::Standard.to_string()
}
impl Default for Noise {
    fn default() -> Self {
        Self {
            seed: SeedSetting::default(),
            scale: default_scale(),
            octaves: default_octaves(),
            persistence: default_persistence(),
            lacunarity: default_lacunarity(),
            variant: default_variant(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Height {
    #[serde(default = "default_height_scale")]
    pub height_scale: f64,
    #[serde(default = "default_base_height")]
    pub base_height: f64,
    #[serde(default = "default_max_height")]
    pub max_height: i32,
}
fn default_height_scale() -> f64 {
    8.7
}
fn default_base_height() -> f64 {
    3.1
}
fn default_max_height() -> i32 {
    32
}
impl Default for Height {
    fn default() -> Self {
        Self {
            height_scale: default_height_scale(),
            base_height: default_base_height(),
            max_height: default_max_height(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Biome {
    #[serde(default = "default_sand_threshold")]
    pub sand_height_threshold: i32,
    #[serde(default = "default_blend_range")]
    pub blend_range: f64,
}
fn default_sand_threshold() -> i32 {
    6
}
fn default_blend_range() -> f64 {
    2.0
}
impl Default for Biome {
    fn default() -> Self {
        Self {
            sand_height_threshold: default_sand_threshold(),
            blend_range: default_blend_range(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Region {
    #[serde(default = "default_region_scale")]
    pub scale: f64,
    #[serde(default = "default_flat_threshold")]
    pub flat_threshold: f64,
    #[serde(default = "default_flat_height_scale")]
    pub flat_height_scale: f64,
    #[serde(default = "default_mountain_amplifier")]
    pub mountain_amplifier: f64,
    #[serde(default = "default_transition_range")]
    pub transition_range: f64,
}
fn default_region_scale() -> f64 {
    0.005
}
fn default_flat_threshold() -> f64 {
    0.5
}
fn default_flat_height_scale() -> f64 {
    2.0
}
fn default_mountain_amplifier() -> f64 {
    2.0
}
fn default_transition_range() -> f64 {
    0.2
}
impl Default for Region {
    fn default() -> Self {
        Self {
            scale: default_region_scale(),
            flat_threshold: default_flat_threshold(),
            flat_height_scale: default_flat_height_scale(),
            mountain_amplifier: default_mountain_amplifier(),
            transition_range: default_transition_range(),
        }
    }
}

/// Streaming settings; not part of the generated terrain.
#[derive(Clone, Debug, Deserialize)]
pub struct WorldSection {
    #[serde(default = "default_render_distance")]
    pub render_distance: i32,
}
fn default_render_distance() -> i32 {
    4
}
impl Default for WorldSection {
    fn default() -> Self {
        Self {
            render_distance: default_render_distance(),
        }
    }
}

// Flattened snapshot of the config, read by the generator in tight loops.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainParams {
    pub seed: i64,
    pub scale: f64,
    pub fbm: FbmParams,
    pub variant: NoiseVariant,
    pub height_scale: f64,
    pub base_height: f64,
    pub sand_height_threshold: i32,
    pub biome_blend_range: f64,
    pub region_scale: f64,
    pub flat_threshold: f64,
    pub flat_height_scale: f64,
    pub mountain_amplifier: f64,
    pub transition_range: f64,
    pub max_height: i32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            scale: default_scale(),
            fbm: FbmParams::TERRAIN,
            variant: NoiseVariant::Standard,
            height_scale: default_height_scale(),
            base_height: default_base_height(),
            sand_height_threshold: default_sand_threshold(),
            biome_blend_range: default_blend_range(),
            region_scale: default_region_scale(),
            flat_threshold: default_flat_threshold(),
            flat_height_scale: default_flat_height_scale(),
            mountain_amplifier: default_mountain_amplifier(),
            transition_range: default_transition_range(),
            max_height: default_max_height(),
        }
    }
}

/// Parses user-entered seed text. Surrounding whitespace is ignored.
pub fn parse_seed(text: &str) -> Result<i64, WorldGenError> {
    let t = text.trim();
    t.parse::<i64>()
        .map_err(|_| WorldGenError::InvalidSeed(t.to_string()))
}

fn finite(name: &'static str, v: f64) -> Result<(), WorldGenError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(WorldGenError::invalid(name, format!("must be finite, got {v}")))
    }
}

fn positive(name: &'static str, v: f64) -> Result<(), WorldGenError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(WorldGenError::invalid(
            name,
            format!("must be finite and positive, got {v}"),
        ))
    }
}

impl TerrainParams {
    pub fn from_config(cfg: &TerrainConfig) -> Result<Self, WorldGenError> {
        let seed = match &cfg.noise.seed {
            SeedSetting::Number(n) => *n,
            SeedSetting::Text(s) => parse_seed(s)?,
        };
        let params = Self {
            seed,
            scale: cfg.noise.scale,
            fbm: FbmParams::new(cfg.noise.octaves, cfg.noise.persistence, cfg.noise.lacunarity)?,
            variant: cfg.noise.variant.parse()?,
            height_scale: cfg.height.height_scale,
            base_height: cfg.height.base_height,
            sand_height_threshold: cfg.biome.sand_height_threshold,
            biome_blend_range: cfg.biome.blend_range,
            region_scale: cfg.region.scale,
            flat_threshold: cfg.region.flat_threshold,
            flat_height_scale: cfg.region.flat_height_scale,
            mountain_amplifier: cfg.region.mountain_amplifier,
            transition_range: cfg.region.transition_range,
            max_height: cfg.height.max_height,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, WorldGenError> {
        let cfg: TerrainConfig = toml::from_str(s)?;
        Self::from_config(&cfg)
    }

    /// Rejects any setting that would make generation produce NaN or an
    /// unusable grid.
    pub fn validate(&self) -> Result<(), WorldGenError> {
        positive("scale", self.scale)?;
        finite("height_scale", self.height_scale)?;
        finite("base_height", self.base_height)?;
        positive("biome_blend_range", self.biome_blend_range)?;
        positive("region_scale", self.region_scale)?;
        finite("flat_threshold", self.flat_threshold)?;
        finite("flat_height_scale", self.flat_height_scale)?;
        finite("mountain_amplifier", self.mountain_amplifier)?;
        positive("transition_range", self.transition_range)?;
        if !(2..=MAX_WORLD_HEIGHT).contains(&self.max_height) {
            return Err(WorldGenError::invalid(
                "max_height",
                format!("must be within 2..={MAX_WORLD_HEIGHT}, got {}", self.max_height),
            ));
        }
        if !(0..self.max_height).contains(&self.sand_height_threshold) {
            return Err(WorldGenError::invalid(
                "sand_height_threshold",
                format!(
                    "must be within 0..{}, got {}",
                    self.max_height, self.sand_height_threshold
                ),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn max_height_usize(&self) -> usize {
        self.max_height as usize
    }

    /// Upper edge of the sand/grass blend band.
    #[inline]
    pub fn blend_ceiling(&self) -> f64 {
        f64::from(self.sand_height_threshold) + self.biome_blend_range
    }

    #[inline]
    pub fn water_seed(&self) -> i64 {
        self.seed.wrapping_add(1)
    }

    #[inline]
    pub fn region_seed(&self) -> i64 {
        self.seed.wrapping_add(2)
    }
}

pub fn load_config_from_path(path: &Path) -> Result<TerrainConfig, WorldGenError> {
    let s = fs::read_to_string(path).map_err(|source| WorldGenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&s)?)
}

pub fn load_params_from_path(path: &Path) -> Result<TerrainParams, WorldGenError> {
    TerrainParams::from_config(&load_config_from_path(path)?)
}
