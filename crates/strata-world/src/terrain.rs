//! World-space terrain sampling.
//!
//! [`Terrain`] owns the three long-lived FBM engines (terrain, lake mask and
//! region) and answers per-column questions without touching any chunk
//! state, so neighbouring chunks can sample each other's columns freely.

use strata_noise::{Fbm, FbmParams, NoiseVariant};

use crate::error::WorldGenError;
use crate::params::TerrainParams;

/// FBM output above this marks a column (or region) as water.
pub const WATER_MASK_THRESHOLD: f64 = 0.6;
/// Primitive scale of the lake mask noise.
pub const WATER_NOISE_SCALE: f64 = 0.04;

#[inline]
fn to_unit(v: f64) -> f64 {
    (v + 1.0) / 2.0
}

#[inline]
fn lerp_clamped(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Squared cubic smoothstep on a clamped input; flatter near both ends.
#[inline]
pub fn quartic_smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let s = t * t * (3.0 - 2.0 * t);
    s * s
}

/// Per-column answers gathered in one call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnSample {
    pub height: i32,
    pub is_water: bool,
    pub blend: f64,
}

#[derive(Clone, Debug)]
pub struct Terrain {
    params: TerrainParams,
    terrain: Fbm,
    water: Fbm,
    region: Fbm,
}

impl Terrain {
    pub fn new(params: TerrainParams) -> Result<Self, WorldGenError> {
        params.validate()?;
        log::debug!(
            "terrain sampler seed={} variant={} scale={}",
            params.seed,
            params.variant,
            params.scale
        );
        Ok(Self {
            terrain: Fbm::with_seed(params.seed, params.scale),
            water: Fbm::with_seed(params.water_seed(), WATER_NOISE_SCALE),
            region: Fbm::with_seed(params.region_seed(), params.region_scale),
            params,
        })
    }

    #[inline]
    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Low-frequency region field in `[0, 1]`; low is flat land, high is mountains.
    pub fn region_value(&self, wx: i32, wz: i32) -> f64 {
        self.region.generate(
            f64::from(wx),
            f64::from(wz),
            &FbmParams::REGION,
            NoiseVariant::Standard,
        )
    }

    /// Whether the region field (sampled with lake-mask octaves) is wet enough
    /// to suppress mountain amplification.
    fn is_region_water(&self, wx: i32, wz: i32) -> bool {
        self.region.generate(
            f64::from(wx),
            f64::from(wz),
            &FbmParams::WATER,
            NoiseVariant::Standard,
        ) > WATER_MASK_THRESHOLD
    }

    /// Height scale after the flat/mountain region blend, for a column whose
    /// unmodulated surface sits at `base`.
    pub fn region_height_scale(&self, wx: i32, wz: i32, base: i32) -> f64 {
        let p = &self.params;
        if self.is_region_water(wx, wz) || f64::from(base) <= p.blend_ceiling() {
            return p.height_scale;
        }
        let mountain = p.height_scale * p.mountain_amplifier;
        let start = p.flat_threshold - p.transition_range / 2.0;
        let end = p.flat_threshold + p.transition_range / 2.0;
        let region = self.region_value(wx, wz);
        if region < start {
            p.flat_height_scale
        } else if region > end {
            mountain
        } else {
            let t = quartic_smoothstep((region - start) / p.transition_range);
            lerp_clamped(p.flat_height_scale, mountain, t)
        }
    }

    /// Surface height of the column at `(wx, wz)`, within `[0, max_height - 1]`.
    pub fn terrain_height(&self, wx: i32, wz: i32) -> i32 {
        let p = &self.params;
        let v = self
            .terrain
            .generate(f64::from(wx), f64::from(wz), &p.fbm, p.variant);
        // The engine output is already in [0, 1]; the second fold into the
        // upper half is part of the terrain shape.
        let n = to_unit(v);
        let base = (n * p.height_scale + p.base_height).floor() as i32;
        let scale = self.region_height_scale(wx, wz, base);
        let h = (n * scale + p.base_height).floor() as i32;
        h.clamp(0, p.max_height - 1)
    }

    /// Lake mask for the column at `(wx, wz)`.
    pub fn is_water_column(&self, wx: i32, wz: i32) -> bool {
        self.water.generate(
            f64::from(wx),
            f64::from(wz),
            &FbmParams::WATER,
            NoiseVariant::Standard,
        ) > WATER_MASK_THRESHOLD
    }

    /// Grass weight in `[0, 1]` for the sand/grass transition; 0 on water.
    pub fn blend_factor(&self, wx: i32, wz: i32, is_water: bool) -> f64 {
        if is_water {
            return 0.0;
        }
        let p = &self.params;
        let v = self.terrain.generate(
            f64::from(wx),
            f64::from(wz),
            &FbmParams::TERRAIN,
            p.variant,
        );
        let b = f64::from((to_unit(v) * p.height_scale + p.base_height).floor() as i32);
        if b <= p.blend_ceiling() {
            let sand = f64::from(p.sand_height_threshold);
            ((b - (sand - p.biome_blend_range / 2.0)) / p.biome_blend_range).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    pub fn sample_column(&self, wx: i32, wz: i32) -> ColumnSample {
        let is_water = self.is_water_column(wx, wz);
        ColumnSample {
            height: self.terrain_height(wx, wz),
            is_water,
            blend: self.blend_factor(wx, wz, is_water),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terrain() -> Terrain {
        Terrain::new(TerrainParams::default()).unwrap()
    }

    #[test]
    fn origin_height_is_pinned() {
        // All noise is zero on the lattice origin: n = 0.75, base = 9, the
        // region sits mid-transition and the smoothed scale is 5.85.
        assert_eq!(terrain().terrain_height(0, 0), 7);
    }

    #[test]
    fn heights_are_pinned_off_the_lattice() {
        let t = terrain();
        assert_eq!(t.terrain_height(-17, 40), 4);
        assert_eq!(t.terrain_height(100, -3), 8);
    }

    #[test]
    fn origin_is_dry_grass() {
        let t = terrain();
        assert!(!t.is_water_column(0, 0));
        assert_eq!(t.blend_factor(0, 0, false), 1.0);
        assert_eq!(t.blend_factor(0, 0, true), 0.0);
    }

    #[test]
    fn smoothstep_endpoints_and_midpoint() {
        assert_eq!(quartic_smoothstep(-1.0), 0.0);
        assert_eq!(quartic_smoothstep(0.0), 0.0);
        assert_eq!(quartic_smoothstep(0.5), 0.25);
        assert_eq!(quartic_smoothstep(1.0), 1.0);
        assert_eq!(quartic_smoothstep(3.0), 1.0);
    }

    #[test]
    fn low_columns_keep_the_base_scale() {
        let t = terrain();
        let p = t.params().clone();
        assert_eq!(t.region_height_scale(0, 0, 0), p.height_scale);
        assert_eq!(
            t.region_height_scale(0, 0, p.sand_height_threshold + 2),
            p.height_scale
        );
    }

    #[test]
    fn height_is_clamped_to_the_grid() {
        let mut p = TerrainParams::default();
        p.height_scale = 500.0;
        p.base_height = 100.0;
        p.max_height = 16;
        let t = Terrain::new(p).unwrap();
        for wx in -20..20 {
            assert_eq!(t.terrain_height(wx * 7, wx * 3), 15);
        }

        let mut p = TerrainParams::default();
        p.base_height = -100.0;
        let t = Terrain::new(p).unwrap();
        assert_eq!(t.terrain_height(5, 9), 0);
    }

    #[test]
    fn invalid_params_are_rejected() {
        let mut p = TerrainParams::default();
        p.transition_range = 0.0;
        assert!(Terrain::new(p).is_err());
    }

    #[test]
    fn sample_column_agrees_with_parts() {
        let t = terrain();
        for (wx, wz) in [(3, 4), (-17, 40), (100, -3)] {
            let s = t.sample_column(wx, wz);
            assert_eq!(s.height, t.terrain_height(wx, wz));
            assert_eq!(s.is_water, t.is_water_column(wx, wz));
            assert_eq!(s.blend, t.blend_factor(wx, wz, s.is_water));
        }
    }
}
