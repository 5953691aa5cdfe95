//! Fractal Brownian motion over a [`PerlinNoise`] primitive.
//!
//! All four variants walk the same octave ladder (frequency starts at 1 and
//! grows by `lacunarity`, amplitude starts at 1 and decays by `persistence`)
//! and differ only in how each octave sample is folded into the sum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NoiseError;
use crate::perlin::PerlinNoise;

/// Octave settings for one FBM evaluation. Only constructible with
/// `octaves >= 1` and finite, positive rates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FbmParams {
    octaves: u32,
    persistence: f64,
    lacunarity: f64,
}

impl FbmParams {
    /// Main terrain defaults (also used for the biome blend sample).
    pub const TERRAIN: FbmParams = FbmParams {
        octaves: 5,
        persistence: 0.5,
        lacunarity: 2.6,
    };
    /// Lake mask.
    pub const WATER: FbmParams = FbmParams {
        octaves: 4,
        persistence: 0.4,
        lacunarity: 2.0,
    };
    /// Low-frequency flat/mountain region field.
    pub const REGION: FbmParams = FbmParams {
        octaves: 3,
        persistence: 0.5,
        lacunarity: 2.0,
    };

    pub fn new(octaves: u32, persistence: f64, lacunarity: f64) -> Result<Self, NoiseError> {
        if octaves == 0 {
            return Err(NoiseError::invalid("octaves", "must be at least 1"));
        }
        if !persistence.is_finite() || persistence <= 0.0 {
            return Err(NoiseError::invalid(
                "persistence",
                format!("must be finite and positive, got {persistence}"),
            ));
        }
        if !lacunarity.is_finite() || lacunarity <= 0.0 {
            return Err(NoiseError::invalid(
                "lacunarity",
                format!("must be finite and positive, got {lacunarity}"),
            ));
        }
        Ok(Self {
            octaves,
            persistence,
            lacunarity,
        })
    }

    #[inline]
    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    #[inline]
    pub fn persistence(&self) -> f64 {
        self.persistence
    }

    #[inline]
    pub fn lacunarity(&self) -> f64 {
        self.lacunarity
    }

    /// `(frequency, amplitude)` per octave, by repeated multiplication.
    fn ladder(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        std::iter::successors(Some((1.0f64, 1.0f64)), move |&(f, a)| {
            Some((f * self.lacunarity, a * self.persistence))
        })
        .take(self.octaves as usize)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseVariant {
    #[default]
    Standard,
    Ridged,
    Billowy,
    Hybrid,
}

impl NoiseVariant {
    pub const ALL: [NoiseVariant; 4] = [
        NoiseVariant::Standard,
        NoiseVariant::Ridged,
        NoiseVariant::Billowy,
        NoiseVariant::Hybrid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NoiseVariant::Standard => "standard",
            NoiseVariant::Ridged => "ridged",
            NoiseVariant::Billowy => "billowy",
            NoiseVariant::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for NoiseVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NoiseVariant {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        NoiseVariant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| NoiseError::UnknownVariant(key.to_string()))
    }
}

#[inline]
fn to_unit(v: f64) -> f64 {
    (v + 1.0) / 2.0
}

/// FBM engine bound to one noise primitive.
#[derive(Clone, Debug)]
pub struct Fbm {
    noise: PerlinNoise,
}

impl Fbm {
    pub fn new(noise: PerlinNoise) -> Self {
        Self { noise }
    }

    pub fn with_seed(seed: i64, scale: f64) -> Self {
        Self::new(PerlinNoise::new(seed, scale))
    }

    #[inline]
    pub fn noise(&self) -> &PerlinNoise {
        &self.noise
    }

    /// Evaluates `variant` at `(x, y)`; the result is always within `[0, 1]`.
    pub fn generate(&self, x: f64, y: f64, params: &FbmParams, variant: NoiseVariant) -> f64 {
        let v = match variant {
            NoiseVariant::Standard => to_unit(self.standard_sum(x, y, params)),
            NoiseVariant::Ridged => self.ridged(x, y, params),
            NoiseVariant::Billowy => self.billowy(x, y, params),
            NoiseVariant::Hybrid => to_unit(self.hybrid_sum(x, y, params)),
        };
        v.clamp(0.0, 1.0)
    }

    #[inline]
    fn sample(&self, x: f64, y: f64, freq: f64) -> f64 {
        self.noise.noise(x * freq, y * freq)
    }

    /// Plain weighted sum; roughly `[-1, 1]` before normalisation.
    pub fn standard_sum(&self, x: f64, y: f64, params: &FbmParams) -> f64 {
        params
            .ladder()
            .fold(0.0, |total, (f, a)| total + self.sample(x, y, f) * a)
    }

    /// `1 - |n|` per octave, self-modulated, amplitude-normalised.
    pub fn ridged(&self, x: f64, y: f64, params: &FbmParams) -> f64 {
        let mut total = 0.0;
        let mut max_amp = 0.0;
        let mut weight = 1.0f64;
        for (f, a) in params.ladder() {
            let n = (1.0 - self.sample(x, y, f).abs()) * weight;
            weight = (n * 2.0).min(1.0);
            total += n * a;
            max_amp += a;
        }
        total / max_amp
    }

    /// `|n|` per octave, amplitude-normalised.
    pub fn billowy(&self, x: f64, y: f64, params: &FbmParams) -> f64 {
        let mut total = 0.0;
        let mut max_amp = 0.0;
        for (f, a) in params.ladder() {
            total += self.sample(x, y, f).abs() * a;
            max_amp += a;
        }
        total / max_amp
    }

    /// Raw first octave, then ridged-style weighting on signed samples.
    pub fn hybrid_sum(&self, x: f64, y: f64, params: &FbmParams) -> f64 {
        let mut total = 0.0;
        let mut weight = 1.0f64;
        for (i, (f, a)) in params.ladder().enumerate() {
            let raw = self.sample(x, y, f);
            if i == 0 {
                total = raw * a;
                continue;
            }
            let n = raw * weight;
            weight = (n * 2.0).min(1.0);
            total += n * a;
        }
        total
    }
}
