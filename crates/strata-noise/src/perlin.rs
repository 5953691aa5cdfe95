use crate::gradient;
use crate::permutation::PermutationTable;

/// Classic 2D gradient noise over a seeded permutation table.
///
/// Output lies in `[-1, 1]`. The cell hashing order, the quintic fade curve
/// and the 8-entry gradient set are fixed; changing any of them changes every
/// world generated from a given seed.
///
/// Lattice cells are taken from the floor saturated to the `i32` range, so
/// past `|x * scale| >= 2^31` every input hashes into the boundary cell.
#[derive(Clone, Debug)]
pub struct PerlinNoise {
    perm: PermutationTable,
    scale: f64,
}

#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

impl PerlinNoise {
    pub fn new(seed: i64, scale: f64) -> Self {
        log::debug!("perlin noise seed={} scale={}", seed, scale);
        Self {
            perm: PermutationTable::new(seed),
            scale,
        }
    }

    pub fn noise(&self, x: f64, y: f64) -> f64 {
        let x = x * self.scale;
        let y = y * self.scale;

        let fx = x.floor();
        let fy = y.floor();
        let xi = (fx as i32 & 255) as usize;
        let yi = (fy as i32 & 255) as usize;
        let xf = x - fx;
        let yf = y - fy;

        let u = fade(xf);
        let v = fade(yf);

        let p = &self.perm;
        let aa = p.get(p.get(xi) + yi);
        let ab = p.get(p.get(xi) + yi + 1);
        let ba = p.get(p.get(xi + 1) + yi);
        let bb = p.get(p.get(xi + 1) + yi + 1);

        let g00 = gradient::dot(aa, xf, yf);
        let g10 = gradient::dot(ba, xf - 1.0, yf);
        let g01 = gradient::dot(ab, xf, yf - 1.0);
        let g11 = gradient::dot(bb, xf - 1.0, yf - 1.0);

        let x1 = lerp(g00, g10, u);
        let x2 = lerp(g01, g11, u);
        lerp(x1, x2, v)
    }
}
