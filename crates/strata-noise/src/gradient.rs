/// Fixed 2D gradient set, indexed by `hash & 7`.
pub const GRADIENTS: [[f64; 2]; 8] = [
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
];

#[inline]
pub fn gradient(hash: usize) -> [f64; 2] {
    GRADIENTS[hash & (GRADIENTS.len() - 1)]
}

/// Dot product of the hashed gradient with the offset `(x, y)`.
#[inline]
pub fn dot(hash: usize, x: f64, y: f64) -> f64 {
    let g = gradient(hash);
    g[0] * x + g[1] * y
}
