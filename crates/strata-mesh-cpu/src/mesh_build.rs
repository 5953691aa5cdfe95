use strata_blocks::UvRect;
use strata_geom::{Aabb, Vec3};
use strata_world::ChunkCoord;

use crate::face::Face;

/// Parallel vertex arrays for one chunk, ready for upload.
///
/// Per vertex: 3 position floats, 2 UV floats, 3 normal floats and 1 alpha.
/// Every quad adds 4 vertices and 6 indices.
#[derive(Clone, Debug, PartialEq)]
pub struct ChunkMesh {
    pub coord: ChunkCoord,
    pub positions: Vec<f32>,
    pub uvs: Vec<f32>,
    pub normals: Vec<f32>,
    pub alphas: Vec<f32>,
    pub indices: Vec<u32>,
    bbox: Option<Aabb>,
}

impl ChunkMesh {
    pub fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            positions: Vec::new(),
            uvs: Vec::new(),
            normals: Vec::new(),
            alphas: Vec::new(),
            indices: Vec::new(),
            bbox: None,
        }
    }

    /// Pre-reserve capacity for approximately `n_quads` quads worth of data.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        self.positions.reserve(n_quads * 4 * 3);
        self.normals.reserve(n_quads * 4 * 3);
        self.uvs.reserve(n_quads * 4 * 2);
        self.alphas.reserve(n_quads * 4);
        self.indices.reserve(n_quads * 6);
    }

    /// Appends one face of the voxel at world `(x, y, z)`.
    pub fn add_face(&mut self, face: Face, x: i32, y: i32, z: i32, uv: UvRect, alpha: f32) {
        let base = self.vertex_count() as u32;
        let n = face.normal();
        let corners = face.corners(x, y, z);
        for (p, t) in corners.iter().zip(uv.corners()) {
            self.positions.extend_from_slice(&p.to_array());
            self.normals.extend_from_slice(&n.to_array());
            self.uvs.extend_from_slice(&t);
            self.alphas.push(alpha);
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        let quad = Aabb::from_points(corners);
        self.bbox = match (self.bbox, quad) {
            (Some(b), Some(q)) => Some(b.including(q.min).including(q.max)),
            (None, q) => q,
            (b, None) => b,
        };
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.alphas.len()
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.vertex_count() / 4
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Bounds of every emitted vertex; `None` while empty.
    #[inline]
    pub fn bounds(&self) -> Option<Aabb> {
        self.bbox
    }

    /// Position of vertex `i`.
    pub fn position(&self, i: usize) -> Option<Vec3> {
        let p = self.positions.get(i * 3..i * 3 + 3)?;
        Some(Vec3::new(p[0], p[1], p[2]))
    }
}
