use strata_blocks::FaceRole;
use strata_geom::Vec3;

/// Cube faces, in the order the mesher tests them for each voxel.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    PosX = 0,
    NegX = 1,
    PosY = 2,
    NegY = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosX,
        Face::NegX,
        Face::PosY,
        Face::NegY,
        Face::PosZ,
        Face::NegZ,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn normal(self) -> Vec3 {
        match self {
            Face::PosX => Vec3::X,
            Face::NegX => -Vec3::X,
            Face::PosY => Vec3::Y,
            Face::NegY => -Vec3::Y,
            Face::PosZ => Vec3::Z,
            Face::NegZ => -Vec3::Z,
        }
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::PosX => (1, 0, 0),
            Face::NegX => (-1, 0, 0),
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::PosZ => (0, 0, 1),
            Face::NegZ => (0, 0, -1),
        }
    }

    /// Classifies the face into top/bottom/side role for atlas lookup.
    #[inline]
    pub fn role(self) -> FaceRole {
        match self {
            Face::PosY => FaceRole::Top,
            Face::NegY => FaceRole::Bottom,
            _ => FaceRole::Side,
        }
    }

    /// Quad corners for this face of the unit voxel at `(x, y, z)`, in
    /// emission order. Positive faces sit on the far plane of the voxel.
    /// Grid steps wrap at the `i32` range like the world coordinates do.
    pub fn corners(self, x: i32, y: i32, z: i32) -> [Vec3; 4] {
        let (dx, dy, dz) = match self {
            Face::PosX | Face::PosY | Face::PosZ => self.delta(),
            _ => (0, 0, 0),
        };
        let (x, y, z) = (x.wrapping_add(dx), y.wrapping_add(dy), z.wrapping_add(dz));
        let (x1, y1, z1) = (x.wrapping_add(1), y.wrapping_add(1), z.wrapping_add(1));
        let p = Vec3::from_ints;
        match self {
            Face::PosX => [p(x, y, z), p(x, y1, z), p(x, y1, z1), p(x, y, z1)],
            Face::NegX => [p(x, y, z1), p(x, y1, z1), p(x, y1, z), p(x, y, z)],
            Face::PosY => [p(x, y, z1), p(x1, y, z1), p(x1, y, z), p(x, y, z)],
            Face::NegY => [p(x, y, z), p(x1, y, z), p(x1, y, z1), p(x, y, z1)],
            Face::PosZ => [p(x, y, z), p(x1, y, z), p(x1, y1, z), p(x, y1, z)],
            Face::NegZ => [p(x1, y, z), p(x, y, z), p(x, y1, z), p(x1, y1, z)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_declaration_order() {
        for (i, f) in Face::ALL.into_iter().enumerate() {
            assert_eq!(f.index(), i);
        }
    }

    #[test]
    fn normal_matches_delta() {
        for f in Face::ALL {
            let (dx, dy, dz) = f.delta();
            assert_eq!(f.normal(), Vec3::from_ints(dx, dy, dz));
        }
    }

    #[test]
    fn corners_lie_on_the_face_plane() {
        for f in Face::ALL {
            let n = f.normal();
            let c = f.corners(3, 5, -2);
            let plane = c[0].dot(n);
            assert!(c.iter().all(|v| v.dot(n) == plane), "{f:?}");
            // Outward: the plane is the voxel's far side along the normal.
            let center = Vec3::new(3.5, 5.5, -1.5);
            assert!(plane > center.dot(n));
        }
    }

    #[test]
    fn top_face_is_raised_one_unit() {
        let c = Face::PosY.corners(0, 7, 0);
        assert!(c.iter().all(|v| v.y == 8.0));
        let c = Face::NegY.corners(0, 7, 0);
        assert!(c.iter().all(|v| v.y == 7.0));
    }

    #[test]
    fn corners_at_the_coordinate_limit_wrap() {
        let c = Face::PosX.corners(i32::MAX, 0, i32::MAX);
        assert!(c.iter().all(|v| v.x == i32::MIN as f32));
        assert_eq!(c[2].z, i32::MIN as f32);
    }
}
