use proptest::prelude::*;
use strata_geom::{Aabb, Vec3};

fn inside(b: &Aabb, p: Vec3) -> bool {
    b.min.min(p) == b.min && b.max.max(p) == b.max
}

#[test]
fn axis_constants() {
    assert_eq!(Vec3::X.dot(Vec3::Y), 0.0);
    assert_eq!(Vec3::Z.dot(Vec3::Z), 1.0);
    assert_eq!(-Vec3::Y, Vec3::from_ints(0, -1, 0));
    assert_eq!(Vec3::new(1.0, -2.0, 3.5).to_array(), [1.0, -2.0, 3.5]);
}

#[test]
fn bounds_of_empty_input_is_none() {
    assert!(Aabb::from_points(std::iter::empty()).is_none());
}

#[test]
fn bounds_of_unit_cube_corners() {
    let pts = (0..8).map(|i| Vec3::from_ints(i & 1, (i >> 1) & 1, (i >> 2) & 1));
    let b = Aabb::from_points(pts).unwrap();
    assert_eq!(b.min, Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(b.max, Vec3::new(1.0, 1.0, 1.0));
}

#[test]
fn including_an_inner_point_is_a_no_op() {
    let b = Aabb::new(Vec3::from_ints(-2, 0, -2), Vec3::from_ints(2, 4, 2));
    assert_eq!(b.including(Vec3::new(0.5, 1.0, -1.5)), b);
    let grown = b.including(Vec3::from_ints(3, -1, 0));
    assert_eq!(grown.min, Vec3::from_ints(-2, -1, -2));
    assert_eq!(grown.max, Vec3::from_ints(3, 4, 2));
}

fn small_vec3() -> impl Strategy<Value = Vec3> {
    (-1e4f32..1e4, -1e4f32..1e4, -1e4f32..1e4).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    // Every input point lies inside the computed bounds
    #[test]
    fn bounds_contain_all_points(pts in prop::collection::vec(small_vec3(), 1..32)) {
        let b = Aabb::from_points(pts.iter().copied()).unwrap();
        for p in pts {
            prop_assert!(inside(&b, p));
        }
    }

    // Bounds do not depend on point order
    #[test]
    fn bounds_ignore_order(pts in prop::collection::vec(small_vec3(), 1..16)) {
        let fwd = Aabb::from_points(pts.iter().copied());
        let rev = Aabb::from_points(pts.iter().rev().copied());
        prop_assert_eq!(fwd, rev);
    }
}
