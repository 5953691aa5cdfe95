use proptest::prelude::*;
use strata_blocks::{AtlasCell, BlockType, FaceRole};

fn role() -> impl Strategy<Value = FaceRole> {
    prop::sample::select(vec![FaceRole::Top, FaceRole::Bottom, FaceRole::Side])
}

proptest! {
    // Stored bytes decode back to the same block for every valid code
    #[test]
    fn code_roundtrip_for_valid_codes(code in 0u8..5) {
        prop_assert_eq!(BlockType::from_code(code).code(), code);
    }

    // Every solid face maps to a rect inside [0,1] with positive width
    #[test]
    fn solid_faces_have_valid_rects(code in 1u8..5, r in role()) {
        let block = BlockType::from_code(code);
        let cell = AtlasCell::for_face(block, r).expect("solid block has a cell");
        let rect = cell.uv_rect();
        prop_assert!(rect.u_min >= 0.0 && rect.u_max <= 1.0);
        prop_assert!(rect.u_max > rect.u_min);
        let corners = rect.corners();
        prop_assert_eq!(corners[0], [rect.u_min, 0.0]);
        prop_assert_eq!(corners[2], [rect.u_max, 1.0]);
    }
}
