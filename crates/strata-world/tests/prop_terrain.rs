use proptest::prelude::*;
use strata_noise::NoiseVariant;
use strata_world::{ChunkCoord, Terrain, TerrainParams, retention_window};

fn variant() -> impl Strategy<Value = NoiseVariant> {
    prop::sample::select(NoiseVariant::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn height_stays_inside_the_grid(
        seed in any::<i64>(),
        wx in -100_000i32..100_000,
        wz in -100_000i32..100_000,
        v in variant(),
        max_height in 2i32..96,
    ) {
        let mut p = TerrainParams::default();
        p.seed = seed;
        p.variant = v;
        p.max_height = max_height;
        p.sand_height_threshold = p.sand_height_threshold.min(max_height - 1);
        let t = Terrain::new(p).unwrap();
        let h = t.terrain_height(wx, wz);
        prop_assert!((0..max_height).contains(&h), "height {} outside 0..{}", h, max_height);
    }

    #[test]
    fn sampling_is_deterministic(seed in any::<i64>(), wx in -50_000i32..50_000, wz in -50_000i32..50_000) {
        let mut p = TerrainParams::default();
        p.seed = seed;
        let a = Terrain::new(p.clone()).unwrap();
        let b = Terrain::new(p).unwrap();
        prop_assert_eq!(a.sample_column(wx, wz), b.sample_column(wx, wz));
    }

    #[test]
    fn blend_is_a_weight(seed in any::<i64>(), wx in -50_000i32..50_000, wz in -50_000i32..50_000) {
        let mut p = TerrainParams::default();
        p.seed = seed;
        let t = Terrain::new(p).unwrap();
        let s = t.sample_column(wx, wz);
        prop_assert!((0.0..=1.0).contains(&s.blend));
        if s.is_water {
            prop_assert_eq!(s.blend, 0.0);
        }
    }

    #[test]
    fn world_column_lands_in_its_chunk(wx in any::<i32>(), wz in any::<i32>()) {
        let c = ChunkCoord::containing(wx, wz);
        let (lx, lz) = ChunkCoord::local_of(wx, wz);
        prop_assert!(lx < strata_world::CHUNK_SIZE && lz < strata_world::CHUNK_SIZE);
        let (bx, bz) = c.base();
        prop_assert_eq!(i64::from(bx) + lx as i64, i64::from(wx));
        prop_assert_eq!(i64::from(bz) + lz as i64, i64::from(wz));
    }

    #[test]
    fn window_size_matches_radius(cx in -1000i32..1000, cz in -1000i32..1000, r in 0i32..6) {
        let w = retention_window(ChunkCoord::new(cx, cz), r);
        let side = (2 * r + 1) as usize;
        prop_assert_eq!(w.len(), side * side);
    }
}

#[test]
fn reseeding_changes_the_field() {
    let a = Terrain::new(TerrainParams::default()).unwrap();
    let mut p = TerrainParams::default();
    p.seed = 12345;
    let b = Terrain::new(p).unwrap();
    let differs = (0..256).any(|i| {
        let wx = i * 5 + 1;
        let wz = 3 - i * 2;
        a.terrain_height(wx, wz) != b.terrain_height(wx, wz)
    });
    assert!(differs);
}
