use crate::lcg::Lcg48;

pub const TABLE_SIZE: usize = 256;
const EXTENDED_SIZE: usize = TABLE_SIZE * 2;
const INDEX_MASK: usize = TABLE_SIZE - 1;

/// Seeded permutation of `[0, 256)`, stored twice back to back.
#[derive(Clone)]
pub struct PermutationTable {
    table: [u8; EXTENDED_SIZE],
}

impl PermutationTable {
    pub fn new(seed: i64) -> Self {
        let mut base = [0u8; TABLE_SIZE];
        for (i, slot) in base.iter_mut().enumerate() {
            *slot = i as u8;
        }
        // Fisher-Yates, walking down from the last slot.
        let mut rng = Lcg48::new(seed);
        for i in (1..TABLE_SIZE).rev() {
            let j = rng.next_below(i as i32 + 1) as usize;
            base.swap(i, j);
        }
        let mut table = [0u8; EXTENDED_SIZE];
        table[..TABLE_SIZE].copy_from_slice(&base);
        table[TABLE_SIZE..].copy_from_slice(&base);
        Self { table }
    }

    /// Looks up `index & 255`.
    #[inline]
    pub fn get(&self, index: usize) -> usize {
        self.table[index & INDEX_MASK] as usize
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.table
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("head", &&self.table[..8])
            .finish()
    }
}
