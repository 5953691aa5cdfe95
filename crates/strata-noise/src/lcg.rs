//! 48-bit linear congruential generator used to shuffle permutation tables.
//!
//! Multiplier, addend and the 48-bit mask are the classic ones, so worlds
//! generated from a given seed keep their historical layout.

const MULTIPLIER: i64 = 0x5_DEEC_E66D;
const ADDEND: i64 = 0xB;
const MASK: i64 = (1 << 48) - 1;

#[derive(Clone, Debug)]
pub struct Lcg48 {
    state: i64,
}

impl Lcg48 {
    pub fn new(seed: i64) -> Self {
        Self {
            state: (seed ^ MULTIPLIER) & MASK,
        }
    }

    /// Advances the state and returns the top `bits` bits (1..=32).
    #[inline]
    fn next_bits(&mut self, bits: u32) -> i32 {
        debug_assert!((1..=32).contains(&bits));
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK;
        (self.state >> (48 - bits)) as i32
    }

    /// Uniform 32-bit value over the full `i32` range.
    #[inline]
    pub fn next_i32(&mut self) -> i32 {
        self.next_bits(32)
    }

    /// Uniform value in `[0, bound)`. `bound` must be positive.
    pub fn next_below(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0);
        let mut r = self.next_bits(31);
        let m = bound - 1;
        if bound & m == 0 {
            return ((i64::from(bound) * i64::from(r)) >> 31) as i32;
        }
        let mut u = r;
        loop {
            r = u % bound;
            // Reject the tail of the range that would bias low values.
            if u.wrapping_sub(r).wrapping_add(m) >= 0 {
                return r;
            }
            u = self.next_bits(31);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_sequence() {
        assert_eq!(Lcg48::new(42).next_i32(), -1_170_105_035);
        assert_eq!(Lcg48::new(0).next_i32(), -1_155_484_576);
    }

    #[test]
    fn bounded_draws_match_reference() {
        let mut rng = Lcg48::new(42);
        let draws: Vec<i32> = (0..5).map(|_| rng.next_below(10)).collect();
        assert_eq!(draws, vec![0, 3, 8, 4, 0]);
    }

    #[test]
    fn power_of_two_bound_stays_in_range() {
        let mut rng = Lcg48::new(-7);
        for _ in 0..1000 {
            let v = rng.next_below(256);
            assert!((0..256).contains(&v));
        }
    }
}
