//! RNG module - seeded linear congruential generator
//!
//! Reproduces the classic `rand()` recurrence so that a given seed yields the
//! same shape sequence on every run and on every front-end:
//! `state = state * 1103515245 + 12345`, output `(state >> 16) % 32768`.
//!
//! Small-range draws go through rejection sampling so shape and column picks
//! are unbiased.

/// Largest value `next()` can return.
pub const RAND_MAX: u32 = 32767;

#[derive(Debug, Clone)]
pub struct LcgRng {
    state: u32,
}

impl LcgRng {
    /// Create a new RNG. Seed 0 is remapped to 1 to avoid the degenerate
    /// low-entropy start.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Replace the internal state (0 remapped to 1, as in `new`).
    pub fn reseed(&mut self, seed: u32) {
        self.state = if seed == 0 { 1 } else { seed };
    }

    /// Advance the state and return a value in `[0, RAND_MAX]`.
    pub fn next(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1103515245).wrapping_add(12345);
        (self.state >> 16) % (RAND_MAX + 1)
    }

    /// Unbiased draw in `[0, n)` via rejection sampling: draws at or above
    /// `RAND_MAX - RAND_MAX % n` are discarded.
    pub fn next_below(&mut self, n: u32) -> u32 {
        debug_assert!(n > 0 && n <= RAND_MAX);
        let limit = RAND_MAX - RAND_MAX % n;
        loop {
            let r = self.next();
            if r < limit {
                return r % n;
            }
        }
    }
}

impl Default for LcgRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed_is_remapped_to_one() {
        let mut zero = LcgRng::new(0);
        let mut one = LcgRng::new(1);
        for _ in 0..32 {
            assert_eq!(zero.next(), one.next());
        }
    }

    #[test]
    fn known_stream_for_seed_one() {
        // Fixed by the LCG constants; matches the reference implementation.
        let mut rng = LcgRng::new(1);
        assert_eq!(rng.next(), 16838);
        assert_eq!(rng.next(), 5758);
        assert_eq!(rng.next(), 10113);
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = LcgRng::new(987654);
        let mut b = LcgRng::new(987654);
        for _ in 0..100 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn next_below_stays_in_range() {
        let mut rng = LcgRng::new(42);
        for n in [2u32, 6, 7, 10] {
            for _ in 0..200 {
                assert!(rng.next_below(n) < n);
            }
        }
    }

    #[test]
    fn reseed_restarts_the_stream() {
        let mut rng = LcgRng::new(7);
        let first = rng.next();
        rng.next();
        rng.reseed(7);
        assert_eq!(rng.next(), first);
    }
}
