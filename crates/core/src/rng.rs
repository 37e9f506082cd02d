//! RNG module - deterministic draws from a catalog pool
//!
//! A small LCG keeps round draws reproducible from a seed (tests, replays)
//! without pulling a randomness crate into the core. Range draws use the
//! high bits with rejection so every index in the pool is equally likely.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a uniformly distributed value in range [0, max)
    ///
    /// Returns 0 when `max` is 0 or 1.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max <= 1 {
            return 0;
        }
        // Multiply-shift keeps the (better mixed) high bits; rejecting the
        // low remainder band removes the modulo bias.
        let threshold = max.wrapping_neg() % max;
        loop {
            let m = (self.next_u32() as u64) * (max as u64);
            if (m as u32) >= threshold {
                return (m >> 32) as u32;
            }
        }
    }

    /// Pick one element uniformly, or `None` for an empty slice.
    ///
    /// The slice length is read at call time, so a pool that shrank or grew
    /// since the previous draw is always sampled over its current size.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let len = u32::try_from(items.len()).unwrap_or(u32::MAX);
        items.get(self.next_range(len) as usize)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
