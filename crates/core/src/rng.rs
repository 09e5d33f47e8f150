//! RNG module - injectable random source and Fisher-Yates shuffle
//!
//! Deck generation takes any [`RandomSource`], so tests can drive it with a
//! fixed seed or a scripted sequence. [`SimpleRng`] is the default source:
//! a small LCG that is fully deterministic for a given seed.

/// Source of uniformly distributed `u32` values.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Generate a value in `[0, max)`.
    ///
    /// Multiply-shift with rejection (Lemire). Unbiased, and draws from the
    /// high bits of the source.
    fn next_range(&mut self, max: u32) -> u32 {
        if max <= 1 {
            return 0;
        }
        let mut m = u64::from(self.next_u32()) * u64::from(max);
        let mut low = m as u32;
        if low < max {
            let threshold = max.wrapping_neg() % max;
            while low < threshold {
                m = u64::from(self.next_u32()) * u64::from(max);
                low = m as u32;
            }
        }
        (m >> 32) as u32
    }
}

/// Shuffle a slice in place using Fisher-Yates.
pub fn shuffle<T, R: RandomSource + ?Sized>(rng: &mut R, slice: &mut [T]) {
    for i in (1..slice.len()).rev() {
        let j = rng.next_range((i + 1) as u32) as usize;
        slice.swap(i, j);
    }
}

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
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
