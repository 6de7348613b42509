//! RNG module - injectable random source for pipe generation
//!
//! A simple LCG keeps the core free of external dependencies and makes every
//! run reproducible from a single u32 seed, which the tests rely on.

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

    /// Generate a uniform f32 in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        // Take the top 24 bits so the result fits an f32 mantissa exactly.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Generate a uniform f32 in [min, max)
    ///
    /// Returns `min` when the range is empty or inverted.
    pub fn next_range_f32(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        min + self.next_f32() * (max - min)
    }

    /// Current internal state (for restarting with a continued sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
