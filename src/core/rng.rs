//! RNG module - seedable uniform piece draws.
//!
//! Each spawn draws a kind uniformly at random from the 7, independently per
//! draw (no bag fairness). The generator is an explicit value owned by the
//! game state so piece sequences are reproducible from a seed in tests.

use crate::types::PieceKind;

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

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw a piece kind uniformly from the 7
    pub fn draw_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(7) as usize]
    }
}
