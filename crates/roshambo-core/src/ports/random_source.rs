//! RandomSource port - abstraction over uniform random numbers
//!
//! # Implementations
//! - **ThreadRngSource**: thread-local RNG (default)
//! - **SeededSource**: `StdRng` seeded from a `u64` (reproducible runs)
//! - **FixedSource**: replays a fixed sequence (tests)
//!
//! Any `FnMut() -> f64` closure is a `RandomSource` as well.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// RandomSource yields uniformly distributed values.
///
/// # Contract
/// `next_unit` returns a value in `[0, 1)`. Callers mapping the value onto
/// an index still clamp it, since a source may break the upper bound.
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64 + Send,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Draws from `rand::thread_rng()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn next_unit(&mut self) -> f64 {
        rand::thread_rng().r#gen::<f64>()
    }
}

/// Deterministic source backed by a seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Replays `values` in order, starting over after the last one.
///
/// An empty sequence always yields `0.0`.
#[derive(Debug, Clone)]
pub struct FixedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for FixedSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}
