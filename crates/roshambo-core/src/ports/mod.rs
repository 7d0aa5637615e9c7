//! Ports - abstractions over inputs the domain does not control.
//!
//! Randomness is the only one: strategies that consume randomness take a
//! `RandomSource` so tests can replace it with a fixed sequence.

pub mod random_source;

pub use self::random_source::{FixedSource, RandomSource, SeededSource, ThreadRngSource};
