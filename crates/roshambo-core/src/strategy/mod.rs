//! Strategies - how a player picks the next shape.
//!
//! # Implementations
//! - **OneShapeStrategy**: always the same shape
//! - **RandomStrategy**: uniform pick from a fixed list of shapes

pub mod one_shape;
pub mod random;

pub use self::one_shape::OneShapeStrategy;
pub use self::random::RandomStrategy;

use crate::domain::Shape;

/// PlayerStrategy decides which shape a player throws next.
///
/// `next_shape` may be called any number of times in any order. It takes
/// `&mut self` so implementations can consume randomness or keep a cursor
/// without interior mutability.
pub trait PlayerStrategy: Send {
    fn next_shape(&mut self) -> Shape;

    /// Human-readable name used by presentation, e.g. "ROCK Strategy".
    fn name(&self) -> String;
}

impl<S: PlayerStrategy + ?Sized> PlayerStrategy for Box<S> {
    fn next_shape(&mut self) -> Shape {
        (**self).next_shape()
    }

    fn name(&self) -> String {
        (**self).name()
    }
}
