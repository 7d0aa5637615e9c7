use std::fmt;

use crate::domain::{DomainError, Shape};
use crate::ports::{RandomSource, ThreadRngSource};

use super::PlayerStrategy;

/// Picks one of `shapes` uniformly on every call.
///
/// Each `next_shape` draws exactly one value `r` from the random source and
/// returns `shapes[floor(r * len)]`. The index is clamped to `len - 1`, so a
/// source returning `1.0` still selects the last shape.
pub struct RandomStrategy {
    shapes: Vec<Shape>,
    source: Box<dyn RandomSource>,
}

impl RandomStrategy {
    /// Random strategy over `shapes` using the thread-local RNG.
    ///
    /// # Errors
    /// `DomainError::NoShapes` if `shapes` is empty.
    pub fn new(shapes: Vec<Shape>) -> Result<Self, DomainError> {
        Self::with_source(ThreadRngSource, shapes)
    }

    /// Random strategy over ROCK, PAPER and SCISSORS.
    pub fn all_shapes() -> Self {
        Self {
            shapes: Shape::ALL.to_vec(),
            source: Box::new(ThreadRngSource),
        }
    }

    /// Random strategy drawing from a caller-supplied source.
    ///
    /// # Example
    /// ```
    /// use roshambo_core::domain::Shape;
    /// use roshambo_core::strategy::{PlayerStrategy, RandomStrategy};
    ///
    /// let mut strategy =
    ///     RandomStrategy::with_source(|| 0.9, vec![Shape::Rock, Shape::Paper]).unwrap();
    /// assert_eq!(strategy.next_shape(), Shape::Paper);
    /// ```
    pub fn with_source<R>(source: R, shapes: Vec<Shape>) -> Result<Self, DomainError>
    where
        R: RandomSource + 'static,
    {
        if shapes.is_empty() {
            return Err(DomainError::NoShapes);
        }
        Ok(Self {
            shapes,
            source: Box::new(source),
        })
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    fn index_for(&self, r: f64) -> usize {
        let len = self.shapes.len();
        // `as usize` saturates: negatives and NaN land on 0
        let index = (r * len as f64).floor() as usize;
        index.min(len - 1)
    }
}

impl PlayerStrategy for RandomStrategy {
    fn next_shape(&mut self) -> Shape {
        let r = self.source.next_unit();
        self.shapes[self.index_for(r)]
    }

    fn name(&self) -> String {
        let names: Vec<&str> = self.shapes.iter().map(|s| s.name()).collect();
        format!("Random Strategy with shapes: {}", names.join(","))
    }
}

impl fmt::Debug for RandomStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomStrategy")
            .field("shapes", &self.shapes)
            .finish_non_exhaustive()
    }
}
