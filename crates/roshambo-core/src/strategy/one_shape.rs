use crate::domain::Shape;

use super::PlayerStrategy;

/// Always plays the shape it was created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneShapeStrategy {
    shape: Shape,
}

impl OneShapeStrategy {
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }
}

impl PlayerStrategy for OneShapeStrategy {
    fn next_shape(&mut self) -> Shape {
        self.shape
    }

    fn name(&self) -> String {
        format!("{} Strategy", self.shape)
    }
}
