//! Shape: the three hand shapes and the relation between them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A shape a player can throw in a round.
///
/// Serialized as SCREAMING_SNAKE_CASE (ROCK / PAPER / SCISSORS), which is
/// also how `Display` renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    /// All shapes in declaration order.
    pub const ALL: [Shape; 3] = [Shape::Rock, Shape::Paper, Shape::Scissors];

    /// The single shape this one beats.
    ///
    /// ROCK beats SCISSORS, PAPER beats ROCK, SCISSORS beats PAPER.
    pub fn defeats(self) -> Shape {
        match self {
            Shape::Rock => Shape::Scissors,
            Shape::Paper => Shape::Rock,
            Shape::Scissors => Shape::Paper,
        }
    }

    /// Returns true if `self` beats `other`. Never true for equal shapes.
    pub fn beats(self, other: Shape) -> bool {
        self.defeats() == other
    }

    /// Upper-case type name, e.g. "ROCK".
    pub fn name(self) -> &'static str {
        match self {
            Shape::Rock => "ROCK",
            Shape::Paper => "PAPER",
            Shape::Scissors => "SCISSORS",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
