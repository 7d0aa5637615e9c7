//! Player: a named participant with a strategy and a running score.

use std::fmt;

use crate::strategy::PlayerStrategy;

use super::errors::DomainError;
use super::shape::Shape;

/// A player owns its strategy exclusively and accumulates a score across
/// every round it takes part in.
///
/// The score only changes through `increment_score`, which is crate-private
/// so that rounds are the single place a score can move.
pub struct Player {
    name: String,
    strategy: Box<dyn PlayerStrategy>,
    score: u32,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strategy(&self) -> &dyn PlayerStrategy {
        self.strategy.as_ref()
    }

    /// Shorthand for `strategy().name()`.
    pub fn strategy_name(&self) -> String {
        self.strategy.name()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Asks the strategy for the next shape.
    pub fn next_shape(&mut self) -> Shape {
        self.strategy.next_shape()
    }

    pub(crate) fn increment_score(&mut self) {
        self.score += 1;
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("strategy", &self.strategy.name())
            .field("score", &self.score)
            .finish()
    }
}

/// PlayerBuilder collects a name and a strategy; `build()` validates both.
///
/// # Example
/// ```
/// use roshambo_core::domain::{Player, Shape};
/// use roshambo_core::strategy::OneShapeStrategy;
///
/// let player = Player::builder()
///     .with_name("Alice")
///     .with_strategy(OneShapeStrategy::new(Shape::Rock))
///     .build()
///     .unwrap();
/// assert_eq!(player.score(), 0);
/// ```
#[derive(Default)]
pub struct PlayerBuilder {
    name: Option<String>,
    strategy: Option<Box<dyn PlayerStrategy>>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_strategy<S>(mut self, strategy: S) -> Self
    where
        S: PlayerStrategy + 'static,
    {
        self.strategy = Some(Box::new(strategy));
        self
    }

    /// # Errors
    /// - `DomainError::MissingStrategy` if no strategy was given
    /// - `DomainError::BlankPlayerName` if the name is missing or whitespace
    pub fn build(self) -> Result<Player, DomainError> {
        let strategy = self.strategy.ok_or(DomainError::MissingStrategy)?;
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(DomainError::BlankPlayerName),
        };
        Ok(Player {
            name,
            strategy,
            score: 0,
        })
    }
}
