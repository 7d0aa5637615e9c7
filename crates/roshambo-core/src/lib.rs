//! roshambo-core
//!
//! Domain model for simulating rock-paper-scissors games between two
//! players, each driven by a pluggable strategy.
//!
//! # Modules
//! - **domain**: Shape, Player, Round, Game, errors and the summary view
//! - **strategy**: the `PlayerStrategy` trait and its implementations
//! - **ports**: abstractions over external inputs (the random source)
//!
//! # Example
//! ```
//! use roshambo_core::domain::{Game, Player, Shape};
//! use roshambo_core::strategy::OneShapeStrategy;
//!
//! let alice = Player::builder()
//!     .with_name("Alice")
//!     .with_strategy(OneShapeStrategy::new(Shape::Rock))
//!     .build()?;
//! let bob = Player::builder()
//!     .with_name("Bob")
//!     .with_strategy(OneShapeStrategy::new(Shape::Scissors))
//!     .build()?;
//!
//! let game = Game::builder()
//!     .add_player1(alice)
//!     .add_player2(bob)
//!     .number_of_rounds(3)
//!     .play()?;
//!
//! assert_eq!(game.winner().map(|p| p.name()), Some("Alice"));
//! # Ok::<(), roshambo_core::domain::DomainError>(())
//! ```

pub mod domain;
pub mod ports;
pub mod strategy;
