//! Domain model (shapes, players, rounds, games, ...).
//!
//! Everything here is single-threaded and synchronous. A `Game` owns its
//! players for the duration of play and hands them back through accessors.

pub mod errors;
pub mod game;
pub mod player;
pub mod round;
pub mod shape;
pub mod summary;

pub use self::errors::{DomainError, ErrorKind, Scope};
pub use self::game::{Game, GameBuilder};
pub use self::player::{Player, PlayerBuilder};
pub use self::round::{Outcome, Round, RoundBuilder, RoundResult, Seat, play_round};
pub use self::shape::Shape;
pub use self::summary::{GameSummary, PlayerSummary, RoundSummary};
