//! Errors raised while constructing domain objects.

use std::fmt;

use super::round::Seat;

/// ErrorKind classifies a `DomainError`.
///
/// - InvalidArgument: a value handed to a constructor is out of range
/// - InvalidState: a builder was used in an illegal sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidState,
}

/// Which builder reported a player-slot error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Round,
    Game,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Round => f.write_str("round"),
            Scope::Game => f.write_str("game"),
        }
    }
}

/// DomainError is returned by every fallible constructor in the crate.
///
/// Construction either fully succeeds or fails with one of these; nothing
/// is retried and no partially built object is ever observable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Round number must be greater than 0")]
    InvalidRoundNumber,

    #[error("Number of rounds must be greater than 0")]
    InvalidNumberOfRounds,

    #[error("RandomStrategy requires at least one shape")]
    NoShapes,

    #[error("{seat} is already set")]
    PlayerAlreadySet { seat: Seat },

    #[error("No players added to the {scope}")]
    NoPlayers { scope: Scope },

    #[error("{seat} must be added to the {scope}")]
    PlayerMissing { seat: Seat, scope: Scope },

    #[error("Player name must not be blank")]
    BlankPlayerName,

    #[error("Player strategy must be set")]
    MissingStrategy,
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidRoundNumber
            | DomainError::InvalidNumberOfRounds
            | DomainError::NoShapes => ErrorKind::InvalidArgument,
            DomainError::PlayerAlreadySet { .. }
            | DomainError::NoPlayers { .. }
            | DomainError::PlayerMissing { .. }
            | DomainError::BlankPlayerName
            | DomainError::MissingStrategy => ErrorKind::InvalidState,
        }
    }
}
