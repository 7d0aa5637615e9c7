//! Round: one comparison of the shapes two players throw.
//!
//! Playing a round has effects: each player's strategy is asked for a shape
//! exactly once and the winner's score goes up by one. `play_round` does all
//! of that before returning, so a `Round` value is only ever observed fully
//! evaluated and never changes afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::{DomainError, Scope};
use super::player::Player;
use super::shape::Shape;

/// One of the two positions in a round or game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    Player1,
    Player2,
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Player1 => f.write_str("Player 1"),
            Seat::Player2 => f.write_str("Player 2"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Win,
    Draw,
}

/// Result of a round. `winner` is present iff the outcome is `Win`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    outcome: Outcome,
    winner: Option<Seat>,
}

impl RoundResult {
    pub fn win(winner: Seat) -> Self {
        Self {
            outcome: Outcome::Win,
            winner: Some(winner),
        }
    }

    pub fn draw() -> Self {
        Self {
            outcome: Outcome::Draw,
            winner: None,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == Outcome::Draw
    }
}

/// An evaluated round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    round_number: u32,
    player1_shape: Shape,
    player2_shape: Shape,
    result: RoundResult,
}

impl Round {
    pub fn builder<'a>() -> RoundBuilder<'a> {
        RoundBuilder::new()
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn player1_shape(&self) -> Shape {
        self.player1_shape
    }

    pub fn player2_shape(&self) -> Shape {
        self.player2_shape
    }

    /// Shape thrown from `seat`.
    pub fn shape_of(&self, seat: Seat) -> Shape {
        match seat {
            Seat::Player1 => self.player1_shape,
            Seat::Player2 => self.player2_shape,
        }
    }

    pub fn result(&self) -> RoundResult {
        self.result
    }
}

/// Plays round `round_number` between two players.
///
/// Order of effects:
/// 1. player 1 picks a shape
/// 2. player 2 picks a shape
/// 3. if player 1's shape beats player 2's, player 1 scores; otherwise if
///    player 2's beats player 1's, player 2 scores; otherwise it is a draw
///
/// # Errors
/// `DomainError::InvalidRoundNumber` if `round_number` is 0. Nothing is
/// played in that case.
pub fn play_round(
    round_number: u32,
    player1: &mut Player,
    player2: &mut Player,
) -> Result<Round, DomainError> {
    if round_number == 0 {
        return Err(DomainError::InvalidRoundNumber);
    }

    let player1_shape = player1.next_shape();
    let player2_shape = player2.next_shape();

    let result = if player1_shape.beats(player2_shape) {
        player1.increment_score();
        RoundResult::win(Seat::Player1)
    } else if player2_shape.beats(player1_shape) {
        player2.increment_score();
        RoundResult::win(Seat::Player2)
    } else {
        RoundResult::draw()
    };

    log::trace!(
        "round {}: {} played {}, {} played {} -> {:?}",
        round_number,
        player1.name(),
        player1_shape,
        player2.name(),
        player2_shape,
        result.outcome()
    );

    Ok(Round {
        round_number,
        player1_shape,
        player2_shape,
        result,
    })
}

/// RoundBuilder checks its inputs at `build()` time, then plays the round.
///
/// Each player slot may be filled once. Filling it again is remembered and
/// reported by `build()` as `PlayerAlreadySet`.
///
/// # Example
/// ```
/// use roshambo_core::domain::{Outcome, Player, Round, Shape};
/// use roshambo_core::strategy::OneShapeStrategy;
///
/// let mut alice = Player::builder()
///     .with_name("Alice")
///     .with_strategy(OneShapeStrategy::new(Shape::Rock))
///     .build()
///     .unwrap();
/// let mut bob = Player::builder()
///     .with_name("Bob")
///     .with_strategy(OneShapeStrategy::new(Shape::Rock))
///     .build()
///     .unwrap();
///
/// let round = Round::builder()
///     .round_number(1)
///     .add_player1(&mut alice)
///     .add_player2(&mut bob)
///     .build()
///     .unwrap();
/// assert_eq!(round.result().outcome(), Outcome::Draw);
/// ```
#[derive(Default)]
pub struct RoundBuilder<'a> {
    round_number: u32,
    player1: Option<&'a mut Player>,
    player2: Option<&'a mut Player>,
    duplicate: Option<Seat>,
}

impl<'a> RoundBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn round_number(mut self, round_number: u32) -> Self {
        self.round_number = round_number;
        self
    }

    pub fn add_player1(mut self, player: &'a mut Player) -> Self {
        if self.player1.is_some() {
            self.duplicate.get_or_insert(Seat::Player1);
        } else {
            self.player1 = Some(player);
        }
        self
    }

    pub fn add_player2(mut self, player: &'a mut Player) -> Self {
        if self.player2.is_some() {
            self.duplicate.get_or_insert(Seat::Player2);
        } else {
            self.player2 = Some(player);
        }
        self
    }

    /// Validates the builder and plays the round.
    ///
    /// # Errors
    /// - `InvalidRoundNumber` if the round number is 0 or was never set
    /// - `PlayerAlreadySet` if a slot was filled twice
    /// - `NoPlayers` / `PlayerMissing` if a slot is empty
    pub fn build(self) -> Result<Round, DomainError> {
        if self.round_number == 0 {
            return Err(DomainError::InvalidRoundNumber);
        }
        if let Some(seat) = self.duplicate {
            return Err(DomainError::PlayerAlreadySet { seat });
        }
        let (player1, player2) = take_seats(self.player1, self.player2, Scope::Round)?;
        play_round(self.round_number, player1, player2)
    }
}

/// Unpacks two filled player slots or reports which one is empty.
pub(crate) fn take_seats<T>(
    player1: Option<T>,
    player2: Option<T>,
    scope: Scope,
) -> Result<(T, T), DomainError> {
    match (player1, player2) {
        (Some(p1), Some(p2)) => Ok((p1, p2)),
        (None, None) => Err(DomainError::NoPlayers { scope }),
        (None, Some(_)) => Err(DomainError::PlayerMissing {
            seat: Seat::Player1,
            scope,
        }),
        (Some(_), None) => Err(DomainError::PlayerMissing {
            seat: Seat::Player2,
            scope,
        }),
    }
}
