//! Game: a fixed number of rounds between two players.
//!
//! A game is the root of the domain model. `GameBuilder::play()` validates
//! its inputs, plays every round in order and only then returns the `Game`,
//! so callers never see a partially played game.

use super::errors::{DomainError, Scope};
use super::player::Player;
use super::round::{Round, Seat, take_seats};

/// A completed game.
///
/// Invariants once built:
/// - `rounds().len() == number_of_rounds()`, numbered 1..=N in play order
/// - `player1.score + player2.score + number_of_draws() == number_of_rounds`
/// - `winner()` is the strictly higher scorer, or `None` on equal scores
#[derive(Debug)]
pub struct Game {
    player1: Player,
    player2: Player,
    number_of_rounds: u32,
    rounds: Vec<Round>,
    winner: Option<Seat>,
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    fn start(number_of_rounds: u32, player1: Player, player2: Player) -> Result<Self, DomainError> {
        let mut game = Self {
            player1,
            player2,
            number_of_rounds,
            rounds: Vec::with_capacity(number_of_rounds as usize),
            winner: None,
        };
        game.play()?;
        Ok(game)
    }

    fn play(&mut self) -> Result<(), DomainError> {
        log::debug!(
            "starting game: {} rounds, {} ({}) vs {} ({})",
            self.number_of_rounds,
            self.player1.name(),
            self.player1.strategy_name(),
            self.player2.name(),
            self.player2.strategy_name()
        );

        for round_number in 1..=self.number_of_rounds {
            let round = Round::builder()
                .round_number(round_number)
                .add_player1(&mut self.player1)
                .add_player2(&mut self.player2)
                .build()?;
            self.rounds.push(round);
        }
        self.winner = determine_winner(&self.player1, &self.player2);

        log::debug!(
            "game complete: {} {} - {} {}, {} draws, winner={:?}",
            self.player1.name(),
            self.player1.score(),
            self.player2.score(),
            self.player2.name(),
            self.number_of_draws(),
            self.winner().map(Player::name)
        );
        Ok(())
    }

    pub fn player1(&self) -> &Player {
        &self.player1
    }

    pub fn player2(&self) -> &Player {
        &self.player2
    }

    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::Player1 => &self.player1,
            Seat::Player2 => &self.player2,
        }
    }

    pub fn number_of_rounds(&self) -> u32 {
        self.number_of_rounds
    }

    /// Rounds in play order.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// The overall winner, or `None` when both players scored the same.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|seat| self.player(seat))
    }

    pub fn winner_seat(&self) -> Option<Seat> {
        self.winner
    }

    /// Winner of a single round of this game, resolved to the player.
    pub fn round_winner(&self, round: &Round) -> Option<&Player> {
        round.result().winner().map(|seat| self.player(seat))
    }

    /// Number of drawn rounds, counted on every call.
    pub fn number_of_draws(&self) -> usize {
        self.rounds
            .iter()
            .filter(|round| round.result().is_draw())
            .count()
    }

    /// Hands the players back to the caller.
    pub fn into_players(self) -> (Player, Player) {
        (self.player1, self.player2)
    }
}

fn determine_winner(player1: &Player, player2: &Player) -> Option<Seat> {
    use std::cmp::Ordering;

    match player1.score().cmp(&player2.score()) {
        Ordering::Greater => Some(Seat::Player1),
        Ordering::Less => Some(Seat::Player2),
        Ordering::Equal => None,
    }
}

/// GameBuilder collects the round count and both players; `play()`
/// validates them and plays the game.
///
/// # Errors from `play()`
/// - `InvalidNumberOfRounds` if the count is 0 or was never set
/// - `PlayerAlreadySet` if a slot was filled twice
/// - `NoPlayers` / `PlayerMissing` if a slot is empty
#[derive(Debug, Default)]
pub struct GameBuilder {
    number_of_rounds: u32,
    player1: Option<Player>,
    player2: Option<Player>,
    duplicate: Option<Seat>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number_of_rounds(mut self, number_of_rounds: u32) -> Self {
        self.number_of_rounds = number_of_rounds;
        self
    }

    pub fn add_player1(mut self, player: Player) -> Self {
        if self.player1.is_some() {
            self.duplicate.get_or_insert(Seat::Player1);
        } else {
            self.player1 = Some(player);
        }
        self
    }

    pub fn add_player2(mut self, player: Player) -> Self {
        if self.player2.is_some() {
            self.duplicate.get_or_insert(Seat::Player2);
        } else {
            self.player2 = Some(player);
        }
        self
    }

    pub fn play(self) -> Result<Game, DomainError> {
        if self.number_of_rounds == 0 {
            return Err(DomainError::InvalidNumberOfRounds);
        }
        if let Some(seat) = self.duplicate {
            return Err(DomainError::PlayerAlreadySet { seat });
        }
        let (player1, player2) = take_seats(self.player1, self.player2, Scope::Game)?;
        Game::start(self.number_of_rounds, player1, player2)
    }
}
