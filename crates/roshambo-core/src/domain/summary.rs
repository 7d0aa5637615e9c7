//! Serializable views of a finished game.
//!
//! `Game` holds trait objects and seat indices; these views flatten it into
//! plain data (names, shapes, outcomes) for reporting.

use serde::{Deserialize, Serialize};

use super::game::Game;
use super::player::Player;
use super::round::{Outcome, Round};
use super::shape::Shape;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub strategy: String,
    pub score: u32,
}

impl From<&Player> for PlayerSummary {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            strategy: player.strategy_name(),
            score: player.score(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round_number: u32,
    pub player1_shape: Shape,
    pub player2_shape: Shape,
    pub outcome: Outcome,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}

impl RoundSummary {
    fn new(game: &Game, round: &Round) -> Self {
        Self {
            round_number: round.round_number(),
            player1_shape: round.player1_shape(),
            player2_shape: round.player2_shape(),
            outcome: round.result().outcome(),
            winner: game.round_winner(round).map(|p| p.name().to_string()),
        }
    }
}

/// Snapshot of a completed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub number_of_rounds: u32,
    pub player1: PlayerSummary,
    pub player2: PlayerSummary,
    pub number_of_draws: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,

    pub rounds: Vec<RoundSummary>,
}

impl GameSummary {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&Game> for GameSummary {
    fn from(game: &Game) -> Self {
        Self {
            number_of_rounds: game.number_of_rounds(),
            player1: PlayerSummary::from(game.player1()),
            player2: PlayerSummary::from(game.player2()),
            number_of_draws: game.number_of_draws(),
            winner: game.winner().map(|p| p.name().to_string()),
            rounds: game
                .rounds()
                .iter()
                .map(|round| RoundSummary::new(game, round))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::OneShapeStrategy;

    fn game(p1: Shape, p2: Shape, rounds: u32) -> Game {
        let alice = Player::builder()
            .with_name("Alice")
            .with_strategy(OneShapeStrategy::new(p1))
            .build()
            .unwrap();
        let bob = Player::builder()
            .with_name("Bob")
            .with_strategy(OneShapeStrategy::new(p2))
            .build()
            .unwrap();
        Game::builder()
            .add_player1(alice)
            .add_player2(bob)
            .number_of_rounds(rounds)
            .play()
            .unwrap()
    }

    #[test]
    fn summary_mirrors_the_game() {
        let summary = GameSummary::from(&game(Shape::Paper, Shape::Rock, 2));

        assert_eq!(summary.number_of_rounds, 2);
        assert_eq!(summary.player1.name, "Alice");
        assert_eq!(summary.player1.strategy, "PAPER Strategy");
        assert_eq!(summary.player1.score, 2);
        assert_eq!(summary.player2.score, 0);
        assert_eq!(summary.number_of_draws, 0);
        assert_eq!(summary.winner.as_deref(), Some("Alice"));
        assert_eq!(summary.rounds.len(), 2);
        assert_eq!(summary.rounds[1].round_number, 2);
        assert_eq!(summary.rounds[1].winner.as_deref(), Some("Alice"));
    }

    #[test]
    fn json_uses_upper_case_shapes_and_outcomes() {
        let summary = GameSummary::from(&game(Shape::Rock, Shape::Rock, 1));
        let json = summary.to_json_pretty().unwrap();

        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["rounds"][0]["player1_shape"], "ROCK");
        assert_eq!(v["rounds"][0]["outcome"], "DRAW");
        assert_eq!(v["number_of_draws"], 1);
        // no winner -> field omitted
        assert!(v.get("winner").is_none());
        assert!(v["rounds"][0].get("winner").is_none());
    }
}
