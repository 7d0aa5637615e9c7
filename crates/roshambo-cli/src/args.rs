//! Command-line configuration.

use std::str::FromStr;

use clap::{Parser, ValueEnum};
use roshambo_core::domain::{DomainError, Shape};
use roshambo_core::ports::SeededSource;
use roshambo_core::strategy::{OneShapeStrategy, PlayerStrategy, RandomStrategy};

/// Simulate a game of rock-paper-scissors between two strategies.
#[derive(Debug, Parser)]
#[command(name = "roshambo", version, about)]
pub struct Args {
    /// Number of rounds to play
    #[arg(long, default_value_t = 100)]
    pub rounds: u32,

    #[arg(long, default_value = "A")]
    pub player1_name: String,

    #[arg(long, default_value = "B")]
    pub player2_name: String,

    /// Strategy of player 1: rock | paper | scissors | random | random:<shape>,...
    #[arg(long, default_value = "paper")]
    pub player1: StrategySpec,

    /// Strategy of player 2, same syntax as --player1
    #[arg(long, default_value = "random")]
    pub player2: StrategySpec,

    /// Seed random strategies for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// A strategy as written on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategySpec {
    Constant(Shape),
    Random(Vec<Shape>),
}

impl StrategySpec {
    /// Builds the strategy. `seed` replaces the thread RNG for random ones.
    pub fn build(&self, seed: Option<u64>) -> Result<Box<dyn PlayerStrategy>, DomainError> {
        match self {
            StrategySpec::Constant(shape) => Ok(Box::new(OneShapeStrategy::new(*shape))),
            StrategySpec::Random(shapes) => {
                let strategy = match seed {
                    Some(seed) => RandomStrategy::with_source(SeededSource::new(seed), shapes.clone())?,
                    None => RandomStrategy::new(shapes.clone())?,
                };
                Ok(Box::new(strategy))
            }
        }
    }
}

fn parse_shape(s: &str) -> Result<Shape, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "rock" => Ok(Shape::Rock),
        "paper" => Ok(Shape::Paper),
        "scissors" => Ok(Shape::Scissors),
        other => Err(format!("unknown shape '{other}' (expected rock, paper or scissors)")),
    }
}

impl FromStr for StrategySpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "random" {
            return Ok(StrategySpec::Random(Shape::ALL.to_vec()));
        }
        if let Some(list) = lower.strip_prefix("random:") {
            let shapes = list
                .split(',')
                .filter(|part| !part.trim().is_empty())
                .map(parse_shape)
                .collect::<Result<Vec<_>, _>>()?;
            if shapes.is_empty() {
                return Err("random strategy needs at least one shape".to_string());
            }
            return Ok(StrategySpec::Random(shapes));
        }
        parse_shape(&lower).map(StrategySpec::Constant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("rock", StrategySpec::Constant(Shape::Rock))]
    #[case("PAPER", StrategySpec::Constant(Shape::Paper))]
    #[case(" Scissors ", StrategySpec::Constant(Shape::Scissors))]
    #[case("random", StrategySpec::Random(Shape::ALL.to_vec()))]
    #[case("random:rock", StrategySpec::Random(vec![Shape::Rock]))]
    #[case("Random:scissors,rock", StrategySpec::Random(vec![Shape::Scissors, Shape::Rock]))]
    fn parses_strategy_specs(#[case] input: &str, #[case] expected: StrategySpec) {
        assert_eq!(input.parse::<StrategySpec>().unwrap(), expected);
    }

    #[rstest]
    #[case("lizard")]
    #[case("random:")]
    #[case("random:rock,spock")]
    fn rejects_bad_specs(#[case] input: &str) {
        assert!(input.parse::<StrategySpec>().is_err());
    }

    #[test]
    fn defaults_match_classic_setup() {
        let args = Args::parse_from(["roshambo"]);
        assert_eq!(args.rounds, 100);
        assert_eq!(args.player1_name, "A");
        assert_eq!(args.player2_name, "B");
        assert_eq!(args.player1, StrategySpec::Constant(Shape::Paper));
        assert_eq!(args.player2, StrategySpec::Random(Shape::ALL.to_vec()));
        assert_eq!(args.seed, None);
        assert_eq!(args.format, Format::Text);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "roshambo",
            "--rounds",
            "5",
            "--player1",
            "rock",
            "--player2",
            "random:paper",
            "--seed",
            "9",
            "--format",
            "json",
        ]);
        assert_eq!(args.rounds, 5);
        assert_eq!(args.player2, StrategySpec::Random(vec![Shape::Paper]));
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.format, Format::Json);
    }

    #[test]
    fn built_strategies_carry_their_names() {
        let constant = StrategySpec::Constant(Shape::Rock).build(None).unwrap();
        assert_eq!(constant.name(), "ROCK Strategy");

        let mut random = StrategySpec::Random(vec![Shape::Paper]).build(Some(1)).unwrap();
        assert_eq!(random.next_shape(), Shape::Paper);
        assert_eq!(random.name(), "Random Strategy with shapes: PAPER");
    }
}
