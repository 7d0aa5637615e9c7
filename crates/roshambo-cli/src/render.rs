//! Text report of a finished game.

use std::io::{self, Write};

use roshambo_core::domain::{Game, Outcome, Player, Round};

const RULE: &str =
    "=========================================================================================";

pub fn write_game<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    write_start(out, game)?;
    for round in game.rounds() {
        write_round(out, game, round)?;
    }
    write_result(out, game)
}

fn write_start<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    writeln!(out, "Game started for {} rounds with players:", game.number_of_rounds())?;
    for player in [game.player1(), game.player2()] {
        writeln!(out, " - {} using Strategy: {}", player.name(), player.strategy_name())?;
    }
    writeln!(out, "{RULE}")
}

fn write_round<W: Write>(out: &mut W, game: &Game, round: &Round) -> io::Result<()> {
    writeln!(out, "Round {} finished:", round.round_number())?;
    writeln!(out, " - {} played {}", game.player1().name(), round.player1_shape())?;
    writeln!(out, " - {} played {}", game.player2().name(), round.player2_shape())?;
    match (round.result().outcome(), game.round_winner(round)) {
        (Outcome::Win, Some(winner)) => writeln!(out, "Winner: {}", winner.name())?,
        _ => writeln!(out, "Round ended in a draw.")?,
    }
    writeln!(out, "{RULE}")
}

fn write_result<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "Overall Game Result:")?;
    for player in [game.player1(), game.player2()] {
        writeln!(out, " - {} won {} rounds.", player.name(), player.score())?;
    }
    writeln!(out, " - {} rounds ended in a draw.", game.number_of_draws())?;
    writeln!(out, "{RULE}")?;
    match game.winner().map(Player::name) {
        Some(name) => writeln!(out, "The winner is: {name}")?,
        None => writeln!(out, "No winner, all players have the same score.")?,
    }
    writeln!(out, "{RULE}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use roshambo_core::domain::Shape;
    use roshambo_core::strategy::OneShapeStrategy;

    fn render(p1: Shape, p2: Shape, rounds: u32) -> String {
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
        let game = Game::builder()
            .add_player1(alice)
            .add_player2(bob)
            .number_of_rounds(rounds)
            .play()
            .unwrap();

        let mut buf = Vec::new();
        write_game(&mut buf, &game).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn reports_rounds_and_winner() {
        let text = render(Shape::Rock, Shape::Scissors, 2);

        assert!(text.starts_with("Game started for 2 rounds with players:\n"));
        assert!(text.contains(" - Alice using Strategy: ROCK Strategy\n"));
        assert!(text.contains("Round 2 finished:\n - Alice played ROCK\n - Bob played SCISSORS\nWinner: Alice\n"));
        assert!(text.contains(" - Alice won 2 rounds.\n"));
        assert!(text.contains(" - Bob won 0 rounds.\n"));
        assert!(text.contains(" - 0 rounds ended in a draw.\n"));
        assert!(text.contains("The winner is: Alice\n"));
    }

    #[test]
    fn reports_draws_without_winner() {
        let text = render(Shape::Paper, Shape::Paper, 1);

        assert!(text.contains("Round ended in a draw.\n"));
        assert!(text.contains(" - 1 rounds ended in a draw.\n"));
        assert!(text.contains("No winner, all players have the same score.\n"));
        assert!(!text.contains("The winner is"));
    }
}
