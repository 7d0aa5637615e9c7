mod args;
mod render;

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use roshambo_core::domain::{Game, GameSummary, Player};

use crate::args::{Args, Format, StrategySpec};

fn build_player(name: &str, spec: &StrategySpec, seed: Option<u64>) -> anyhow::Result<Player> {
    let strategy = spec
        .build(seed)
        .with_context(|| format!("invalid strategy for player {name}"))?;
    let player = Player::builder()
        .with_name(name)
        .with_strategy(strategy)
        .build()
        .with_context(|| format!("invalid player '{name}'"))?;
    Ok(player)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::debug!("{args:?}");

    // offset player 2's seed so two random players don't mirror each other
    let player1 = build_player(&args.player1_name, &args.player1, args.seed)?;
    let player2 = build_player(
        &args.player2_name,
        &args.player2,
        args.seed.map(|s| s.wrapping_add(1)),
    )?;

    let game = Game::builder()
        .add_player1(player1)
        .add_player2(player2)
        .number_of_rounds(args.rounds)
        .play()
        .context("could not play game")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        Format::Text => render::write_game(&mut out, &game)?,
        Format::Json => {
            let json = GameSummary::from(&game).to_json_pretty()?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}
