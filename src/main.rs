use std::process::exit;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use infectlife::{Game, Grid, Mode, Terminal};

/// Conway - Game of Life, with an infection.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// How generations are painted.
    #[arg(short, long, value_enum, default_value_t = Mode::Flat, global = true)]
    output: Mode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play a game
    #[command(alias = "p")]
    Play {
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        width: u32,
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        height: u32,
        /// Generation the infection starts at, 0 means never.
        infect_after: u32,
        /// Generations to play, 0 means until the population is stable.
        max_generations: u32,
        /// Space separated 0/1 cells, row after row.
        seed: String,
    },
}

fn play(mode: Mode, command: Command) -> Result<()> {
    let Command::Play {
        width,
        height,
        infect_after,
        max_generations,
        seed,
    } = command;

    let grid = Grid::from_string(&seed, width, height).context("invalid seed")?;
    let output = Terminal::new(width, height, mode)?;
    let mut game = Game::new(grid, output, max_generations, infect_after);
    game.play().context("simulation aborted")?;
    Ok(())
}

pub fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = play(cli.output, cli.command) {
        eprintln!("[error] {err:#}");
        exit(1);
    }
}
