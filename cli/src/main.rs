use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use sweeper_core::{CellCount, Coord, Difficulty, GameConfig};

use crate::command::{Command, CommandError, HELP};
use crate::session::{Session, Step};

mod command;
mod session;

#[derive(Parser, Debug)]
#[command(version, about = "Play mine sweeping in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Preset board: beginner, intermediate or expert
    #[arg(short, long, default_value_t = Difficulty::Beginner)]
    difficulty: Difficulty,

    /// Custom board rows, clamped to 5..=30
    #[arg(long, requires_all = ["cols", "mines"])]
    rows: Option<Coord>,

    /// Custom board columns, clamped to 5..=30
    #[arg(long, requires_all = ["rows", "mines"])]
    cols: Option<Coord>,

    /// Custom mine count, clamped to leave at least one safe cell
    #[arg(long, requires_all = ["rows", "cols"])]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        match (self.rows, self.cols, self.mines) {
            (Some(rows), Some(cols), Some(mines)) => GameConfig::custom(rows, cols, mines),
            _ => self.difficulty.config(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = args.game_config();
    log::debug!("config: {:?}", config);
    let mut session = Session::new(config, args.seed).context("Could not start game")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}\n\n{}", HELP, session.screen())?;
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("Could not read input")?;
        match line.parse::<Command>() {
            Ok(command) => match session.apply(command)? {
                Step::Continue(text) => writeln!(stdout, "{}", text)?,
                Step::Quit => break,
            },
            Err(CommandError::Empty) => {}
            Err(err) => writeln!(stdout, "{}", err)?,
        }

        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    Ok(())
}
