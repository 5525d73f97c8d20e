use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, anyhow};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use minefield_core::{CellCount, Coord, Session};

use settings::Settings;

mod command;
mod game;
mod render;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about = "Clear the minefield without stepping on a mine", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// TOML file with width, height, mines and show_mines
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board width, overrides the config file
    #[arg(long)]
    width: Option<Coord>,

    /// Board height, overrides the config file
    #[arg(long)]
    height: Option<Coord>,

    /// Number of mines, overrides the config file
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Show covered mines while playing
    #[arg(long)]
    show_mines: bool,

    /// Print the final board as JSON on exit
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: &Verbosity<WarnLevel>) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to install logger: {err}"))
}

fn resolve_settings(args: &Args) -> anyhow::Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(width) = args.width {
        settings.width = width;
    }
    if let Some(height) = args.height {
        settings.height = height;
    }
    if let Some(mines) = args.mines {
        settings.mines = mines;
    }
    settings.show_mines |= args.show_mines;
    Ok(settings)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose)?;

    let settings = resolve_settings(&args)?;
    let config = settings.game_config().context("invalid game settings")?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!(
        "starting a {}x{} game with {} mines, seed {seed}",
        config.width(),
        config.height(),
        config.mines()
    );

    let mut session = Session::new(config, seed);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", command::HELP)?;
    game::play(&mut session, io::stdin().lock(), &mut stdout, settings.show_mines)?;

    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &session.view(settings.show_mines))
            .context("failed to write board as JSON")?;
        writeln!(stdout)?;
    }
    Ok(())
}
