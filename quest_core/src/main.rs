//! Coffee Maker Quest
//!
//! Interactive front end: reads one command per line from stdin.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use quest_core::GameSession;
use quest_rules::{Inventory, LevelConfig};
use tracing_subscriber::EnvFilter;

/// Find coffee, cream and sugar, then drink up and study
#[derive(Parser, Debug)]
#[command(name = "coffee-quest")]
#[command(author, version, about = "Coffee Maker Quest - find your caffeine!", long_about = None)]
struct Args {
    /// Level file (TOML, or JSON with a .json extension). Defaults to the classic map
    #[arg(short = 'l', long = "level")]
    level: Option<PathBuf>,

    /// Adjective of the room to start in, overriding the level
    #[arg(short = 's', long = "start")]
    start: Option<String>,

    /// Write every session event as a JSON line to this file
    #[arg(short = 't', long = "transcript")]
    transcript: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("coffee-quest: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut level = match &args.level {
        Some(path) => LevelConfig::load(path)?,
        None => LevelConfig::classic(),
    };
    if let Some(start) = &args.start {
        level.start = Some(start.clone());
    }

    let (registry, start) = level.build()?;
    let mut session = GameSession::new(registry, Inventory::new());
    session.set_current_room(start)?;

    play(&mut session, io::stdin().lock(), io::stdout().lock())?;

    if let Some(path) = &args.transcript {
        let mut out = BufWriter::new(File::create(path)?);
        for event in session.events() {
            serde_json::to_writer(&mut out, event)?;
            writeln!(out)?;
        }
        out.flush()?;
    }
    Ok(())
}

/// Prompt, read, respond, until the drink is taken or input runs out.
fn play(
    session: &mut GameSession<Inventory>,
    input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    writeln!(output, "Coffee Maker Quest {}", env!("CARGO_PKG_VERSION"))?;
    let mut lines = input.lines();

    while !session.is_game_over() {
        if let Some(room) = session.current_room() {
            write!(output, "\n{}", room.description())?;
        }
        write!(output, "{}", session.instructions())?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            break;
        };
        write!(output, "{}", session.process_command(&line))?;
    }
    output.flush()
}
