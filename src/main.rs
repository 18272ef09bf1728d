//! Arena Duel entry point: reads starting HP, then narrates the duel.

use anyhow::{Context, Result};
use arena_duel::{run_duel, DuelSetup, OutputFormat, RandomRng, SleepPacer, DEFAULT_BEAT};
use clap::Parser;
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Deadpool vs Wolverine, one blow at a time
#[derive(Parser, Debug)]
#[command(name = "arena-duel")]
#[command(about = "Simulate a turn-based duel between Deadpool and Wolverine", long_about = None)]
#[command(version)]
struct Cli {
    /// Starting HP for Deadpool (prompted for when omitted)
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
    deadpool_hp: Option<i32>,

    /// Starting HP for Wolverine (prompted for when omitted)
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
    wolverine_hp: Option<i32>,

    /// Pause between half-turns, in milliseconds
    #[arg(long, default_value_t = DEFAULT_BEAT.as_millis() as u64)]
    delay_ms: u64,

    /// Print one JSON object per battle event instead of the play-by-play
    /// (prompts then go to stderr)
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn setup(&self) -> DuelSetup {
        DuelSetup {
            deadpool_hp: self.deadpool_hp,
            wolverine_hp: self.wolverine_hp,
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stderr = io::stderr().lock();
    let pacer = SleepPacer::new(Duration::from_millis(cli.delay_ms));

    run_duel(
        &cli.setup(),
        &mut input,
        io::stdout().lock(),
        &mut stderr,
        pacer,
        &mut RandomRng::new(),
    )
    .context("duel aborted")?;
    Ok(())
}
