use anyhow::Context;
use clap::Parser;
use console::TerminalConsole;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;
use vocabulary::WordRecord;

mod console;
mod input;
mod quiz;

const WORDS: &[u8] = include_bytes!("../assets/words.json");

#[derive(Parser)]
#[command(
    name = "wordly",
    about = "Practice vocabulary from the terminal",
    help_template = "Usage: {name} [options]\nOptions:\n{options}"
)]
struct Args {
    /// Seed for the word order and the hints shown after a miss
    #[arg(long)]
    seed: Option<u64>,

    /// Print without colors
    #[arg(long)]
    no_color: bool,
}

fn load_words(payload: &[u8]) -> anyhow::Result<Vec<WordRecord>> {
    vocabulary::load(payload).context("failed to load the embedded word list")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut records = load_words(WORDS)?;

    let mut rng = match args.seed {
        Some(seed) => {
            tracing::debug!(seed, "using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut input = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut output = if args.no_color {
        TerminalConsole::plain(stdout)
    } else {
        TerminalConsole::new(stdout, true)
    };
    let outcome = quiz::run(&mut records, &mut rng, &mut input, &mut output)?;
    tracing::info!(asked = outcome.asked, correct = outcome.correct, "quiz finished");
    Ok(())
}
