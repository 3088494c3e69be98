//! Interactive blackjack session for the terminal.

use std::error::Error;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use twentyone::{Console, Deck, Game, GameError, NoPause, Pacing, RoundOutcome, StandardPace};

/// Play one round of blackjack in the terminal.
#[derive(Parser)]
#[command(name = "twentyone", version, about)]
struct Args {
    /// Seed for the deck shuffle (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the pauses between lines of output
    #[arg(long)]
    fast: bool,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    debug!(seed, "shuffling the deck");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let deck = Deck::shuffled(&mut rng);

    let outcome = if args.fast {
        play(deck, NoPause)?
    } else {
        play(deck, StandardPace)?
    };
    debug!(?outcome, "round finished");

    Ok(())
}

fn play(deck: Deck, pacing: impl Pacing) -> Result<RoundOutcome, GameError> {
    let mut game = Game::new(deck, io::stdout(), Console::new(), pacing);
    game.run()
}
