//! A single-player blackjack round for the terminal.
//!
//! The crate models a 52-card deck, dual-valued Aces, and the classic
//! hit-or-stand loop against a dealer who must stand once 17 is reachable.
//! [`Game`] plays one full round over three injected capabilities: a
//! [`Write`](std::io::Write) sink for the table text, a [`PlayerInput`] for
//! hit-or-stand decisions, and a [`Pacing`] for the cosmetic pauses, so the
//! same engine drives the interactive binary and scripted tests.
//!
//! # Example
//!
//! ```no_run
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use twentyone::{Console, Deck, Game, StandardPace};
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let deck = Deck::shuffled(&mut rng);
//! let mut game = Game::new(deck, std::io::stdout(), Console::new(), StandardPace);
//! let outcome = game.run()?;
//! println!("{outcome:?}");
//! # Ok::<(), twentyone::GameError>(())
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod io;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{GameError, InvalidInput};
pub use game::Game;
pub use hand::{Hand, Totals};
pub use io::{Action, Console, NoPause, Pacing, PlayerInput, StandardPace};
pub use result::{RoundOutcome, TurnOutcome};
