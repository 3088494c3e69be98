//! Error types for game operations.

use thiserror::Error;

/// Errors that can end a round early.
#[derive(Debug, Error)]
pub enum GameError {
    /// The deck ran out of cards mid-deal.
    ///
    /// One round between two parties cannot realistically drain a 52-card
    /// deck, so this only surfaces with an artificially short deck.
    #[error("the deck is empty")]
    DeckExhausted,
    /// Writing the table text or reading the player failed.
    #[error("table i/o failed")]
    Io(#[from] std::io::Error),
}

/// Rejected text at the hit-or-stand prompt.
///
/// Never fatal at the console, which recovers by asking again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected 'h' to hit or 's' to stand")]
pub struct InvalidInput;
