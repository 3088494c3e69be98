//! Interactive capabilities: player decisions and output pacing.
//!
//! The round talks to the outside world through two small traits so that
//! tests can script the player and drop the cosmetic pauses.

use std::io::{self, Write};
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use crate::error::InvalidInput;

/// A player's decision at the hit-or-stand prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw another card.
    Hit,
    /// Keep the current hand and end the turn.
    Stand,
}

impl FromStr for Action {
    type Err = InvalidInput;

    /// Parses the prompt tokens `h` and `s`, case-insensitively, ignoring
    /// surrounding whitespace. Everything else is invalid, including the
    /// longhand words.
    ///
    /// ```
    /// use twentyone::Action;
    ///
    /// assert_eq!(" H ".parse::<Action>(), Ok(Action::Hit));
    /// assert_eq!("s\n".parse::<Action>(), Ok(Action::Stand));
    /// assert!("hit".parse::<Action>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h" => Ok(Self::Hit),
            "s" => Ok(Self::Stand),
            _ => Err(InvalidInput),
        }
    }
}

/// Source of player decisions.
pub trait PlayerInput {
    /// Returns the player's next decision.
    ///
    /// Implementations only return on a valid choice; recovering from
    /// invalid text happens behind this boundary.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying source fails or closes before a
    /// choice is made.
    fn hit_or_stand(&mut self) -> io::Result<Action>;
}

/// Interactive prompt on stdin and stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

impl Console {
    /// Creates a console prompt.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PlayerInput for Console {
    fn hit_or_stand(&mut self) -> io::Result<Action> {
        loop {
            print!("Do you want to hit or stand? (h/s): ");
            io::stdout().flush()?;

            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a choice was made",
                ));
            }
            if let Ok(action) = line.parse() {
                return Ok(action);
            }
        }
    }
}

/// Pacing of the table output.
///
/// Pauses are purely cosmetic; game logic never depends on them.
pub trait Pacing {
    /// Waits for the given duration before the next line of output.
    fn pause(&mut self, duration: Duration);
}

/// Real-time pacing that sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPace;

impl Pacing for StandardPace {
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Pacing that never waits. Used by tests and fast, non-interactive runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl Pacing for NoPause {
    fn pause(&mut self, _duration: Duration) {}
}
