//! Outcome types for turns and the finished round.

use std::fmt;

/// Terminal state of one party's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The party stood at the given total, 21 or less.
    Stand(u32),
    /// Every reading of the hand exceeds 21.
    Bust,
}

impl TurnOutcome {
    /// Returns the stand total, or `None` for a bust.
    #[must_use]
    pub const fn total(self) -> Option<u32> {
        match self {
            Self::Stand(total) => Some(total),
            Self::Bust => None,
        }
    }
}

impl fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stand(total) => write!(f, "{total}"),
            Self::Bust => f.write_str("Bust"),
        }
    }
}

/// How the round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player was dealt 21 and won on the spot.
    PlayerBlackjack,
    /// The dealer was dealt 21 and the player was not; the round is lost.
    DealerBlackjack,
    /// The player busted, so the dealer won without playing.
    PlayerBust,
    /// The dealer busted after the player stood.
    DealerBust,
    /// The player's total beat the dealer's.
    PlayerWin,
    /// The dealer's total beat the player's.
    DealerWin,
    /// Both parties stood on the same total.
    Push,
}
