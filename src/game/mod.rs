//! The round orchestrator.

use std::io::{self, Write};
use std::time::Duration;

use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::GameError;
use crate::hand::Hand;
use crate::io::{Pacing, PlayerInput};
use crate::result::{RoundOutcome, TurnOutcome};

mod dealer;
mod player;

/// One beat between lines of table output.
const BEAT: Duration = Duration::from_secs(1);
/// Shorter pause before a bust is announced.
const HALF_BEAT: Duration = Duration::from_millis(500);
/// Reading time after the rules text.
const RULES_PAUSE: Duration = Duration::from_secs(3);

/// A single round of blackjack against the automated dealer.
///
/// The game owns the deck and both hands and reaches the outside world
/// through three injected capabilities: a [`Write`] sink for the table text,
/// a [`PlayerInput`] for hit-or-stand decisions, and a [`Pacing`] for the
/// cosmetic pauses between lines. Swapping the capabilities is how the same
/// engine drives both the interactive binary and scripted tests.
pub struct Game<W, I, P> {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    out: W,
    input: I,
    pacing: P,
}

impl<W: Write, I: PlayerInput, P: Pacing> Game<W, I, P> {
    /// Creates a round that will deal from the given deck.
    #[must_use]
    pub fn new(deck: Deck, out: W, input: I, pacing: P) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            out,
            input,
            pacing,
        }
    }

    /// Plays the round from the welcome banner to the outcome line.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DeckExhausted`] if the deck runs out mid-round
    /// and [`GameError::Io`] if the table text cannot be written or the
    /// player cannot be read.
    pub fn run(&mut self) -> Result<RoundOutcome, GameError> {
        self.welcome()?;
        self.deal_initial()?;

        writeln!(
            self.out,
            "Dealer visible card:\n  - {}\n",
            self.dealer.cards()[0]
        )?;
        self.pacing.pause(BEAT);

        writeln!(self.out, "Your hand:")?;
        list_cards(&mut self.out, &self.player)?;
        writeln!(self.out)?;
        self.pacing.pause(BEAT);

        if self.player.is_twenty_one() {
            writeln!(self.out, "You win! You got 21!")?;
            debug!("player dealt a natural 21");
            return Ok(RoundOutcome::PlayerBlackjack);
        }
        if self.dealer.is_twenty_one() {
            writeln!(self.out, "Dealer flips {}", self.dealer.cards()[1])?;
            writeln!(self.out, "You lose! Dealer got 21!")?;
            debug!("dealer dealt a natural 21");
            return Ok(RoundOutcome::DealerBlackjack);
        }

        let player_total = match self.player_turn()? {
            TurnOutcome::Stand(total) => total,
            TurnOutcome::Bust => {
                banner(&mut self.out, "              Final Result")?;
                writeln!(self.out, "You bust! Dealer wins!")?;
                return Ok(RoundOutcome::PlayerBust);
            }
        };

        let dealer_outcome = self.dealer_turn()?;

        banner(&mut self.out, "              Final Result")?;
        self.pacing.pause(BEAT);
        writeln!(self.out, "Your final total: {player_total}")?;
        writeln!(self.out, "Dealer final total: {dealer_outcome}\n")?;
        self.pacing.pause(BEAT);

        let outcome = match dealer_outcome {
            TurnOutcome::Bust => {
                writeln!(self.out, "Dealer busts! You win!")?;
                RoundOutcome::DealerBust
            }
            TurnOutcome::Stand(dealer_total) if player_total > dealer_total => {
                writeln!(self.out, "You win!")?;
                RoundOutcome::PlayerWin
            }
            TurnOutcome::Stand(dealer_total) if player_total < dealer_total => {
                writeln!(self.out, "You lose!")?;
                RoundOutcome::DealerWin
            }
            TurnOutcome::Stand(_) => {
                writeln!(self.out, "It's a push (tie)!")?;
                RoundOutcome::Push
            }
        };
        Ok(outcome)
    }

    /// Prints the welcome banner and the table rules.
    fn welcome(&mut self) -> Result<(), GameError> {
        banner(&mut self.out, "         Welcome to Blackjack!")?;
        self.pacing.pause(BEAT);

        writeln!(
            self.out,
            "Goal: Get as close to 21 as possible without going over."
        )?;
        writeln!(self.out, "Rules:")?;
        writeln!(self.out, " - Number cards are worth their value (2-10).")?;
        writeln!(
            self.out,
            " - Face cards (Jack, Queen, King) are worth 10 points."
        )?;
        writeln!(
            self.out,
            " - Aces can be worth 1 or 11 points, whichever helps you more."
        )?;
        writeln!(self.out, " - If you are dealt 21, you win immediately!")?;
        writeln!(self.out, " - If you go over 21, you bust and lose.")?;
        writeln!(self.out, " - Dealer must stand on 17 or higher.")?;
        writeln!(
            self.out,
            " - If you and dealer have the same total, it's a tie (push).\n"
        )?;
        self.pacing.pause(RULES_PAUSE);
        Ok(())
    }

    /// Deals the opening hands, alternating dealer, player, dealer, player.
    fn deal_initial(&mut self) -> Result<(), GameError> {
        for _ in 0..2 {
            let card = self.draw()?;
            self.dealer.add_card(card);
            let card = self.draw()?;
            self.player.add_card(card);
        }
        debug!(dealer = %self.dealer, player = %self.player, "initial hands dealt");
        Ok(())
    }

    /// Draws the top card of the deck.
    fn draw(&mut self) -> Result<Card, GameError> {
        self.deck.deal().ok_or(GameError::DeckExhausted)
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}

/// Writes one `  - {card}` line per card, in deal order.
fn list_cards<W: Write>(out: &mut W, hand: &Hand) -> io::Result<()> {
    for card in hand.cards() {
        writeln!(out, "  - {card}")?;
    }
    Ok(())
}

/// Writes a 40-column banner around the given title line.
fn banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let line = "=".repeat(40);
    writeln!(out, "{line}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{line}\n")?;
    Ok(())
}
