//! Deck construction and dealing.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered deck of cards.
///
/// The top of the deck is the end of the internal sequence, so dealing is a
/// pop. A deck only ever shrinks; nothing is reshuffled back in.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a full 52-card deck and shuffles it with the given generator.
    #[must_use]
    pub fn shuffled(rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a deck that deals the given cards front to back.
    ///
    /// The first card in `draws` is the first card dealt.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, Deck, Rank, Suit};
    ///
    /// let ace = Card::new(Rank::Ace, Suit::Spades);
    /// let king = Card::new(Rank::King, Suit::Hearts);
    /// let mut deck = Deck::stacked(&[ace, king]);
    ///
    /// assert_eq!(deck.deal(), Some(ace));
    /// assert_eq!(deck.deal(), Some(king));
    /// assert_eq!(deck.deal(), None);
    /// ```
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        Self {
            cards: draws.iter().rev().copied().collect(),
        }
    }

    /// Removes and returns the top card, or `None` if the deck is exhausted.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
