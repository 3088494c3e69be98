//! Hand storage and total evaluation.

use std::collections::BTreeSet;
use std::fmt;

use crate::card::Card;

/// An ordered hand of cards belonging to one party.
///
/// A hand only ever grows: cards are appended as they are dealt and never
/// removed or reordered. Totals are derived on demand, never cached.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a dealt card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Computes every total this hand can be worth.
    ///
    /// Sums are folded left to right: a non-Ace card adds its fixed value to
    /// every sum accumulated so far, while an Ace branches every sum into a
    /// `+1` and a `+11` successor. Coinciding sums collapse, so a hand with
    /// `k` Aces yields at most `2^k` distinct totals.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Rank::Ace, Suit::Spades));
    /// hand.add_card(Card::new(Rank::Four, Suit::Hearts));
    ///
    /// let totals = hand.possible_totals();
    /// assert_eq!(totals.to_string(), "5 or 15");
    /// assert_eq!(totals.best(), 15);
    /// ```
    #[must_use]
    pub fn possible_totals(&self) -> Totals {
        let mut sums = BTreeSet::from([0]);
        for card in &self.cards {
            let mut next = BTreeSet::new();
            if card.rank.is_ace() {
                for sum in sums {
                    next.insert(sum + 1);
                    next.insert(sum + 11);
                }
            } else {
                for sum in sums {
                    next.insert(sum + card.value());
                }
            }
            sums = next;
        }
        Totals { sums }
    }

    /// Returns the best total for this hand. See [`Totals::best`].
    #[must_use]
    pub fn best_total(&self) -> u32 {
        self.possible_totals().best()
    }

    /// Returns whether the hand's best total is exactly 21.
    #[must_use]
    pub fn is_twenty_one(&self) -> bool {
        self.best_total() == 21
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards: Vec<String> = self.cards.iter().map(ToString::to_string).collect();
        f.write_str(&cards.join(", "))
    }
}

/// Every total a hand can be worth, given each Ace counting as 1 or 11.
///
/// The set is never empty: an empty hand has the single total 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    sums: BTreeSet<u32>,
}

impl Totals {
    /// Returns the best total under the soft-hand rule.
    ///
    /// This is the highest sum that does not exceed 21. If every sum busts,
    /// it is the minimum sum instead, which reports how little the hand
    /// could have been worth.
    #[must_use]
    pub fn best(&self) -> u32 {
        self.sums
            .iter()
            .rev()
            .copied()
            .find(|&sum| sum <= 21)
            .unwrap_or_else(|| self.min())
    }

    /// Returns the lowest sum, with every Ace counted as 1.
    #[must_use]
    pub fn min(&self) -> u32 {
        self.sums.first().copied().unwrap_or(0)
    }

    /// Returns whether every sum exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.min() > 21
    }

    /// Returns whether `total` is among the achievable sums.
    #[must_use]
    pub fn contains(&self, total: u32) -> bool {
        self.sums.contains(&total)
    }

    /// Returns whether every achievable sum is below `limit`.
    #[must_use]
    pub fn all_below(&self, limit: u32) -> bool {
        self.sums.iter().all(|&sum| sum < limit)
    }

    /// Returns the number of distinct sums.
    #[must_use]
    pub fn count(&self) -> usize {
        self.sums.len()
    }

    /// Iterates the sums in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.sums.iter().copied()
    }
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let valid: Vec<String> = self
            .sums
            .iter()
            .filter(|&&sum| sum <= 21)
            .map(ToString::to_string)
            .collect();
        if valid.is_empty() {
            write!(f, "{}", self.min())
        } else {
            f.write_str(&valid.join(" or "))
        }
    }
}
