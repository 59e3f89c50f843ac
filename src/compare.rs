//! Card ranking for "higher card wins" games.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::{Card, Rank, Suit};

/// Decides which of two cards ranks higher.
///
/// Suits are compared first when a suit order is configured, then ranks by
/// their position in the rank order. In both lists a later entry ranks
/// higher, and anything missing from a list ranks below everything in it.
///
/// The default rank order is Ace through King, so Aces are low:
///
/// ```
/// use core::cmp::Ordering;
/// use cardtable::{Card, ComparisonPolicy, Rank, Suit};
///
/// let policy = ComparisonPolicy::default();
/// let ace = Card::new(Suit::Spades, Rank::Ace);
/// let king = Card::new(Suit::Spades, Rank::King);
/// assert_eq!(policy.compare(&ace, &king), Ordering::Less);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonPolicy {
    /// Suits from lowest to highest. Empty means suits never matter; a single
    /// entry makes that suit trump.
    pub suit_order: Vec<Suit>,
    /// Ranks from lowest to highest.
    pub rank_order: Vec<Rank>,
}

impl Default for ComparisonPolicy {
    fn default() -> Self {
        Self {
            suit_order: Vec::new(),
            rank_order: Rank::ALL.to_vec(),
        }
    }
}

impl ComparisonPolicy {
    /// Rank order with Aces above Kings.
    pub const ACES_HIGH: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Makes `suit` trump: it beats every other suit, which tie with each other.
    #[must_use]
    pub fn with_trump(mut self, suit: Suit) -> Self {
        self.suit_order = alloc::vec![suit];
        self
    }

    /// Sets the suit order, lowest first.
    #[must_use]
    pub fn with_suit_order(mut self, suits: Vec<Suit>) -> Self {
        self.suit_order = suits;
        self
    }

    /// Sets the rank order, lowest first.
    #[must_use]
    pub fn with_rank_order(mut self, ranks: Vec<Rank>) -> Self {
        self.rank_order = ranks;
        self
    }

    /// Sets the rank order to Two through King followed by Ace.
    #[must_use]
    pub fn aces_high(self) -> Self {
        self.with_rank_order(Self::ACES_HIGH.to_vec())
    }

    fn suit_score(&self, suit: Suit) -> usize {
        self.suit_order
            .iter()
            .position(|&s| s == suit)
            .map_or(0, |index| index + 1)
    }

    fn rank_score(&self, rank: Rank) -> usize {
        self.rank_order
            .iter()
            .position(|&r| r == rank)
            .map_or(0, |index| index + 1)
    }

    /// Compares two cards; `Greater` means `first` wins.
    #[must_use]
    pub fn compare(&self, first: &Card, second: &Card) -> Ordering {
        self.suit_score(first.suit())
            .cmp(&self.suit_score(second.suit()))
            .then_with(|| {
                self.rank_score(first.rank())
                    .cmp(&self.rank_score(second.rank()))
            })
    }

    /// Returns whether `first` strictly beats `second`.
    #[must_use]
    pub fn beats(&self, first: &Card, second: &Card) -> bool {
        self.compare(first, second) == Ordering::Greater
    }

    /// Returns the index of the highest card, the earliest one on ties.
    #[must_use]
    pub fn highest(&self, cards: &[Card]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (index, card) in cards.iter().enumerate() {
            match best {
                Some(current) if !self.beats(card, &cards[current]) => {}
                _ => best = Some(index),
            }
        }
        best
    }
}
