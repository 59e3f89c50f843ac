//! Deck configuration options.

use alloc::vec::Vec;

use crate::card::{Rank, Suit};
use crate::palette::Color;

/// Configuration options for a [`Deck`](crate::Deck).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardtable::{DeckOptions, Rank, Suit};
///
/// let options = DeckOptions::default()
///     .with_decks(6)
///     .with_card_size(64, 90)
///     .with_suits(vec![Suit::Spades, Suit::Hearts]);
/// assert_eq!(options.total_cards(), 6 * 2 * 13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// Card width in pixels, padding included.
    pub width: i32,
    /// Card height in pixels, padding included.
    pub height: i32,
    /// Number of decks shuffled together.
    pub decks: u8,
    /// Table background; `None` uses the palette's `GREEN`.
    pub table_color: Option<Color>,
    /// Suits in each deck.
    pub suits: Vec<Suit>,
    /// Ranks in each suit.
    pub ranks: Vec<Rank>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            width: 48,
            height: 67,
            decks: 1,
            table_color: None,
            suits: Suit::ALL.to_vec(),
            ranks: Rank::ALL.to_vec(),
        }
    }
}

impl DeckOptions {
    /// Sets the card size.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_card_size(50, 70);
    /// assert_eq!((options.width, options.height), (50, 70));
    /// ```
    #[must_use]
    pub const fn with_card_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the card width and derives a 5:7 height from it.
    ///
    /// The height saturates at `i32::MAX`; [`Deck::new`](crate::Deck::new)
    /// rejects sizes that large.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_card_width(64);
    /// assert_eq!(options.height, 89);
    /// ```
    #[must_use]
    pub const fn with_card_width(mut self, width: i32) -> Self {
        self.width = width;
        self.height = width.saturating_mul(7) / 5;
        self
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the table color.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_table_color(0x0400);
    /// assert_eq!(options.table_color, Some(0x0400));
    /// ```
    #[must_use]
    pub const fn with_table_color(mut self, color: Color) -> Self {
        self.table_color = Some(color);
        self
    }

    /// Sets the suits in each deck.
    #[must_use]
    pub fn with_suits(mut self, suits: Vec<Suit>) -> Self {
        self.suits = suits;
        self
    }

    /// Sets the ranks in each suit.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::{DeckOptions, Rank};
    ///
    /// // A piquet deck.
    /// let options = DeckOptions::default().with_ranks(vec![
    ///     Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten,
    ///     Rank::Jack, Rank::Queen, Rank::King, Rank::Ace,
    /// ]);
    /// assert_eq!(options.total_cards(), 32);
    /// ```
    #[must_use]
    pub fn with_ranks(mut self, ranks: Vec<Rank>) -> Self {
        self.ranks = ranks;
        self
    }

    /// Returns the number of cards a deck built from these options holds.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.suits.len() * self.ranks.len() * usize::from(self.decks)
    }
}
