//! Error types for deck and pile operations.

use thiserror::Error;

/// Errors that can occur while building a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The suit list is empty.
    #[error("no suits configured")]
    NoSuits,
    /// The rank list is empty.
    #[error("no ranks configured")]
    NoRanks,
    /// The deck count is zero.
    #[error("deck count must be at least one")]
    NoDecks,
    /// The card width or height is not positive or exceeds
    /// [`MAX_DIMENSION`](crate::layout::MAX_DIMENSION).
    #[error("card dimensions must be between 1 and 32767")]
    InvalidDimensions,
    /// The palette lacks a color the theme needs.
    #[error("palette has no color named {0}")]
    MissingColor(&'static str),
}

/// Errors that can occur while drawing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Not enough cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur while discarding a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// The card is not in play.
    #[error("card is not in play")]
    NotInPlay,
}

/// Errors that can occur while presenting a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The id does not belong to this deck.
    #[error("card does not belong to this deck")]
    UnknownCard,
}
