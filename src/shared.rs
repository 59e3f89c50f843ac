//! A deck that several threads can deal from.

use alloc::vec::Vec;

use crate::card::{Card, CardId};
use crate::deck::{Deck, Location};
use crate::error::{DiscardError, DrawError};
use crate::sync::Mutex;

/// A [`Deck`] behind one lock.
///
/// Draw, discard and shuffle each move ids between several partitions, so
/// they all run under the same lock. Use [`with`](Self::with) to run a
/// sequence of operations, such as dealing a whole hand, without another
/// thread drawing in between.
pub struct SharedDeck {
    deck: Mutex<Deck>,
}

impl SharedDeck {
    /// Wraps a deck.
    #[must_use]
    pub const fn new(deck: Deck) -> Self {
        Self {
            deck: Mutex::new(deck),
        }
    }

    /// Runs `f` with exclusive access to the deck.
    pub fn with<T>(&self, f: impl FnOnce(&mut Deck) -> T) -> T {
        let mut deck = self.deck.lock();
        f(&mut deck)
    }

    /// See [`Deck::shuffle`].
    pub fn shuffle(&self) {
        self.deck.lock().shuffle();
    }

    /// See [`Deck::draw_one`].
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards are left in the deck.
    pub fn draw_one(&self) -> Result<CardId, DrawError> {
        self.deck.lock().draw_one()
    }

    /// See [`Deck::draw`].
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if fewer than `count` cards remain.
    pub fn draw(&self, count: usize) -> Result<Vec<CardId>, DrawError> {
        self.deck.lock().draw(count)
    }

    /// See [`Deck::discard`].
    ///
    /// # Errors
    ///
    /// Returns [`DiscardError::NotInPlay`] if the card is not in play.
    pub fn discard(&self, id: CardId) -> Result<(), DiscardError> {
        self.deck.lock().discard(id)
    }

    /// Returns the number of cards left to draw.
    pub fn remaining(&self) -> usize {
        self.deck.lock().remaining()
    }

    /// Returns the partition holding the card.
    pub fn location(&self, id: CardId) -> Option<Location> {
        self.deck.lock().location(id)
    }

    /// Returns a copy of the card with the given id.
    pub fn card(&self, id: CardId) -> Option<Card> {
        self.deck.lock().card(id).cloned()
    }

    /// Returns the deck for direct use when no other thread can reach it.
    pub fn get_mut(&mut self) -> &mut Deck {
        self.deck.get_mut()
    }

    /// Unwraps the deck.
    #[must_use]
    pub fn into_inner(self) -> Deck {
        self.deck.into_inner()
    }
}

impl From<Deck> for SharedDeck {
    fn from(deck: Deck) -> Self {
        Self::new(deck)
    }
}
