//! Player and dealer hands.

use core::ops::{Deref, DerefMut};

use crate::deck::Deck;
use crate::error::CardError;
use crate::pile::{Pile, PileLayout};
use crate::render::{DirtyRegion, Renderer, SurfaceId};
use crate::score::{self, Evaluation};

/// A pile that belongs to a player or to the dealer.
///
/// Derefs to [`Pile`] for placement and inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    pile: Pile,
    is_dealer: bool,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new(is_dealer: bool, surface: SurfaceId, layout: PileLayout) -> Self {
        Self {
            pile: Pile::new(surface, layout),
            is_dealer,
        }
    }

    /// Returns whether this is the dealer's hand.
    #[must_use]
    pub const fn is_dealer(&self) -> bool {
        self.is_dealer
    }

    /// Turns every card in the hand face up and redraws it.
    ///
    /// Returns the union of the redrawn areas.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownCard`] if the hand holds an id that is not
    /// from `deck`. Cards before it have already been turned up.
    pub fn reveal<R: Renderer + ?Sized>(
        &self,
        deck: &mut Deck,
        renderer: &mut R,
    ) -> Result<DirtyRegion, CardError> {
        self.pile
            .in_pile()
            .iter()
            .try_fold(DirtyRegion::EMPTY, |dirty, &id| {
                Ok(dirty.union(deck.set_hidden(id, false, &mut *renderer)?))
            })
    }

    /// Scores the hand, including face-down cards.
    #[must_use]
    pub fn evaluate(&self, deck: &Deck) -> Evaluation {
        score::evaluate_ranks(
            self.pile
                .in_pile()
                .iter()
                .filter_map(|&id| deck.card(id))
                .map(|card| card.rank()),
        )
    }

    /// Returns the blackjack total of the hand.
    #[must_use]
    pub fn score(&self, deck: &Deck) -> u16 {
        self.evaluate(deck).total
    }

    /// Returns the total of the face-up cards only, as the table sees it.
    #[must_use]
    pub fn visible_score(&self, deck: &Deck) -> u16 {
        score::evaluate_ranks(
            self.pile
                .in_pile()
                .iter()
                .filter_map(|&id| deck.card(id))
                .filter(|card| !card.is_hidden())
                .map(|card| card.rank()),
        )
        .total
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self, deck: &Deck) -> bool {
        self.evaluate(deck).is_bust()
    }
}

impl Deref for Hand {
    type Target = Pile;

    fn deref(&self) -> &Self::Target {
        &self.pile
    }
}

impl DerefMut for Hand {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.pile
    }
}
