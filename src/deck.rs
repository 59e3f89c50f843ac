//! The card universe and the partitions its cards move through.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::{Card, CardId};
use crate::error::{CardError, ConfigError, DiscardError, DrawError};
use crate::layout::{Layout, MAX_DIMENSION};
use crate::options::DeckOptions;
use crate::palette::{Palette, Theme};
use crate::render::{DirtyRegion, Placement, Renderer};

/// Where a card currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Waiting to be drawn.
    InDeck,
    /// Drawn and on the table.
    InPlay,
    /// Discarded.
    InDiscard,
}

/// Every card of one or more decks, partitioned into in-deck, in-play and
/// in-discard.
///
/// Cards live in a fixed arena and are addressed by [`CardId`]. Each card is
/// in exactly one partition; drawing and discarding move ids between them.
#[derive(Debug, Clone)]
pub struct Deck {
    options: DeckOptions,
    cards: Vec<Card>,
    locations: Vec<Location>,
    in_deck: Vec<CardId>,
    in_play: Vec<CardId>,
    in_discard: Vec<CardId>,
    layout: Layout,
    theme: Theme,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Builds a fresh deck with every card in-deck.
    ///
    /// The seed fixes the draw sequence, so two decks built from the same
    /// options and seed deal identically.
    ///
    /// # Errors
    ///
    /// Returns an error if the suit or rank list is empty, the deck count is
    /// zero, the card size is not positive, or the palette lacks a color the
    /// theme needs.
    pub fn new<P: Palette + ?Sized>(
        options: DeckOptions,
        palette: &P,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        if options.suits.is_empty() {
            return Err(ConfigError::NoSuits);
        }
        if options.ranks.is_empty() {
            return Err(ConfigError::NoRanks);
        }
        if options.decks == 0 {
            return Err(ConfigError::NoDecks);
        }
        let valid = 1..=MAX_DIMENSION;
        if !valid.contains(&options.width) || !valid.contains(&options.height) {
            return Err(ConfigError::InvalidDimensions);
        }

        let theme = Theme::from_palette(palette, options.table_color)?;
        let layout = Layout::new(options.width, options.height);

        let mut cards = Vec::with_capacity(options.total_cards());
        for &suit in &options.suits {
            for &rank in &options.ranks {
                for _ in 0..options.decks {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        debug!(
            cards = cards.len(),
            decks = options.decks,
            seed,
            "deck built"
        );

        let mut deck = Self {
            locations: Vec::with_capacity(cards.len()),
            in_deck: Vec::with_capacity(cards.len()),
            in_play: Vec::new(),
            in_discard: Vec::new(),
            cards,
            options,
            layout,
            theme,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.shuffle();
        Ok(deck)
    }

    /// Returns every card to the deck and empties the table and discards.
    ///
    /// Order is not randomized here; randomness enters when drawing.
    pub fn shuffle(&mut self) {
        self.in_deck.clear();
        self.in_deck.extend((0..self.cards.len()).map(CardId));
        self.in_play.clear();
        self.in_discard.clear();
        self.locations.clear();
        self.locations.resize(self.cards.len(), Location::InDeck);
        debug!(cards = self.cards.len(), "deck shuffled");
    }

    /// Draws a uniformly random card from the deck and puts it in play.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards are left in the deck. The
    /// partitions are unchanged in that case.
    pub fn draw_one(&mut self) -> Result<CardId, DrawError> {
        if self.in_deck.is_empty() {
            debug!("draw from empty deck");
            return Err(DrawError::EmptyDeck);
        }

        let pick = self.rng.random_range(0..self.in_deck.len());
        let id = self.in_deck.swap_remove(pick);
        self.locations[id.index()] = Location::InPlay;
        self.in_play.push(id);
        trace!(card = id.index(), remaining = self.in_deck.len(), "card drawn");
        Ok(id)
    }

    /// Draws `count` cards.
    ///
    /// The batch is all or nothing: if the deck holds fewer than `count`
    /// cards nothing is drawn.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if fewer than `count` cards remain.
    pub fn draw(&mut self, count: usize) -> Result<Vec<CardId>, DrawError> {
        if count > self.in_deck.len() {
            debug!(
                requested = count,
                remaining = self.in_deck.len(),
                "batch draw exceeds deck"
            );
            return Err(DrawError::EmptyDeck);
        }

        (0..count).map(|_| self.draw_one()).collect()
    }

    /// Moves a card from play to the discards.
    ///
    /// # Errors
    ///
    /// Returns [`DiscardError::NotInPlay`] if the card is not in play,
    /// including ids that do not belong to this deck.
    pub fn discard(&mut self, id: CardId) -> Result<(), DiscardError> {
        if self.location(id) != Some(Location::InPlay) {
            return Err(DiscardError::NotInPlay);
        }
        let position = self
            .in_play
            .iter()
            .position(|&card| card == id)
            .ok_or(DiscardError::NotInPlay)?;

        self.in_play.remove(position);
        self.locations[id.index()] = Location::InDiscard;
        self.in_discard.push(id);
        trace!(card = id.index(), "card discarded");
        Ok(())
    }

    /// Returns the options the deck was built from.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }

    /// Returns the card geometry.
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the colors resolved from the palette.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Returns the total number of cards across all partitions.
    #[must_use]
    pub fn total(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.in_deck.len()
    }

    /// Returns whether no cards are left to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.in_deck.is_empty()
    }

    /// Returns the cards left to draw, in no particular order.
    #[must_use]
    pub fn in_deck(&self) -> &[CardId] {
        &self.in_deck
    }

    /// Returns the cards in play, oldest draw first.
    #[must_use]
    pub fn in_play(&self) -> &[CardId] {
        &self.in_play
    }

    /// Returns the discarded cards, oldest discard first.
    #[must_use]
    pub fn in_discard(&self) -> &[CardId] {
        &self.in_discard
    }

    /// Iterates over every card with its id.
    pub fn all_cards(&self) -> impl Iterator<Item = (CardId, &Card)> + '_ {
        self.cards
            .iter()
            .enumerate()
            .map(|(index, card)| (CardId(index), card))
    }

    /// Returns the partition holding the card.
    #[must_use]
    pub fn location(&self, id: CardId) -> Option<Location> {
        self.locations.get(id.index()).copied()
    }

    /// Returns the card with the given id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Returns the card with the given id for a state change such as
    /// [`Card::flip`]. Follow up with [`sync`](Self::sync) to redraw it.
    #[must_use]
    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.index())
    }

    /// Returns the most recently drawn in-play card covering the point.
    #[must_use]
    pub fn card_at(&self, x: i32, y: i32) -> Option<CardId> {
        self.in_play
            .iter()
            .rev()
            .copied()
            .find(|id| self.cards[id.index()].hit_test(x, y, &self.layout))
    }

    /// Records the card at `placement` and draws it there.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownCard`] if the id is not from this deck.
    pub fn render<R: Renderer + ?Sized>(
        &mut self,
        id: CardId,
        renderer: &mut R,
        placement: Placement,
    ) -> Result<DirtyRegion, CardError> {
        let card = self
            .cards
            .get_mut(id.index())
            .ok_or(CardError::UnknownCard)?;
        card.set_placement(placement);
        Ok(renderer.render(card, placement, &self.layout, &self.theme))
    }

    /// Redraws the card where it was last drawn, using its current visibility.
    ///
    /// A card that was never drawn produces an empty region.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownCard`] if the id is not from this deck.
    pub fn sync<R: Renderer + ?Sized>(
        &self,
        id: CardId,
        renderer: &mut R,
    ) -> Result<DirtyRegion, CardError> {
        let card = self.card(id).ok_or(CardError::UnknownCard)?;
        Ok(card.placement().map_or(DirtyRegion::EMPTY, |placement| {
            renderer.render(card, placement, &self.layout, &self.theme)
        }))
    }

    /// Sets the card's visibility and redraws it in place.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownCard`] if the id is not from this deck.
    pub fn set_hidden<R: Renderer + ?Sized>(
        &mut self,
        id: CardId,
        hidden: bool,
        renderer: &mut R,
    ) -> Result<DirtyRegion, CardError> {
        self.card_mut(id)
            .ok_or(CardError::UnknownCard)?
            .set_hidden(hidden);
        self.sync(id, renderer)
    }

    /// Paints over the card and forgets where it was drawn.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownCard`] if the id is not from this deck.
    pub fn erase<R: Renderer + ?Sized>(
        &mut self,
        id: CardId,
        renderer: &mut R,
    ) -> Result<DirtyRegion, CardError> {
        let card = self
            .cards
            .get_mut(id.index())
            .ok_or(CardError::UnknownCard)?;
        let Some(placement) = card.placement() else {
            return Ok(DirtyRegion::EMPTY);
        };
        card.clear_placement();
        Ok(renderer.erase(placement, &self.layout, &self.theme))
    }

    /// Erases every drawn in-play card from the table.
    pub fn clear_table<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> DirtyRegion {
        let mut dirty = DirtyRegion::EMPTY;
        for &id in &self.in_play {
            let card = &mut self.cards[id.index()];
            if let Some(placement) = card.placement() {
                card.clear_placement();
                dirty = dirty.union(renderer.erase(placement, &self.layout, &self.theme));
            }
        }
        dirty
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeSet;

    use super::*;
    use crate::card::{Rank, Suit};
    use crate::palette::PaletteFn;
    use crate::render::{NullRenderer, SurfaceId};

    fn palette() -> impl Palette {
        PaletteFn(|_: &str| Some(0_u32))
    }

    fn deck(seed: u64) -> Deck {
        Deck::new(DeckOptions::default(), &palette(), seed).unwrap()
    }

    fn assert_conserved(deck: &Deck) {
        assert_eq!(
            deck.in_deck().len() + deck.in_play().len() + deck.in_discard().len(),
            deck.total()
        );
    }

    #[test]
    fn rejects_bad_configuration() {
        let p = palette();
        let no_suits = DeckOptions::default().with_suits(alloc::vec![]);
        assert_eq!(Deck::new(no_suits, &p, 0).unwrap_err(), ConfigError::NoSuits);
        let no_ranks = DeckOptions::default().with_ranks(alloc::vec![]);
        assert_eq!(Deck::new(no_ranks, &p, 0).unwrap_err(), ConfigError::NoRanks);
        let no_decks = DeckOptions::default().with_decks(0);
        assert_eq!(Deck::new(no_decks, &p, 0).unwrap_err(), ConfigError::NoDecks);
        let flat = DeckOptions::default().with_card_size(40, 0);
        assert_eq!(
            Deck::new(flat, &p, 0).unwrap_err(),
            ConfigError::InvalidDimensions
        );
        let huge = DeckOptions::default().with_card_size(300_000_000, 70);
        assert_eq!(
            Deck::new(huge, &p, 0).unwrap_err(),
            ConfigError::InvalidDimensions
        );
        let too_tall = DeckOptions::default().with_card_width(i32::MAX);
        assert_eq!(
            Deck::new(too_tall, &p, 0).unwrap_err(),
            ConfigError::InvalidDimensions
        );
        let largest = DeckOptions::default().with_card_size(MAX_DIMENSION, MAX_DIMENSION);
        assert!(Deck::new(largest, &p, 0).is_ok());
    }

    #[test]
    fn multi_deck_keeps_duplicates_distinct() {
        let options = DeckOptions::default()
            .with_decks(2)
            .with_suits(alloc::vec![Suit::Hearts])
            .with_ranks(alloc::vec![Rank::Ace]);
        let mut deck = Deck::new(options, &palette(), 3).unwrap();
        assert_eq!(deck.total(), 2);

        let first = deck.draw_one().unwrap();
        let second = deck.draw_one().unwrap();
        assert_ne!(first, second);
        assert_eq!(deck.card(first), deck.card(second));
    }

    #[test]
    fn draining_enumerates_every_card_once() {
        let mut deck = deck(11);
        let mut seen = BTreeSet::new();
        while let Ok(id) = deck.draw_one() {
            assert!(seen.insert(id));
            assert_conserved(&deck);
        }
        assert_eq!(seen.len(), 52);
        assert!(deck.is_empty());
    }

    #[test]
    fn empty_draw_leaves_partitions_alone() {
        let mut deck = deck(5);
        let all = deck.draw(52).unwrap();
        deck.discard(all[0]).unwrap();

        assert_eq!(deck.draw_one().unwrap_err(), DrawError::EmptyDeck);
        assert_eq!(deck.in_play().len(), 51);
        assert_eq!(deck.in_discard().len(), 1);
    }

    #[test]
    fn oversized_batch_draws_nothing() {
        let mut deck = deck(5);
        deck.draw(50).unwrap();
        assert_eq!(deck.draw(3).unwrap_err(), DrawError::EmptyDeck);
        assert_eq!(deck.remaining(), 2);
        assert_eq!(deck.in_play().len(), 50);
    }

    #[test]
    fn discard_requires_in_play() {
        let mut deck = deck(8);
        let waiting = deck.in_deck()[0];
        assert_eq!(deck.discard(waiting).unwrap_err(), DiscardError::NotInPlay);

        let drawn = deck.draw_one().unwrap();
        deck.discard(drawn).unwrap();
        assert_eq!(deck.location(drawn), Some(Location::InDiscard));
        assert_eq!(deck.discard(drawn).unwrap_err(), DiscardError::NotInPlay);
        assert_eq!(
            deck.discard(CardId(10_000)).unwrap_err(),
            DiscardError::NotInPlay
        );
        assert_conserved(&deck);
    }

    #[test]
    fn shuffle_restores_and_is_idempotent() {
        let mut deck = deck(9);
        let drawn = deck.draw(10).unwrap();
        deck.discard(drawn[3]).unwrap();

        deck.shuffle();
        let once: Vec<_> = deck.in_deck().to_vec();
        assert_eq!(once.len(), 52);
        assert!(deck.in_play().is_empty());
        assert!(deck.in_discard().is_empty());

        deck.shuffle();
        assert_eq!(deck.in_deck(), once.as_slice());
        assert!(deck.all_cards().all(|(id, _)| deck.location(id) == Some(Location::InDeck)));
    }

    #[test]
    fn same_seed_deals_same_cards() {
        let mut a = deck(42);
        let mut b = deck(42);
        assert_eq!(a.draw(10).unwrap(), b.draw(10).unwrap());
    }

    #[test]
    fn different_seeds_deal_different_cards() {
        let mut a = deck(1);
        let mut b = deck(2);
        assert_ne!(a.draw(10).unwrap(), b.draw(10).unwrap());
    }

    #[test]
    fn first_draw_is_spread_across_the_deck() {
        let firsts: alloc::collections::BTreeSet<_> =
            (0..300).map(|seed| deck(seed).draw_one().unwrap()).collect();
        // 300 uniform picks from 52 miss a given card with odds near 3e-3.
        assert!(firsts.len() > 40, "only {} distinct first cards", firsts.len());
    }

    #[test]
    fn draw_picks_from_the_whole_remaining_deck() {
        let mut deck = deck(9);
        let order: Vec<usize> = (0..52).map(|_| deck.draw_one().unwrap().index()).collect();
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..52).collect::<Vec<_>>());
        let ascending = (0..52).collect::<Vec<_>>();
        let descending = (0..52).rev().collect::<Vec<_>>();
        assert_ne!(order, ascending);
        assert_ne!(order, descending);
    }

    #[test]
    fn render_records_placement_and_card_at_finds_it() {
        let mut deck = deck(1);
        let id = deck.draw_one().unwrap();
        let placement = Placement {
            surface: SurfaceId(2),
            x: 100,
            y: 40,
            hidden: true,
        };
        let dirty = deck.render(id, &mut NullRenderer, placement).unwrap();
        assert_eq!(dirty, deck.layout().body(100, 40));

        let card = deck.card(id).unwrap();
        assert_eq!(card.position(), Some((100, 40)));
        assert_eq!(card.surface(), Some(SurfaceId(2)));
        assert!(card.is_hidden());
        assert_eq!(deck.card_at(101, 41), Some(id));
        assert_eq!(deck.card_at(0, 0), None);
    }

    #[test]
    fn set_hidden_redraws_in_place() {
        let mut deck = deck(1);
        let id = deck.draw_one().unwrap();
        assert_eq!(
            deck.set_hidden(id, true, &mut NullRenderer).unwrap(),
            DirtyRegion::EMPTY
        );

        let placement = Placement {
            surface: SurfaceId(0),
            x: 0,
            y: 0,
            hidden: false,
        };
        deck.render(id, &mut NullRenderer, placement).unwrap();
        let dirty = deck.set_hidden(id, true, &mut NullRenderer).unwrap();
        assert_eq!(dirty, deck.layout().body(0, 0));
        assert!(deck.card(id).unwrap().is_hidden());
    }

    #[test]
    fn clear_table_erases_drawn_cards() {
        let mut deck = deck(1);
        let ids = deck.draw(2).unwrap();
        for (i, &id) in ids.iter().enumerate() {
            let placement = Placement {
                surface: SurfaceId(0),
                x: 60 * i32::try_from(i).unwrap(),
                y: 0,
                hidden: false,
            };
            deck.render(id, &mut NullRenderer, placement).unwrap();
        }

        let dirty = deck.clear_table(&mut NullRenderer);
        assert_eq!(
            dirty,
            deck.layout().erase_area(0, 0).union(deck.layout().erase_area(60, 0))
        );
        assert!(ids.iter().all(|&id| deck.card(id).unwrap().position().is_none()));
        assert_eq!(deck.card_at(1, 1), None);
    }

    #[test]
    fn unknown_ids_are_rejected_by_presentation_calls() {
        let mut deck = deck(1);
        assert_eq!(
            deck.sync(CardId(999), &mut NullRenderer).unwrap_err(),
            CardError::UnknownCard
        );
        assert_eq!(
            deck.erase(CardId(999), &mut NullRenderer).unwrap_err(),
            CardError::UnknownCard
        );
    }
}
