//! Ordered, positioned sequences of cards.

use alloc::vec::Vec;

use tracing::trace;

use crate::card::CardId;
use crate::deck::Deck;
use crate::error::CardError;
use crate::render::{DirtyRegion, Placement, Renderer, SurfaceId};

/// Axis along which a pile fans out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Cards step along x.
    #[default]
    Horizontal,
    /// Cards step along y.
    Vertical,
}

/// Direction in which a pile fans out along its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Right or down.
    #[default]
    Forward,
    /// Left or up.
    Backward,
}

impl Direction {
    /// Returns `1` or `-1`.
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// How a pile positions the cards placed on it.
///
/// ```
/// use cardtable::{Axis, Direction, PileLayout};
///
/// // The dealer's row: left to right, hole card face down.
/// let layout = PileLayout::default()
///     .with_start(0, 0)
///     .with_axis(Axis::Horizontal)
///     .with_direction(Direction::Forward)
///     .with_offset(48)
///     .with_top_card_hidden(true);
/// assert!(layout.top_card_hidden);
/// assert!(!layout.other_cards_hidden);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PileLayout {
    /// Left edge of the first card.
    pub start_x: i32,
    /// Top edge of the first card.
    pub start_y: i32,
    /// Axis the pile grows along.
    pub axis: Axis,
    /// Direction the pile grows in.
    pub direction: Direction,
    /// Distance between consecutive cards, in pixels.
    pub offset: i32,
    /// Whether a card placed as the top card is face down.
    pub top_card_hidden: bool,
    /// Whether every other card is face down.
    pub other_cards_hidden: bool,
}

impl Default for PileLayout {
    fn default() -> Self {
        Self {
            start_x: 0,
            start_y: 0,
            axis: Axis::Horizontal,
            direction: Direction::Forward,
            offset: 0,
            top_card_hidden: false,
            other_cards_hidden: false,
        }
    }
}

impl PileLayout {
    /// Sets where the first card goes.
    #[must_use]
    pub const fn with_start(mut self, x: i32, y: i32) -> Self {
        self.start_x = x;
        self.start_y = y;
        self
    }

    /// Sets the axis the pile grows along.
    #[must_use]
    pub const fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the direction the pile grows in.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the distance between consecutive cards.
    #[must_use]
    pub const fn with_offset(mut self, offset: i32) -> Self {
        self.offset = offset;
        self
    }

    /// Sets whether a card placed as the top card is face down.
    #[must_use]
    pub const fn with_top_card_hidden(mut self, hidden: bool) -> Self {
        self.top_card_hidden = hidden;
        self
    }

    /// Sets whether cards not placed as the top card are face down.
    #[must_use]
    pub const fn with_other_cards_hidden(mut self, hidden: bool) -> Self {
        self.other_cards_hidden = hidden;
        self
    }

    /// Returns the cursor step applied after each placement.
    #[must_use]
    pub const fn step(&self) -> (i32, i32) {
        let distance = self.offset * self.direction.sign();
        match self.axis {
            Axis::Horizontal => (distance, 0),
            Axis::Vertical => (0, distance),
        }
    }
}

/// An ordered row or column of cards on one surface.
///
/// The pile only records ids and where the next card goes; which partition a
/// card is in stays the [`Deck`]'s business. Clearing a pile does not discard
/// its cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile {
    surface: SurfaceId,
    layout: PileLayout,
    cards: Vec<CardId>,
    next_x: i32,
    next_y: i32,
}

impl Pile {
    /// Creates an empty pile drawing on `surface`.
    #[must_use]
    pub const fn new(surface: SurfaceId, layout: PileLayout) -> Self {
        Self {
            surface,
            layout,
            cards: Vec::new(),
            next_x: layout.start_x,
            next_y: layout.start_y,
        }
    }

    /// Returns the surface the pile draws on.
    #[must_use]
    pub const fn surface(&self) -> SurfaceId {
        self.surface
    }

    /// Returns the pile's layout policy.
    #[must_use]
    pub const fn layout(&self) -> &PileLayout {
        &self.layout
    }

    /// Returns where the next card will go.
    #[must_use]
    pub const fn cursor(&self) -> (i32, i32) {
        (self.next_x, self.next_y)
    }

    /// Returns the cards in placement order.
    #[must_use]
    pub fn in_pile(&self) -> &[CardId] {
        &self.cards
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Forgets every card and moves the cursor back to the start.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.next_x = self.layout.start_x;
        self.next_y = self.layout.start_y;
    }

    /// Appends a card and advances the cursor without drawing anything.
    ///
    /// The card's visibility and position are updated in the deck; the
    /// returned placement is what [`place`](Self::place) would hand to the
    /// renderer.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownCard`] if the id is not from `deck`. The
    /// pile is unchanged in that case.
    pub fn stage(
        &mut self,
        deck: &mut Deck,
        id: CardId,
        is_top_card: bool,
    ) -> Result<Placement, CardError> {
        let card = deck.card_mut(id).ok_or(CardError::UnknownCard)?;
        let hidden = if is_top_card {
            self.layout.top_card_hidden
        } else {
            self.layout.other_cards_hidden
        };
        let placement = Placement {
            surface: self.surface,
            x: self.next_x,
            y: self.next_y,
            hidden,
        };
        card.set_placement(placement);

        let (dx, dy) = self.layout.step();
        self.next_x += dx;
        self.next_y += dy;
        self.cards.push(id);
        trace!(
            card = id.index(),
            x = placement.x,
            y = placement.y,
            hidden,
            "card placed"
        );
        Ok(placement)
    }

    /// Appends a card at the cursor, draws it, and advances the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownCard`] if the id is not from `deck`.
    pub fn place<R: Renderer + ?Sized>(
        &mut self,
        deck: &mut Deck,
        renderer: &mut R,
        id: CardId,
        is_top_card: bool,
    ) -> Result<DirtyRegion, CardError> {
        self.stage(deck, id, is_top_card)?;
        deck.sync(id, renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DeckOptions;
    use crate::palette::PaletteFn;
    use crate::render::NullRenderer;

    fn deck() -> Deck {
        Deck::new(DeckOptions::default(), &PaletteFn(|_: &str| Some(0_u32)), 4).unwrap()
    }

    #[test]
    fn places_along_axis_and_direction() {
        let mut deck = deck();
        let layout = PileLayout::default()
            .with_start(200, 10)
            .with_axis(Axis::Vertical)
            .with_direction(Direction::Backward)
            .with_offset(15);
        let mut pile = Pile::new(SurfaceId(1), layout);

        for id in deck.draw(3).unwrap() {
            pile.place(&mut deck, &mut NullRenderer, id, false).unwrap();
        }

        let positions: Vec<_> = pile
            .in_pile()
            .iter()
            .map(|&id| deck.card(id).unwrap().position().unwrap())
            .collect();
        assert_eq!(positions, [(200, 10), (200, -5), (200, -20)]);
        assert_eq!(pile.cursor(), (200, -35));
    }

    #[test]
    fn top_card_visibility_is_independent() {
        let mut deck = deck();
        let layout = PileLayout::default()
            .with_offset(40)
            .with_top_card_hidden(true);
        let mut pile = Pile::new(SurfaceId(0), layout);
        let ids = deck.draw(2).unwrap();

        pile.place(&mut deck, &mut NullRenderer, ids[0], false).unwrap();
        pile.place(&mut deck, &mut NullRenderer, ids[1], true).unwrap();

        assert!(!deck.card(ids[0]).unwrap().is_hidden());
        assert!(deck.card(ids[1]).unwrap().is_hidden());
    }

    #[test]
    fn place_reports_card_body() {
        let mut deck = deck();
        let mut pile = Pile::new(SurfaceId(0), PileLayout::default().with_start(30, 60));
        let id = deck.draw_one().unwrap();
        let dirty = pile.place(&mut deck, &mut NullRenderer, id, false).unwrap();
        assert_eq!(dirty, deck.layout().body(30, 60));
    }

    #[test]
    fn clear_resets_cursor_but_not_partitions() {
        let mut deck = deck();
        let mut pile = Pile::new(SurfaceId(0), PileLayout::default().with_start(5, 5).with_offset(10));
        for id in deck.draw(2).unwrap() {
            pile.stage(&mut deck, id, false).unwrap();
        }
        assert_eq!(pile.cursor(), (25, 5));

        pile.clear();
        assert!(pile.is_empty());
        assert_eq!(pile.cursor(), (5, 5));
        assert_eq!(deck.in_play().len(), 2);
    }

    #[test]
    fn unknown_card_leaves_pile_untouched() {
        let mut deck = deck();
        let mut pile = Pile::new(SurfaceId(0), PileLayout::default().with_offset(10));
        let foreign = CardId(4_000);
        assert_eq!(
            pile.stage(&mut deck, foreign, false).unwrap_err(),
            CardError::UnknownCard
        );
        assert!(pile.is_empty());
        assert_eq!(pile.cursor(), (0, 0));
    }
}
