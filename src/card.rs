//! Card identity and per-card presentation state.

use core::fmt;

use crate::layout::Layout;
use crate::render::{Placement, SurfaceId};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// Every suit, in the order a fresh deck is built.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }

    /// Returns the code point of the suit glyph in the classic 8x16 bitmap
    /// font (0x03 through 0x06).
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Hearts => '\u{3}',
            Self::Diamonds => '\u{4}',
            Self::Clubs => '\u{5}',
            Self::Spades => '\u{6}',
        }
    }

    /// Returns the Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    /// Returns whether the suit is printed in red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, ordered Ace (low) through King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

// Pip grid cells as (column, row). Columns index the five x anchors and rows
// the seven y anchors of a `Layout`.
const PIPS_ACE: &[(u8, u8)] = &[(2, 3)];
const PIPS_TWO: &[(u8, u8)] = &[(2, 0), (2, 6)];
const PIPS_THREE: &[(u8, u8)] = &[(2, 0), (2, 3), (2, 6)];
const PIPS_FOUR: &[(u8, u8)] = &[(1, 0), (3, 0), (1, 6), (3, 6)];
const PIPS_FIVE: &[(u8, u8)] = &[(1, 0), (3, 0), (2, 3), (1, 6), (3, 6)];
const PIPS_SIX: &[(u8, u8)] = &[(1, 0), (3, 0), (1, 3), (3, 3), (1, 6), (3, 6)];
const PIPS_SEVEN: &[(u8, u8)] = &[(1, 0), (3, 0), (1, 3), (2, 1), (3, 3), (1, 6), (3, 6)];
const PIPS_EIGHT: &[(u8, u8)] = &[
    (1, 0),
    (3, 0),
    (1, 3),
    (2, 1),
    (2, 5),
    (3, 3),
    (1, 6),
    (3, 6),
];
const PIPS_NINE: &[(u8, u8)] = &[
    (1, 0),
    (3, 0),
    (1, 2),
    (3, 2),
    (2, 3),
    (1, 4),
    (3, 4),
    (1, 6),
    (3, 6),
];
const PIPS_TEN: &[(u8, u8)] = &[
    (1, 0),
    (3, 0),
    (1, 2),
    (3, 2),
    (2, 1),
    (2, 5),
    (1, 4),
    (3, 4),
    (1, 6),
    (3, 6),
];

impl Rank {
    /// Every rank, Ace through King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the numeric rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the full rank name ("Ace", "2", ..., "King").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// Returns the short corner label ("A", "2", ..., "10", "J", "Q", "K").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            other => other.name(),
        }
    }

    /// Returns whether the rank is a Jack, Queen or King.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }

    /// Returns the pip grid cells drawn on the card face.
    ///
    /// Face cards have no pips; they are drawn with a large letter instead.
    #[must_use]
    pub const fn pips(self) -> &'static [(u8, u8)] {
        match self {
            Self::Ace => PIPS_ACE,
            Self::Two => PIPS_TWO,
            Self::Three => PIPS_THREE,
            Self::Four => PIPS_FOUR,
            Self::Five => PIPS_FIVE,
            Self::Six => PIPS_SIX,
            Self::Seven => PIPS_SEVEN,
            Self::Eight => PIPS_EIGHT,
            Self::Nine => PIPS_NINE,
            Self::Ten => PIPS_TEN,
            Self::Jack | Self::Queen | Self::King => &[],
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stable handle of one physical card inside its [`Deck`](crate::Deck).
///
/// Two cards with the same suit and rank (multi-deck play) always have
/// different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub(crate) usize);

impl CardId {
    /// Returns the arena index of the card.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A physical playing card.
///
/// The suit and rank never change. The remaining fields record how the card
/// was last presented and are only written by placement and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    hidden: bool,
    position: Option<(i32, i32)>,
    surface: Option<SurfaceId>,
}

impl Card {
    /// Creates a face-up card that has never been rendered.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            hidden: false,
            position: None,
            surface: None,
        }
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns whether the card is face down.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Returns the top-left corner the card was last rendered at.
    #[must_use]
    pub const fn position(&self) -> Option<(i32, i32)> {
        self.position
    }

    /// Returns the surface the card was last rendered to.
    #[must_use]
    pub const fn surface(&self) -> Option<SurfaceId> {
        self.surface
    }

    /// Returns where the card currently sits, if it has been placed.
    #[must_use]
    pub fn placement(&self) -> Option<Placement> {
        let (x, y) = self.position?;
        let surface = self.surface?;
        Some(Placement {
            surface,
            x,
            y,
            hidden: self.hidden,
        })
    }

    /// Sets whether the card is face down.
    ///
    /// This only changes state; call [`Deck::sync`](crate::Deck::sync) to
    /// redraw it.
    pub const fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Turns the card face down.
    pub const fn hide(&mut self) {
        self.hidden = true;
    }

    /// Turns the card face up.
    pub const fn reveal(&mut self) {
        self.hidden = false;
    }

    /// Turns the card over.
    pub const fn flip(&mut self) {
        self.hidden = !self.hidden;
    }

    /// Returns whether the point lies on the card's last rendered area.
    ///
    /// A card that has never been rendered is never hit.
    #[must_use]
    pub fn hit_test(&self, x: i32, y: i32, layout: &Layout) -> bool {
        self.position.is_some_and(|(left, top)| {
            (left..left + layout.width()).contains(&x) && (top..top + layout.height()).contains(&y)
        })
    }

    pub(crate) const fn set_placement(&mut self, placement: Placement) {
        self.surface = Some(placement.surface);
        self.position = Some((placement.x, placement.y));
        self.hidden = placement.hidden;
    }

    pub(crate) const fn clear_placement(&mut self) {
        self.surface = None;
        self.position = None;
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_shorten_long_names() {
        assert_eq!(Rank::Ace.label(), "A");
        assert_eq!(Rank::Ten.label(), "10");
        assert_eq!(Rank::Seven.label(), "7");
        assert_eq!(Rank::Queen.label(), "Q");
    }

    #[test]
    fn pip_counts_match_rank() {
        for rank in Rank::ALL {
            let expected = if rank.is_face() {
                0
            } else {
                rank.number() as usize
            };
            assert_eq!(rank.pips().len(), expected, "{rank}");
        }
    }

    #[test]
    fn display_reads_naturally() {
        let card = Card::new(Suit::Spades, Rank::King);
        assert_eq!(alloc::format!("{card}"), "King of Spades");
    }

    #[test]
    fn flip_toggles_visibility() {
        let mut card = Card::new(Suit::Hearts, Rank::Two);
        assert!(!card.is_hidden());
        card.flip();
        assert!(card.is_hidden());
        card.reveal();
        assert!(!card.is_hidden());
    }

    #[test]
    fn unrendered_card_is_never_hit() {
        let layout = Layout::new(50, 70);
        let mut card = Card::new(Suit::Clubs, Rank::Five);
        assert!(!card.hit_test(1, 1, &layout));

        card.set_placement(Placement {
            surface: SurfaceId(0),
            x: 10,
            y: 20,
            hidden: false,
        });
        assert!(card.hit_test(10, 20, &layout));
        assert!(card.hit_test(59, 89, &layout));
        assert!(!card.hit_test(60, 20, &layout));
        assert!(!card.hit_test(9, 20, &layout));
    }
}
