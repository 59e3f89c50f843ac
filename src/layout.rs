//! Card geometry derived from the card size.
//!
//! Every value here is a pure function of the card width and height, so a
//! [`Layout`] can be computed once and shared by the deck, its piles and the
//! renderer.

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::render::DirtyRegion;

/// Width of the small (corner suit) font in pixels.
pub const SMALL_FONT_WIDTH: i32 = 8;
/// Height of the small (corner suit) font in pixels.
pub const SMALL_FONT_HEIGHT: i32 = 16;
/// Width of the large (label) font in pixels.
pub const LARGE_FONT_WIDTH: i32 = 8;
/// Height of the large (label) font in pixels.
pub const LARGE_FONT_HEIGHT: i32 = 16;
/// Scale applied to pip glyphs.
pub const PIP_SCALE: u8 = 2;
/// Scale applied to the letter drawn on face cards.
pub const FACE_SCALE: u8 = 6;
/// Largest card width or height in pixels.
pub const MAX_DIMENSION: i32 = 32_767;

/// Pixel geometry of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    width: i32,
    height: i32,
    stack_offset_x: i32,
    stack_offset_y: i32,
    draw_width: i32,
    draw_height: i32,
    x_offset: i32,
    y_offset: i32,
    radius: i32,
    x_positions: [i32; 5],
    y_positions: [i32; 7],
}

impl Layout {
    /// Computes the geometry for cards of the given size, padding included.
    ///
    /// Sizes are clamped to `0..=MAX_DIMENSION`.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.clamp(0, MAX_DIMENSION);
        let height = height.clamp(0, MAX_DIMENSION);
        let draw_width = width * 9 / 10;
        let draw_height = height * 9 / 10;

        let x_positions = [1, 3, 5, 7, 9].map(|i| i * draw_width / 10);
        let rows = [1, 3, 5, 7, 9].map(|i| i * draw_height / 10);
        // Two extra rows split the span between the outer rows in thirds.
        let third = (rows[4] - rows[0]) / 3;
        let mut y_positions = [
            rows[0],
            rows[1],
            rows[2],
            rows[3],
            rows[4],
            rows[0] + third,
            rows[0] + 2 * third,
        ];
        y_positions.sort_unstable();

        Self {
            width,
            height,
            stack_offset_x: width / 5,
            stack_offset_y: height / 4,
            draw_width,
            draw_height,
            x_offset: width / 20,
            y_offset: height / 20,
            radius: width / 10,
            x_positions,
            y_positions,
        }
    }

    /// Computes the geometry for a card of the given width with the usual
    /// 5:7 aspect ratio.
    #[must_use]
    pub fn from_width(width: i32) -> Self {
        Self::new(width, width.saturating_mul(7) / 5)
    }

    /// Card width including padding.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Card height including padding.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Horizontal step between cards fanned side by side.
    #[must_use]
    pub const fn stack_offset_x(&self) -> i32 {
        self.stack_offset_x
    }

    /// Vertical step between cards fanned top to bottom.
    #[must_use]
    pub const fn stack_offset_y(&self) -> i32 {
        self.stack_offset_y
    }

    /// Width of the drawn card body, excluding padding.
    #[must_use]
    pub const fn draw_width(&self) -> i32 {
        self.draw_width
    }

    /// Height of the drawn card body, excluding padding.
    #[must_use]
    pub const fn draw_height(&self) -> i32 {
        self.draw_height
    }

    /// Offset from the card's left edge to the drawn body.
    #[must_use]
    pub const fn x_offset(&self) -> i32 {
        self.x_offset
    }

    /// Offset from the card's top edge to the drawn body.
    #[must_use]
    pub const fn y_offset(&self) -> i32 {
        self.y_offset
    }

    /// Corner radius of the card body.
    #[must_use]
    pub const fn radius(&self) -> i32 {
        self.radius
    }

    /// Horizontal anchor columns, relative to the card body.
    #[must_use]
    pub const fn x_positions(&self) -> &[i32; 5] {
        &self.x_positions
    }

    /// Vertical anchor rows, relative to the card body, top to bottom.
    #[must_use]
    pub const fn y_positions(&self) -> &[i32; 7] {
        &self.y_positions
    }

    /// Area covered by the card body when the card sits at `(x, y)`.
    #[must_use]
    pub const fn body(&self, x: i32, y: i32) -> DirtyRegion {
        DirtyRegion::new(
            x + self.x_offset,
            y + self.y_offset,
            self.draw_width,
            self.draw_height,
        )
    }

    /// Area painted over when erasing a card at `(x, y)`.
    ///
    /// One pixel larger than the body on each far edge so the border goes too.
    #[must_use]
    pub const fn erase_area(&self, x: i32, y: i32) -> DirtyRegion {
        DirtyRegion::new(
            x + self.x_offset,
            y + self.y_offset,
            self.draw_width + 1,
            self.draw_height + 1,
        )
    }

    /// Area filled with the back color when the card sits face down at `(x, y)`.
    #[must_use]
    pub const fn back_area(&self, x: i32, y: i32) -> DirtyRegion {
        DirtyRegion::new(
            x + self.x_offset + 2,
            y + self.y_offset + 2,
            self.draw_width - 4,
            self.draw_height - 4,
        )
    }

    /// Lists the text and glyph marks making up a face-up card at `(x, y)`.
    ///
    /// Coordinates are the top-left corner of each mark in pixels. Marks in
    /// the lower half of the card are flagged as inverted.
    #[must_use]
    pub fn face_marks(&self, card: &Card, x: i32, y: i32) -> Vec<FaceMark> {
        let left = x + self.x_offset;
        let top = y + self.y_offset;
        let xs = &self.x_positions;
        let ys = &self.y_positions;
        let label = card.rank().label();
        let label_width = label.len() as i32 * LARGE_FONT_WIDTH;

        let mut marks = Vec::with_capacity(4 + card.rank().pips().len() + 1);

        marks.push(FaceMark {
            kind: MarkKind::Label(label),
            x: left + xs[0] - label_width / 2,
            y: top + ys[0] - LARGE_FONT_HEIGHT / 2,
            scale: 1,
            inverted: false,
        });
        marks.push(FaceMark {
            kind: MarkKind::Label(label),
            x: left + xs[4] - label_width / 2,
            y: top + ys[6] - LARGE_FONT_HEIGHT / 2,
            scale: 1,
            inverted: true,
        });
        marks.push(FaceMark {
            kind: MarkKind::Suit(card.suit()),
            x: left + xs[0] - SMALL_FONT_WIDTH / 2,
            y: top + ys[0] + LARGE_FONT_HEIGHT / 2,
            scale: 1,
            inverted: false,
        });
        marks.push(FaceMark {
            kind: MarkKind::Suit(card.suit()),
            x: left + xs[4] - SMALL_FONT_WIDTH / 2,
            y: top + ys[6] - LARGE_FONT_HEIGHT - SMALL_FONT_HEIGHT / 2,
            scale: 1,
            inverted: true,
        });

        let pip = i32::from(PIP_SCALE);
        for &(column, row) in card.rank().pips() {
            marks.push(FaceMark {
                kind: MarkKind::Suit(card.suit()),
                x: left + xs[usize::from(column)] - pip * LARGE_FONT_WIDTH / 2,
                y: top + ys[usize::from(row)] - pip * LARGE_FONT_HEIGHT / 2,
                scale: PIP_SCALE,
                inverted: row > 3,
            });
        }

        let letter = label.chars().next().filter(|_| card.rank().is_face());
        if let Some(letter) = letter {
            let face = i32::from(FACE_SCALE);
            marks.push(FaceMark {
                kind: MarkKind::Letter(letter),
                x: left + xs[2] - face * LARGE_FONT_WIDTH / 2,
                y: top + ys[3] - face * LARGE_FONT_HEIGHT / 2,
                scale: FACE_SCALE,
                inverted: false,
            });
        }

        marks
    }
}

/// What a [`FaceMark`] draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkKind {
    /// The short rank label in a corner.
    Label(&'static str),
    /// A suit glyph (corner or pip).
    Suit(Suit),
    /// The large letter in the middle of a face card.
    Letter(char),
}

/// One positioned mark on a card face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceMark {
    /// What to draw.
    pub kind: MarkKind,
    /// Left edge in pixels.
    pub x: i32,
    /// Top edge in pixels.
    pub y: i32,
    /// Integer font scale.
    pub scale: u8,
    /// Whether the mark is drawn upside down.
    pub inverted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;

    #[test]
    fn derives_constants_from_size() {
        let layout = Layout::new(100, 140);
        assert_eq!(layout.stack_offset_x(), 20);
        assert_eq!(layout.stack_offset_y(), 35);
        assert_eq!(layout.draw_width(), 90);
        assert_eq!(layout.draw_height(), 126);
        assert_eq!(layout.x_offset(), 5);
        assert_eq!(layout.y_offset(), 7);
        assert_eq!(layout.radius(), 10);
        assert_eq!(layout.x_positions(), &[9, 27, 45, 63, 81]);
    }

    #[test]
    fn rows_include_thirds_in_order() {
        let layout = Layout::new(100, 140);
        // Rows at 12, 37, 63, 88, 113 plus thirds 12 + 33 and 12 + 66.
        assert_eq!(layout.y_positions(), &[12, 37, 45, 63, 78, 88, 113]);
    }

    #[test]
    fn from_width_keeps_aspect_ratio() {
        let layout = Layout::from_width(50);
        assert_eq!(layout.height(), 70);
    }

    #[test]
    fn oversized_cards_are_clamped() {
        let layout = Layout::from_width(300_000_000);
        assert_eq!(layout.width(), MAX_DIMENSION);
        assert_eq!(layout.height(), MAX_DIMENSION);
        assert!(layout.y_positions().iter().all(|&y| y > 0));
    }

    #[test]
    fn face_marks_cover_corners_and_pips() {
        let layout = Layout::new(100, 140);
        let seven = Card::new(Suit::Hearts, Rank::Seven);
        let marks = layout.face_marks(&seven, 0, 0);
        assert_eq!(marks.len(), 4 + 7);
        assert!(marks.iter().all(|m| !matches!(m.kind, MarkKind::Letter(_))));

        let king = Card::new(Suit::Spades, Rank::King);
        let marks = layout.face_marks(&king, 0, 0);
        assert_eq!(marks.len(), 5);
        let letter = marks.last().copied();
        assert_eq!(letter.map(|m| m.kind), Some(MarkKind::Letter('K')));
        assert_eq!(letter.map(|m| m.scale), Some(FACE_SCALE));
    }

    #[test]
    fn lower_pips_are_inverted() {
        let layout = Layout::new(100, 140);
        let two = Card::new(Suit::Clubs, Rank::Two);
        let pips: Vec<_> = layout
            .face_marks(&two, 0, 0)
            .into_iter()
            .filter(|m| m.scale == PIP_SCALE)
            .collect();
        assert_eq!(pips.len(), 2);
        assert!(!pips[0].inverted);
        assert!(pips[1].inverted);
    }

    #[test]
    fn erase_area_extends_body() {
        let layout = Layout::new(100, 140);
        let body = layout.body(10, 10);
        let erase = layout.erase_area(10, 10);
        assert_eq!(body.x, erase.x);
        assert_eq!(body.width + 1, erase.width);
        assert_eq!(body.height + 1, erase.height);
    }
}
