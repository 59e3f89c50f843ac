//! The seam between the core and whatever draws the cards.
//!
//! The core never touches pixels. It tells a [`Renderer`] which card to draw
//! where, and the renderer answers with the [`DirtyRegion`] it changed so the
//! caller can push only that area to the display.

use crate::card::Card;
use crate::layout::Layout;
use crate::palette::Theme;

/// Handle of a render target in a registry owned by the caller.
///
/// Cards remember the surface they were last drawn on so they can be redrawn
/// in place after a flip. The core never dereferences it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SurfaceId(pub usize);

/// Where and how a card is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Target surface.
    pub surface: SurfaceId,
    /// Left edge of the card, padding included.
    pub x: i32,
    /// Top edge of the card, padding included.
    pub y: i32,
    /// Whether the back is shown instead of the face.
    pub hidden: bool,
}

/// A rectangle of pixels changed by a draw call.
///
/// A region with zero width or height is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirtyRegion {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl DirtyRegion {
    /// The empty region.
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    /// Creates a region.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns whether the region covers no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Returns the smallest region covering both.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }

        let left = self.x.min(other.x);
        let top = self.y.min(other.y);
        let right = (self.x + self.width).max(other.x + other.width);
        let bottom = (self.y + self.height).max(other.y + other.height);
        Self::new(left, top, right - left, bottom - top)
    }
}

/// Draws cards on behalf of the core.
pub trait Renderer {
    /// Draws `card` face up or face down at `placement`.
    fn render(
        &mut self,
        card: &Card,
        placement: Placement,
        layout: &Layout,
        theme: &Theme,
    ) -> DirtyRegion;

    /// Paints the table color over the card area at `placement`.
    fn erase(&mut self, placement: Placement, layout: &Layout, theme: &Theme) -> DirtyRegion;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(
        &mut self,
        card: &Card,
        placement: Placement,
        layout: &Layout,
        theme: &Theme,
    ) -> DirtyRegion {
        (**self).render(card, placement, layout, theme)
    }

    fn erase(&mut self, placement: Placement, layout: &Layout, theme: &Theme) -> DirtyRegion {
        (**self).erase(placement, layout, theme)
    }
}

/// A renderer that draws nothing and reports the card body as changed.
///
/// Useful for driving placement logic headless.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _: &Card, placement: Placement, layout: &Layout, _: &Theme) -> DirtyRegion {
        layout.body(placement.x, placement.y)
    }

    fn erase(&mut self, placement: Placement, layout: &Layout, _: &Theme) -> DirtyRegion {
        layout.erase_area(placement.x, placement.y)
    }
}

#[cfg(test)]
mod tests {
    use super::DirtyRegion;

    #[test]
    fn union_spans_both() {
        let a = DirtyRegion::new(0, 0, 10, 10);
        let b = DirtyRegion::new(20, 5, 10, 10);
        assert_eq!(a.union(b), DirtyRegion::new(0, 0, 30, 15));
    }

    #[test]
    fn union_ignores_empty() {
        let a = DirtyRegion::new(3, 4, 5, 6);
        assert_eq!(DirtyRegion::EMPTY.union(a), a);
        assert_eq!(a.union(DirtyRegion::EMPTY), a);
    }
}
