//! Named colors and the card theme resolved from them.

use alloc::string::String;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Suit;
use crate::error::ConfigError;

/// A display color in whatever encoding the renderer uses (RGB565, RGB888, ...).
pub type Color = u32;

/// Anything that can look up a color by name.
pub trait Palette {
    /// Returns the color registered under `name`, if any.
    fn color(&self, name: &str) -> Option<Color>;
}

impl<P: Palette + ?Sized> Palette for &P {
    fn color(&self, name: &str) -> Option<Color> {
        (**self).color(name)
    }
}

/// A palette backed by a name-to-color map.
///
/// ```
/// use cardtable::{ColorMap, Palette};
///
/// let palette: ColorMap = [("GREEN", 0x0540), ("RED", 0xA800)].into_iter().collect();
/// assert_eq!(palette.color("GREEN"), Some(0x0540));
/// assert_eq!(palette.color("BLUE"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMap {
    colors: HashMap<String, Color>,
}

impl ColorMap {
    /// Creates an empty palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `color` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, color: Color) -> Option<Color> {
        self.colors.insert(name.into(), color)
    }

    /// Returns the number of named colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns whether no colors are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Palette for ColorMap {
    fn color(&self, name: &str) -> Option<Color> {
        self.colors.get(name).copied()
    }
}

impl<'a> FromIterator<(&'a str, Color)> for ColorMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, Color)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, color) in iter {
            map.insert(name, color);
        }
        map
    }
}

/// Adapts a lookup closure into a [`Palette`].
#[derive(Debug, Clone, Copy)]
pub struct PaletteFn<F>(pub F);

impl<F> Palette for PaletteFn<F>
where
    F: Fn(&str) -> Option<Color>,
{
    fn color(&self, name: &str) -> Option<Color> {
        (self.0)(name)
    }
}

/// The colors a renderer needs to draw cards on a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Table background, used when erasing cards.
    pub table: Color,
    /// Fill of a face-down card.
    pub back: Color,
    /// Card outline.
    pub border: Color,
    /// Face background.
    pub face: Color,
    /// Hearts and Diamonds.
    pub red: Color,
    /// Clubs and Spades.
    pub black: Color,
}

impl Theme {
    /// Resolves the theme from a palette.
    ///
    /// The palette must provide `BLUE`, `BLACK`, `WHITE` and `RED`. When
    /// `table` is `None` it must also provide `GREEN`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingColor`] naming the first color the palette
    /// lacks.
    pub fn from_palette<P: Palette + ?Sized>(
        palette: &P,
        table: Option<Color>,
    ) -> Result<Self, ConfigError> {
        let lookup = |name: &'static str| palette.color(name).ok_or(ConfigError::MissingColor(name));

        let table = match table {
            Some(color) => color,
            None => lookup("GREEN")?,
        };

        Ok(Self {
            table,
            back: lookup("BLUE")?,
            border: lookup("BLACK")?,
            face: lookup("WHITE")?,
            red: lookup("RED")?,
            black: lookup("BLACK")?,
        })
    }

    /// Returns the ink color for a suit.
    #[must_use]
    pub const fn suit_color(&self, suit: Suit) -> Color {
        if suit.is_red() { self.red } else { self.black }
    }
}
