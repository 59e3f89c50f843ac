//! Playing cards, the piles they move through, and blackjack scoring, with
//! optional `no_std` support.
//!
//! A [`Deck`] owns every card and tracks which of three partitions (in-deck,
//! in-play, in-discard) each one is in. [`Pile`]s and [`Hand`]s lay drawn
//! cards out on a surface through a caller-supplied [`Renderer`]. Hands are
//! scored with [`score`] and cards ranked with a [`ComparisonPolicy`].
//!
//! # Example
//!
//! ```
//! use cardtable::{ColorMap, Deck, DeckOptions, Hand, NullRenderer, PileLayout, SurfaceId};
//!
//! let palette: ColorMap = [
//!     ("BLACK", 0x0000),
//!     ("BLUE", 0x0015),
//!     ("GREEN", 0x0540),
//!     ("RED", 0xA800),
//!     ("WHITE", 0xFFFF),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut deck = Deck::new(DeckOptions::default(), &palette, 42).unwrap();
//! let layout = PileLayout::default().with_offset(deck.layout().width());
//! let mut player = Hand::new(false, SurfaceId(0), layout);
//!
//! for _ in 0..2 {
//!     let card = deck.draw_one().unwrap();
//!     player.place(&mut deck, &mut NullRenderer, card, false).unwrap();
//! }
//!
//! assert_eq!(player.len(), 2);
//! assert_eq!(deck.remaining(), 50);
//! assert!(player.score(&deck) >= 4);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod compare;
pub mod deck;
pub mod error;
pub mod hand;
pub mod input;
pub mod layout;
pub mod options;
pub mod palette;
pub mod pile;
pub mod render;
pub mod result;
pub mod score;
pub mod shared;
mod sync;

// Re-export main types
pub use card::{Card, CardId, Rank, Suit};
pub use compare::ComparisonPolicy;
pub use deck::{Deck, Location};
pub use error::{CardError, ConfigError, DiscardError, DrawError};
pub use hand::Hand;
pub use input::{EventSource, PointerEvent, PointerKind};
pub use layout::{FaceMark, Layout, MarkKind};
pub use options::DeckOptions;
pub use palette::{Color, ColorMap, Palette, PaletteFn, Theme};
pub use pile::{Axis, Direction, Pile, PileLayout};
pub use render::{DirtyRegion, NullRenderer, Placement, Renderer, SurfaceId};
pub use result::{Outcome, settle};
pub use score::{Evaluation, dealer_draws, evaluate, score};
pub use shared::SharedDeck;
