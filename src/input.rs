//! Pointer input as seen by a game driver.
//!
//! The deck and piles never poll for input themselves; a driver polls an
//! [`EventSource`] once per loop iteration and maps hits back to cards with
//! [`Deck::card_at`](crate::Deck::card_at).

use alloc::collections::VecDeque;

/// Mouse or touch button state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Button pressed.
    ButtonDown,
    /// Button released.
    ButtonUp,
}

/// One pointer button event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerEvent {
    /// Press or release.
    pub kind: PointerKind,
    /// Horizontal position in pixels.
    pub x: i32,
    /// Vertical position in pixels.
    pub y: i32,
    /// Button number; 1 is the primary button, 3 the secondary.
    pub button: u8,
}

impl PointerEvent {
    /// Primary button number.
    pub const PRIMARY: u8 = 1;
    /// Secondary button number.
    pub const SECONDARY: u8 = 3;

    /// Returns whether this is a press of the primary button.
    #[must_use]
    pub const fn is_primary_press(&self) -> bool {
        matches!(self.kind, PointerKind::ButtonDown) && self.button == Self::PRIMARY
    }

    /// Returns the event position.
    #[must_use]
    pub const fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

/// A non-blocking source of pointer events.
pub trait EventSource {
    /// Returns the next pending event, or `None` if nothing happened.
    fn poll(&mut self) -> Option<PointerEvent>;
}

/// A queue of events, drained front first. Handy for scripted drivers.
impl EventSource for VecDeque<PointerEvent> {
    fn poll(&mut self) -> Option<PointerEvent> {
        self.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_polls_in_order_then_runs_dry() {
        let mut events: VecDeque<PointerEvent> = [
            PointerEvent {
                kind: PointerKind::ButtonDown,
                x: 3,
                y: 4,
                button: PointerEvent::PRIMARY,
            },
            PointerEvent {
                kind: PointerKind::ButtonUp,
                x: 3,
                y: 4,
                button: PointerEvent::SECONDARY,
            },
        ]
        .into_iter()
        .collect();

        let first = events.poll().unwrap();
        assert!(first.is_primary_press());
        assert_eq!(first.position(), (3, 4));
        assert!(!events.poll().unwrap().is_primary_press());
        assert_eq!(events.poll(), None);
    }
}
