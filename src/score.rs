//! Blackjack hand scoring.

use crate::card::{Card, Rank};

/// Highest total that does not bust.
pub const BLACKJACK: u16 = 21;

/// The dealer keeps drawing while the hand totals less than this.
pub const DEALER_STANDS_AT: u16 = 17;

/// Returns the blackjack value of a rank, counting an Ace as 11.
#[must_use]
pub const fn card_value(rank: Rank) -> u16 {
    match rank {
        Rank::Ace => 11,
        Rank::Jack | Rank::Queen | Rank::King => 10,
        other => other.number() as u16,
    }
}

/// A scored hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    /// Best total, with as few Aces softened to 1 as needed.
    pub total: u16,
    /// Whether an Ace is still counted as 11.
    pub soft: bool,
}

impl Evaluation {
    /// Returns whether the total is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }
}

/// Scores a hand given by its ranks.
///
/// Aces start at 11; while the total is over 21, one Ace at a time drops to 1.
/// The total can still exceed 21 once every Ace is down to 1.
pub fn evaluate_ranks<I>(ranks: I) -> Evaluation
where
    I: IntoIterator<Item = Rank>,
{
    let mut total: u16 = 0;
    let mut aces: u16 = 0;

    for rank in ranks {
        if rank == Rank::Ace {
            aces += 1;
        }
        total = total.saturating_add(card_value(rank));
    }

    while total > BLACKJACK && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    Evaluation {
        total,
        soft: aces > 0,
    }
}

/// Scores a hand of cards.
#[must_use]
pub fn evaluate(cards: &[Card]) -> Evaluation {
    evaluate_ranks(cards.iter().map(Card::rank))
}

/// Returns the blackjack total of a hand of cards.
#[must_use]
pub fn score(cards: &[Card]) -> u16 {
    evaluate(cards).total
}

/// Returns whether the dealer must draw another card.
#[must_use]
pub const fn dealer_draws(total: u16) -> bool {
    total < DEALER_STANDS_AT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank::*;

    fn total(ranks: &[Rank]) -> u16 {
        evaluate_ranks(ranks.iter().copied()).total
    }

    #[test]
    fn aces_soften_one_at_a_time() {
        assert_eq!(total(&[Ace, King]), 21);
        assert_eq!(total(&[Ace, Ace, Nine]), 21);
        assert_eq!(total(&[Ace, Ace, Ace, Eight]), 21);
        assert_eq!(total(&[Ace, Ace]), 12);
    }

    #[test]
    fn bust_without_aces_stays_bust() {
        assert_eq!(total(&[King, Queen, Five]), 25);
        assert!(evaluate_ranks([King, Queen, Five]).is_bust());
    }

    #[test]
    fn plain_numbers_add_up() {
        assert_eq!(total(&[Two, Three, Four, Five, Six]), 20);
        assert_eq!(total(&[]), 0);
    }

    #[test]
    fn softness_tracks_live_aces() {
        assert!(evaluate_ranks([Ace, Six]).soft);
        assert!(!evaluate_ranks([Ace, Six, Ten]).soft);
        assert_eq!(evaluate_ranks([Ace, Six, Ten]).total, 17);
    }

    #[test]
    fn dealer_stands_on_seventeen() {
        assert!(dealer_draws(16));
        assert!(!dealer_draws(17));
        assert!(!dealer_draws(22));
    }
}
