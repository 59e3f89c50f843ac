//! Outcome of a finished blackjack round.

use crate::score::BLACKJACK;

/// Result of comparing a player's hand against the dealer's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player went over 21; the dealer wins regardless of their hand.
    PlayerBust,
    /// Dealer went over 21 while the player did not.
    DealerBust,
    /// Player has the higher total.
    PlayerWins,
    /// Dealer has the higher total.
    DealerWins,
    /// Equal totals.
    Tie,
}

impl Outcome {
    /// Returns whether the player won the round.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWins)
    }

    /// Returns a short announcement for the outcome.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "Player busts! Dealer wins.",
            Self::DealerBust => "Dealer busts! Player wins.",
            Self::PlayerWins => "Player wins!",
            Self::DealerWins => "Dealer wins!",
            Self::Tie => "It's a tie!",
        }
    }
}

/// Decides the round from both final totals.
///
/// A player bust is checked first, so it loses even when the dealer busts too.
#[must_use]
pub const fn settle(player_total: u16, dealer_total: u16) -> Outcome {
    if player_total > BLACKJACK {
        Outcome::PlayerBust
    } else if dealer_total > BLACKJACK {
        Outcome::DealerBust
    } else if player_total > dealer_total {
        Outcome::PlayerWins
    } else if player_total < dealer_total {
        Outcome::DealerWins
    } else {
        Outcome::Tie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_bust_beats_dealer_bust() {
        assert_eq!(settle(23, 25), Outcome::PlayerBust);
        assert_eq!(settle(20, 25), Outcome::DealerBust);
    }

    #[test]
    fn higher_total_wins() {
        assert_eq!(settle(20, 18), Outcome::PlayerWins);
        assert_eq!(settle(17, 19), Outcome::DealerWins);
        assert_eq!(settle(19, 19), Outcome::Tie);
        assert!(settle(21, 20).player_won());
        assert!(!settle(19, 19).player_won());
    }
}
