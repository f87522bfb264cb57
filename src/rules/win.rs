//! Win detection.

use crate::core::{GameState, Suit, RANKS_PER_SUIT};

/// True iff every foundation holds all 13 cards of its suit.
#[must_use]
pub fn is_won(state: &GameState) -> bool {
    Suit::ALL
        .iter()
        .all(|&suit| state.foundation(suit).len() == RANKS_PER_SUIT)
}
