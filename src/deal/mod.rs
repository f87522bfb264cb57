//! Deck construction and the initial Klondike layout.
//!
//! Column `i` receives `i + 1` cards from the top of the shuffled deck,
//! only the last of which is face-up. The remaining 24 cards form the
//! face-down stock.

mod deck;

pub use deck::{shuffled_deck, standard_deck};

use crate::core::{DrawMode, GameId, GameRng, GameState, TABLEAU_COLUMNS};

/// Cards dealt to the tableau (1 + 2 + ... + 7).
pub const TABLEAU_CARDS: usize = TABLEAU_COLUMNS * (TABLEAU_COLUMNS + 1) / 2;

/// Deal a fresh game from an OS-seeded shuffle.
#[must_use]
pub fn deal(draw: DrawMode) -> GameState {
    deal_with_rng(draw, &mut GameRng::from_entropy())
}

/// Deal a fresh game using the given RNG for both shuffle and identity.
#[must_use]
pub fn deal_with_rng(draw: DrawMode, rng: &mut GameRng) -> GameState {
    let mut deck = shuffled_deck(rng);
    let mut state = GameState::empty(GameId(rng.next_id()), draw);

    // Deal from the top (end) of the deck
    let mut dealt = deck.split_off(deck.len() - TABLEAU_CARDS).into_iter().rev();
    for (col, pile) in state.tableau.iter_mut().enumerate() {
        for (n, card) in dealt.by_ref().take(col + 1).enumerate() {
            pile.push(if n == col { card.turned_up() } else { card });
        }
    }

    state.stock_waste.stock = deck.into_iter().collect();
    state
}
