//! Greedy auto-move: push every immediately playable card to its foundation.
//!
//! Each pass tries, in order:
//! 1. The waste's top card
//! 2. Column tops, column 0 first
//!
//! and applies the first foundation move found. Passes repeat until none
//! applies. The solver never rearranges the tableau or touches the stock,
//! so it can leave a winnable game unsolved.
//!
//! ```
//! use klondike_engine::core::{Card, DrawMode, GameState, Suit};
//! use klondike_engine::solver::auto_move;
//!
//! let state = GameState::builder(DrawMode::One)
//!     .column(0, [Card::new(Suit::Spades, 2).turned_up()])
//!     .waste([Card::new(Suit::Spades, 1).turned_up()])
//!     .build();
//!
//! let next = auto_move(&state);
//! assert_eq!(next.foundation(Suit::Spades).len(), 2);
//! assert_eq!(next.move_count(), 2);
//! ```

use crate::core::{GameState, Move};
use crate::rules::{can_move_to_foundation, try_apply_move, MoveOutcome};

/// Apply foundation moves to fixpoint.
#[must_use]
pub fn auto_move(state: &GameState) -> GameState {
    auto_move_traced(state).0
}

/// Like `auto_move`, also returning the moves applied, in order.
#[must_use]
pub fn auto_move_traced(state: &GameState) -> (GameState, Vec<Move>) {
    let mut current = state.clone();
    let mut applied = Vec::new();

    while let Some(mv) = next_foundation_move(&current) {
        match try_apply_move(&current, &mv) {
            MoveOutcome::Applied(next) => {
                current = next;
                applied.push(mv);
            }
            MoveOutcome::Rejected(_) => break,
        }
    }

    (current, applied)
}

/// The move one auto-move pass would make, if any.
#[must_use]
pub fn next_foundation_move(state: &GameState) -> Option<Move> {
    if let Some(card) = state.waste().top() {
        if can_move_to_foundation(card, state.foundation(card.suit)) {
            return Some(Move::WasteToFoundation);
        }
    }

    state
        .tableau()
        .iter()
        .position(|column| {
            column
                .top()
                .is_some_and(|c| c.face_up && can_move_to_foundation(c, state.foundation(c.suit)))
        })
        .map(|from| Move::TableauToFoundation { from })
}
