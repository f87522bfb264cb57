//! Rules engine trait and the Klondike implementation.
//!
//! `RulesEngine` is the seam solvers and sessions program against:
//! - What moves are legal
//! - How moves transform state
//! - Whether the game is over
//!
//! ## Implementation Notes
//!
//! - `try_apply_move` must never mutate its input
//! - `legal_moves` lists only moves `try_apply_move` would accept
//! - Rejections are values, never panics

use smallvec::SmallVec;

use crate::core::{GameState, Move, TABLEAU_COLUMNS};

use super::apply;
use super::outcome::MoveOutcome;
use super::placement::{can_move_to_foundation, can_stack_on_tableau, movable_run_len};
use super::win;

/// Move list; most positions have well under 16 legal moves.
pub type MoveList = SmallVec<[Move; 16]>;

/// Rules engine trait.
pub trait RulesEngine {
    /// Every move that would be accepted and changes the layout.
    ///
    /// `FlipStock` on an empty stock is accepted by the applier but changes
    /// nothing, so it is not listed.
    fn legal_moves(&self, state: &GameState) -> MoveList;

    /// Try a move without touching `state`.
    fn try_apply_move(&self, state: &GameState, mv: &Move) -> MoveOutcome;

    /// Has the game been won?
    fn is_terminal(&self, state: &GameState) -> bool;

    // === Convenience Methods ===

    /// Apply a move; illegal moves return the state unchanged.
    fn apply_move(&self, state: &GameState, mv: &Move) -> GameState {
        self.try_apply_move(state, mv).into_state_or(state)
    }

    /// Would `mv` be accepted?
    fn is_legal(&self, state: &GameState, mv: &Move) -> bool {
        self.try_apply_move(state, mv).is_applied()
    }
}

/// Standard Klondike rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct Klondike;

impl RulesEngine for Klondike {
    fn legal_moves(&self, state: &GameState) -> MoveList {
        let mut moves = MoveList::new();

        if !state.stock().is_empty() {
            moves.push(Move::FlipStock);
        } else if !state.waste().is_empty() {
            moves.push(Move::RecycleStock);
        }

        if let Some(card) = state.waste().top() {
            if can_move_to_foundation(card, state.foundation(card.suit)) {
                moves.push(Move::WasteToFoundation);
            }
            for (to, column) in state.tableau().iter().enumerate() {
                if can_stack_on_tableau(card, column.top()) {
                    moves.push(Move::WasteToTableau { to });
                }
            }
        }

        for (from, column) in state.tableau().iter().enumerate() {
            if let Some(top) = column.top() {
                if top.face_up && can_move_to_foundation(top, state.foundation(top.suit)) {
                    moves.push(Move::TableauToFoundation { from });
                }
            }

            for count in 1..=movable_run_len(column) {
                let Some(bottom) = column.get(column.len() - count) else {
                    break;
                };
                for to in (0..TABLEAU_COLUMNS).filter(|&to| to != from) {
                    if can_stack_on_tableau(bottom, state.tableau()[to].top()) {
                        moves.push(Move::TableauToTableau { from, count, to });
                    }
                }
            }
        }

        moves
    }

    fn try_apply_move(&self, state: &GameState, mv: &Move) -> MoveOutcome {
        apply::try_apply_move(state, mv)
    }

    fn is_terminal(&self, state: &GameState) -> bool {
        win::is_won(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, DrawMode, GameRng, Suit};
    use crate::deal::deal_with_rng;

    fn up(suit: Suit, rank: u8) -> Card {
        Card::new(suit, rank).turned_up()
    }

    #[test]
    fn test_legal_moves_are_accepted() {
        let engine = Klondike;
        let mut rng = GameRng::new(42);

        for _ in 0..10 {
            let state = deal_with_rng(DrawMode::One, &mut rng);
            for mv in engine.legal_moves(&state) {
                assert!(engine.is_legal(&state, &mv), "{} listed but rejected", mv);
            }
        }
    }

    #[test]
    fn test_fresh_deal_can_flip() {
        let state = deal_with_rng(DrawMode::Three, &mut GameRng::new(1));
        assert!(Klondike.legal_moves(&state).contains(&Move::FlipStock));
    }

    #[test]
    fn test_recycle_listed_only_when_stock_empty() {
        let state = GameState::builder(DrawMode::One)
            .waste([up(Suit::Clubs, 5)])
            .build();
        let moves = Klondike.legal_moves(&state);

        assert!(moves.contains(&Move::RecycleStock));
        assert!(!moves.contains(&Move::FlipStock));

        let empty = GameState::builder(DrawMode::One).build();
        assert!(Klondike.legal_moves(&empty).is_empty());
    }

    #[test]
    fn test_run_moves_enumerated() {
        let state = GameState::builder(DrawMode::One)
            .column(0, [up(Suit::Spades, 10), up(Suit::Hearts, 9), up(Suit::Clubs, 8)])
            .column(1, [up(Suit::Diamonds, 10)])
            .column(2, [up(Suit::Hearts, 9)])
            .build();

        let moves = Klondike.legal_moves(&state);

        // 8♣ fits on 9♥; 9♥-8♣ does not fit on the red 10♦
        assert!(moves.contains(&Move::TableauToTableau { from: 0, count: 1, to: 2 }));
        assert!(!moves.contains(&Move::TableauToTableau { from: 0, count: 2, to: 1 }));
        // King-less empty columns take nothing
        assert!(!moves.iter().any(|m| matches!(m, Move::TableauToTableau { to: 3, .. })));
    }

    #[test]
    fn test_apply_through_trait_rejects_to_original() {
        let state = GameState::builder(DrawMode::One).move_count(3).build();

        let next = Klondike.apply_move(&state, &Move::WasteToFoundation);

        assert_eq!(next, state);
        assert!(!Klondike.is_terminal(&state));
    }
}
