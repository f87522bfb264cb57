//! Auto-move integration tests.

use klondike_engine::core::{Card, DrawMode, GameRng, GameState, Move, Suit};
use klondike_engine::deal::deal_with_rng;
use klondike_engine::rules::{apply_move, invariants, Klondike, RulesEngine};
use klondike_engine::solver::{auto_move, auto_move_traced};

fn up(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank).turned_up()
}

/// A second auto-move is always a no-op.
#[test]
fn test_fixpoint_on_deals() {
    let mut rng = GameRng::new(400);
    for _ in 0..50 {
        let state = deal_with_rng(DrawMode::One, &mut rng);
        let once = auto_move(&state);
        assert_eq!(auto_move(&once), once);
        assert_eq!(invariants::check(&once), Ok(()));
    }
}

/// Each traced step is one accepted move.
#[test]
fn test_trace_replays() {
    let state = GameState::builder(DrawMode::One)
        .column(0, [Card::new(Suit::Hearts, 3), up(Suit::Hearts, 2)])
        .column(4, [up(Suit::Hearts, 1)])
        .waste([up(Suit::Clubs, 2), up(Suit::Clubs, 1)])
        .build();

    let (result, trace) = auto_move_traced(&state);

    assert_eq!(
        trace,
        vec![
            Move::WasteToFoundation,
            Move::WasteToFoundation,
            Move::TableauToFoundation { from: 4 },
            Move::TableauToFoundation { from: 0 },
            Move::TableauToFoundation { from: 0 },
        ]
    );
    let replayed = trace.iter().fold(state.clone(), |s, mv| apply_move(&s, mv));
    assert_eq!(replayed, result);
    assert_eq!(result.move_count(), 5);
}

/// Auto-move only plays to foundations, so it never leaves a foundation move
/// available behind it.
#[test]
fn test_no_foundation_move_left() {
    let mut rng = GameRng::new(9);
    for _ in 0..20 {
        let mut state = deal_with_rng(DrawMode::Three, &mut rng);
        for _ in 0..10 {
            state = apply_move(&state, &Move::FlipStock);
        }

        let done = auto_move(&state);
        let remaining = Klondike.legal_moves(&done);

        assert!(!remaining.iter().any(|m| matches!(
            m,
            Move::WasteToFoundation | Move::TableauToFoundation { .. }
        )));
        assert_eq!(done.stock(), state.stock());
    }
}

/// Auto-move can finish a game.
#[test]
fn test_auto_move_wins() {
    let state = GameState::builder(DrawMode::One)
        .foundation(Suit::Spades, 10)
        .foundation(Suit::Hearts, 13)
        .foundation(Suit::Diamonds, 13)
        .foundation(Suit::Clubs, 13)
        .column(2, [Card::new(Suit::Spades, 13), up(Suit::Spades, 12)])
        .waste([up(Suit::Spades, 11)])
        .build();

    let done = auto_move(&state);

    assert!(done.won());
    assert_eq!(done.move_count(), 3);
    assert!(Klondike.is_terminal(&done));
}
