//! Deal integration tests.
//!
//! Shape, integrity and determinism of freshly dealt games.

use std::collections::HashSet;

use klondike_engine::core::{CardId, DrawMode, GameRng, DECK_SIZE};
use klondike_engine::deal::{deal, deal_with_rng};
use klondike_engine::rules::invariants;

// =============================================================================
// Shape
// =============================================================================

#[test]
fn test_deal_shape() {
    for draw in [DrawMode::One, DrawMode::Three] {
        let state = deal(draw);

        let lengths: Vec<usize> = state.tableau().iter().map(|c| c.len()).collect();
        assert_eq!(lengths, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(state.stock().len(), 24);
        assert!(state.waste().is_empty());
        assert_eq!(state.foundations().card_count(), 0);
        assert_eq!(state.move_count(), 0);
        assert!(!state.won());
        assert_eq!(state.draw(), draw);
    }
}

#[test]
fn test_deal_passes_invariants() {
    let mut rng = GameRng::new(5);
    for _ in 0..50 {
        let state = deal_with_rng(DrawMode::Three, &mut rng);
        assert_eq!(invariants::check(&state), Ok(()));
    }
}

#[test]
fn test_every_card_dealt_once() {
    let state = deal(DrawMode::One);
    let ids: HashSet<CardId> = state.cards().map(|c| c.id).collect();
    assert_eq!(ids.len(), DECK_SIZE);
}

// =============================================================================
// Determinism & Identity
// =============================================================================

#[test]
fn test_same_seed_same_deal() {
    let a = deal_with_rng(DrawMode::One, &mut GameRng::new(2024));
    let b = deal_with_rng(DrawMode::One, &mut GameRng::new(2024));
    assert_eq!(a, b);

    let c = deal_with_rng(DrawMode::One, &mut GameRng::new(2025));
    assert_ne!(a.tableau(), c.tableau());
}

#[test]
fn test_fresh_identity_per_deal() {
    let ids: HashSet<_> = (0..100).map(|_| deal(DrawMode::One).id()).collect();
    assert_eq!(ids.len(), 100);
}
