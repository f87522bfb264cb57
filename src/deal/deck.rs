//! The standard 52-card deck.

use crate::core::{Card, GameRng, Suit, ACE, KING};

/// The 52 cards in suit-then-rank order, all face-down.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| (ACE..=KING).map(move |rank| Card::new(suit, rank)))
        .collect()
}

/// A uniformly shuffled deck, all face-down.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = standard_deck();
    rng.shuffle(&mut deck);
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DECK_SIZE;

    #[test]
    fn test_standard_deck() {
        let deck = standard_deck();

        assert_eq!(deck.len(), DECK_SIZE);
        assert!(deck.iter().all(|c| !c.face_up));
        for suit in Suit::ALL {
            assert_eq!(deck.iter().filter(|c| c.suit == suit).count(), 13);
        }
    }

    #[test]
    fn test_shuffled_deck_is_permutation() {
        let mut rng = GameRng::new(3);
        let mut shuffled: Vec<_> = shuffled_deck(&mut rng).iter().map(|c| c.id).collect();
        let ordered: Vec<_> = standard_deck().iter().map(|c| c.id).collect();

        assert_ne!(shuffled, ordered);
        shuffled.sort();
        assert_eq!(shuffled, ordered);
    }

    #[test]
    fn test_same_seed_same_deck() {
        let a = shuffled_deck(&mut GameRng::new(11));
        let b = shuffled_deck(&mut GameRng::new(11));
        assert_eq!(a, b);
    }
}
