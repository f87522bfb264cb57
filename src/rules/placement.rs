//! Placement rules shared by the applier, move enumeration and auto-move.

use crate::core::{Card, Pile};

/// Can `card` be placed on a tableau column whose top is `target_top`?
///
/// An empty column takes only a King. Otherwise the card must be the
/// opposite colour and exactly one rank lower.
#[must_use]
pub fn can_stack_on_tableau(card: &Card, target_top: Option<&Card>) -> bool {
    match target_top {
        None => card.is_king(),
        Some(top) => card.color() != top.color() && card.rank + 1 == top.rank,
    }
}

/// Is `card` the next card for `foundation`?
///
/// An empty foundation takes only an Ace. Otherwise the card must match the
/// foundation's suit and be exactly one rank higher than its top.
#[must_use]
pub fn can_move_to_foundation(card: &Card, foundation: &Pile) -> bool {
    match foundation.top() {
        None => card.is_ace(),
        Some(top) => card.suit == top.suit && card.rank == top.rank + 1,
    }
}

/// Is `run` (bottom first) strictly descending with alternating colours?
///
/// Empty and single-card runs are valid.
#[must_use]
pub fn is_valid_run(run: &Pile) -> bool {
    run.iter()
        .zip(run.iter().skip(1))
        .all(|(below, above)| can_stack_on_tableau(above, Some(below)))
}

/// Length of the longest face-up, validly ordered run at the top of a pile.
#[must_use]
pub fn movable_run_len(pile: &Pile) -> usize {
    let mut len = 0;
    let mut above: Option<&Card> = None;
    for card in pile.iter().rev() {
        if !card.face_up {
            break;
        }
        if let Some(upper) = above {
            if !can_stack_on_tableau(upper, Some(card)) {
                break;
            }
        }
        len += 1;
        above = Some(card);
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;

    fn up(suit: Suit, rank: u8) -> Card {
        Card::new(suit, rank).turned_up()
    }

    #[test]
    fn test_only_king_on_empty_column() {
        assert!(can_stack_on_tableau(&up(Suit::Hearts, 13), None));
        assert!(!can_stack_on_tableau(&up(Suit::Hearts, 12), None));
        assert!(!can_stack_on_tableau(&up(Suit::Spades, 1), None));
    }

    #[test]
    fn test_alternating_colour_descending_rank() {
        let black_nine = up(Suit::Spades, 9);

        assert!(can_stack_on_tableau(&up(Suit::Hearts, 8), Some(&black_nine)));
        assert!(can_stack_on_tableau(&up(Suit::Diamonds, 8), Some(&black_nine)));
        assert!(!can_stack_on_tableau(&up(Suit::Clubs, 8), Some(&black_nine)));
        assert!(!can_stack_on_tableau(&up(Suit::Hearts, 7), Some(&black_nine)));
        assert!(!can_stack_on_tableau(&up(Suit::Hearts, 10), Some(&black_nine)));
    }

    #[test]
    fn test_foundation_ace_starts() {
        let empty = Pile::new();

        assert!(can_move_to_foundation(&up(Suit::Clubs, 1), &empty));
        assert!(!can_move_to_foundation(&up(Suit::Clubs, 2), &empty));
    }

    #[test]
    fn test_foundation_same_suit_ascending() {
        let hearts: Pile = vec![up(Suit::Hearts, 1), up(Suit::Hearts, 2)].into();

        assert!(can_move_to_foundation(&up(Suit::Hearts, 3), &hearts));
        assert!(!can_move_to_foundation(&up(Suit::Diamonds, 3), &hearts));
        assert!(!can_move_to_foundation(&up(Suit::Hearts, 4), &hearts));
        assert!(!can_move_to_foundation(&up(Suit::Hearts, 2), &hearts));
    }

    #[test]
    fn test_is_valid_run() {
        let good: Pile = vec![up(Suit::Spades, 10), up(Suit::Hearts, 9), up(Suit::Clubs, 8)].into();
        let same_colour: Pile = vec![up(Suit::Spades, 10), up(Suit::Clubs, 9)].into();
        let gap: Pile = vec![up(Suit::Spades, 10), up(Suit::Hearts, 8)].into();

        assert!(is_valid_run(&good));
        assert!(!is_valid_run(&same_colour));
        assert!(!is_valid_run(&gap));
        assert!(is_valid_run(&Pile::new()));
        assert!(is_valid_run(&vec![up(Suit::Spades, 3)].into()));
    }

    #[test]
    fn test_movable_run_len() {
        let pile: Pile = vec![
            Card::new(Suit::Diamonds, 2),
            up(Suit::Clubs, 4),
            up(Suit::Spades, 10),
            up(Suit::Hearts, 9),
            up(Suit::Clubs, 8),
        ]
        .into();

        // 4♣ does not connect to 10♠
        assert_eq!(movable_run_len(&pile), 3);
        assert_eq!(movable_run_len(&Pile::new()), 0);
        assert_eq!(movable_run_len(&vec![Card::new(Suit::Spades, 5)].into()), 0);
    }
}
