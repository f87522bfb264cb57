//! Structural invariants of a Klondike position.
//!
//! A violation means the engine has a bug; these checks are for tests and
//! debugging, not for rejecting moves.
//!
//! - `check_layout`: per-pile rules (tableau face-up suffix, foundation
//!   order, stock face-down, waste face-up, win flag)
//! - `check`: `check_layout` plus deck integrity (exactly one of each card)

use crate::core::{CardId, GameState, Suit, DECK_SIZE};

use super::placement::is_valid_run;
use super::win::is_won;

/// A broken invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The position does not hold exactly 52 cards.
    CardCount(usize),
    /// A card appears more than once.
    DuplicateCard(CardId),
    /// A card's id does not match its suit and rank.
    CorruptCard(CardId),
    /// A face-down card sits above a face-up card in a column.
    FaceDownAboveFaceUp { column: usize },
    /// A column's top card is face-down.
    HiddenTop { column: usize },
    /// A column's face-up cards are not a valid run.
    BrokenRun { column: usize },
    /// A foundation is not Ace, 2, 3, ... of its own suit.
    FoundationOutOfOrder(Suit),
    /// A stock card is face-up.
    StockFaceUp,
    /// A waste card is face-down.
    WasteFaceDown,
    /// The win flag disagrees with the foundations.
    WinFlagMismatch,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvariantViolation::CardCount(n) => write!(f, "position holds {} cards, expected {}", n, DECK_SIZE),
            InvariantViolation::DuplicateCard(id) => write!(f, "{} appears more than once", id),
            InvariantViolation::CorruptCard(id) => write!(f, "{} does not match its suit and rank", id),
            InvariantViolation::FaceDownAboveFaceUp { column } => {
                write!(f, "column {} has a face-down card above a face-up card", column)
            }
            InvariantViolation::HiddenTop { column } => write!(f, "column {} has a face-down top", column),
            InvariantViolation::BrokenRun { column } => write!(f, "column {} face-up cards are not a run", column),
            InvariantViolation::FoundationOutOfOrder(suit) => write!(f, "{} foundation is out of order", suit),
            InvariantViolation::StockFaceUp => write!(f, "stock holds a face-up card"),
            InvariantViolation::WasteFaceDown => write!(f, "waste holds a face-down card"),
            InvariantViolation::WinFlagMismatch => write!(f, "win flag disagrees with foundations"),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Check every invariant, including deck integrity.
pub fn check(state: &GameState) -> Result<(), InvariantViolation> {
    let mut seen = [false; DECK_SIZE];
    let mut count = 0;
    for card in state.cards() {
        count += 1;
        let slot = seen
            .get_mut(card.id.raw() as usize)
            .ok_or(InvariantViolation::CorruptCard(card.id))?;
        if *slot {
            return Err(InvariantViolation::DuplicateCard(card.id));
        }
        *slot = true;
    }
    if count != DECK_SIZE {
        return Err(InvariantViolation::CardCount(count));
    }
    check_layout(state)
}

/// Check the per-pile invariants only.
///
/// Suitable for partial positions built with `GameState::builder`.
pub fn check_layout(state: &GameState) -> Result<(), InvariantViolation> {
    if let Some(card) = state.cards().find(|c| CardId::of(c.suit, c.rank) != c.id) {
        return Err(InvariantViolation::CorruptCard(card.id));
    }

    for (column, pile) in state.tableau().iter().enumerate() {
        if pile.top().is_some_and(|c| !c.face_up) {
            return Err(InvariantViolation::HiddenTop { column });
        }
        let face_up = pile.face_up_len();
        if pile.iter().take(pile.len() - face_up).any(|c| c.face_up) {
            return Err(InvariantViolation::FaceDownAboveFaceUp { column });
        }
        let suffix = pile.peek_top(face_up).unwrap_or_default();
        if !is_valid_run(&suffix) {
            return Err(InvariantViolation::BrokenRun { column });
        }
    }

    for (suit, pile) in state.foundations().iter() {
        let in_order = pile
            .iter()
            .enumerate()
            .all(|(i, c)| c.suit == suit && c.rank as usize == i + 1);
        if !in_order {
            return Err(InvariantViolation::FoundationOutOfOrder(suit));
        }
    }

    if state.stock().iter().any(|c| c.face_up) {
        return Err(InvariantViolation::StockFaceUp);
    }
    if state.waste().iter().any(|c| !c.face_up) {
        return Err(InvariantViolation::WasteFaceDown);
    }
    if state.won() != is_won(state) {
        return Err(InvariantViolation::WinFlagMismatch);
    }
    Ok(())
}
