//! Explicit move results.
//!
//! The applier's contract is "illegal move returns the unchanged state".
//! `MoveOutcome` carries the same information plus the reason, for callers
//! that want to know why a move was refused.

use crate::core::{Card, GameState};

/// Why a move was refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The descriptor lacked a required field or had an out-of-range value.
    Malformed,
    /// Column index outside `0..7`.
    NoSuchColumn(usize),
    /// Source and destination column are the same.
    SameColumn,
    /// A run of zero cards was requested.
    EmptyRun,
    /// The source column has no cards.
    EmptyColumn(usize),
    /// The source column holds fewer cards than requested.
    NotEnoughCards {
        column: usize,
        requested: usize,
        available: usize,
    },
    /// A card that would move is face-down.
    FaceDown,
    /// The cards to move are not a descending, alternating-colour run.
    BrokenRun,
    /// The card cannot be placed on the destination column.
    IllegalPlacement { card: Card, column: usize },
    /// The card is not the next card for its foundation.
    NotNextForFoundation(Card),
    /// The waste is empty.
    EmptyWaste,
    /// Recycling requires an empty stock.
    StockNotEmpty,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Malformed => write!(f, "malformed move"),
            Rejection::NoSuchColumn(c) => write!(f, "no column {}", c),
            Rejection::SameColumn => write!(f, "source and destination are the same column"),
            Rejection::EmptyRun => write!(f, "cannot move zero cards"),
            Rejection::EmptyColumn(c) => write!(f, "column {} is empty", c),
            Rejection::NotEnoughCards { column, requested, available } => write!(
                f,
                "column {} has {} cards, {} requested",
                column, available, requested
            ),
            Rejection::FaceDown => write!(f, "cannot move a face-down card"),
            Rejection::BrokenRun => write!(f, "cards do not form a run"),
            Rejection::IllegalPlacement { card, column } => {
                write!(f, "{} cannot be placed on column {}", card, column)
            }
            Rejection::NotNextForFoundation(card) => {
                write!(f, "{} is not next on its foundation", card)
            }
            Rejection::EmptyWaste => write!(f, "waste is empty"),
            Rejection::StockNotEmpty => write!(f, "stock is not empty"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Result of trying a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was legal; this is the new state.
    Applied(GameState),
    /// The move was illegal; the input state stands.
    Rejected(Rejection),
}

impl MoveOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }

    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            MoveOutcome::Applied(_) => None,
            MoveOutcome::Rejected(r) => Some(r),
        }
    }

    /// The new state, or a copy of `original` if the move was rejected.
    #[must_use]
    pub fn into_state_or(self, original: &GameState) -> GameState {
        match self {
            MoveOutcome::Applied(state) => state,
            MoveOutcome::Rejected(_) => original.clone(),
        }
    }

    pub fn into_result(self) -> Result<GameState, Rejection> {
        match self {
            MoveOutcome::Applied(state) => Ok(state),
            MoveOutcome::Rejected(r) => Err(r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DrawMode, Suit};

    #[test]
    fn test_rejected_keeps_original() {
        let original = GameState::builder(DrawMode::One).move_count(4).build();
        let outcome = MoveOutcome::Rejected(Rejection::EmptyWaste);

        assert!(!outcome.is_applied());
        assert_eq!(outcome.rejection(), Some(&Rejection::EmptyWaste));
        assert_eq!(outcome.into_state_or(&original), original);
    }

    #[test]
    fn test_applied_yields_new_state() {
        let original = GameState::builder(DrawMode::One).build();
        let next = GameState::builder(DrawMode::One).move_count(1).build();
        let outcome = MoveOutcome::Applied(next.clone());

        assert!(outcome.is_applied());
        assert!(outcome.rejection().is_none());
        assert_eq!(outcome.clone().into_result(), Ok(next.clone()));
        assert_eq!(outcome.into_state_or(&original), next);
    }

    #[test]
    fn test_display() {
        let card = Card::new(Suit::Hearts, 5).turned_up();

        assert_eq!(
            Rejection::IllegalPlacement { card, column: 2 }.to_string(),
            "5♥ cannot be placed on column 2"
        );
        assert_eq!(Rejection::StockNotEmpty.to_string(), "stock is not empty");
        assert_eq!(
            Rejection::NotEnoughCards { column: 1, requested: 4, available: 2 }.to_string(),
            "column 1 has 2 cards, 4 requested"
        );
    }
}
