//! Klondike rules: placement, move application, win detection.
//!
//! The engine's contract is value in, value out:
//! - `apply_move` returns a new state, or the unchanged state for an
//!   illegal move
//! - `try_apply_move` returns the same result with the rejection reason
//! - `is_won` is the win predicate recomputed after every accepted move
//!
//! `RulesEngine` wraps these for code that wants to be generic over the
//! rules (enumeration of legal moves lives there).

pub mod apply;
pub mod engine;
pub mod invariants;
pub mod outcome;
pub mod placement;
pub mod win;

pub use apply::{apply_descriptor, apply_move, try_apply_descriptor, try_apply_move};
pub use engine::{Klondike, MoveList, RulesEngine};
pub use invariants::InvariantViolation;
pub use outcome::{MoveOutcome, Rejection};
pub use placement::{can_move_to_foundation, can_stack_on_tableau, is_valid_run, movable_run_len};
pub use win::is_won;
