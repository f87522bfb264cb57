//! # klondike-engine
//!
//! A rules engine for Klondike Solitaire.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every rules operation takes a state and returns
//!    a new one. Nothing mutates its input, so any state can be kept,
//!    compared or replayed.
//!
//! 2. **Illegal Is Not An Error**: An illegal move returns the state
//!    unchanged (`apply_move`), or a `Rejection` saying why
//!    (`try_apply_move`). Callers detect rejection by comparing
//!    `move_count`.
//!
//! 3. **Deterministic When Seeded**: Deals draw from a `GameRng`; the same
//!    seed gives the same shuffle and the same game id.
//!
//! ## Architecture
//!
//! - **Persistent Piles**: Piles are `im` vectors, so cloning a state for
//!   every move is cheap.
//!
//! - **Sessions Outside The Engine**: The engine holds no global game.
//!   `session` owns state between calls for callers that want one.
//!
//! ## Modules
//!
//! - `core`: Cards, piles, state, moves, RNG, configuration
//! - `deal`: Shuffled deck and initial layout
//! - `rules`: Move validation and application, win detection, invariants
//! - `solver`: Greedy auto-move to the foundations
//! - `session`: Single-game and keyed multi-game sessions
//!
//! ## Example
//!
//! ```
//! use klondike_engine::{apply_move, deal_with_rng, DrawMode, GameRng, Move};
//!
//! let state = deal_with_rng(DrawMode::Three, &mut GameRng::new(7));
//! let next = apply_move(&state, &Move::FlipStock);
//!
//! assert_eq!(next.waste().len(), 3);
//! assert_eq!(next.move_count(), 1);
//! assert_eq!(state.move_count(), 0);
//! ```

pub mod core;
pub mod deal;
pub mod rules;
pub mod session;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, Color, Suit,
    Pile,
    GameRng,
    DrawMode, GameConfig,
    Move, MoveDescriptor, MoveKind,
    GameId, GameState, GameStateBuilder,
};

pub use crate::deal::{deal, deal_with_rng};

pub use crate::rules::{
    apply_descriptor, apply_move, try_apply_descriptor, try_apply_move,
    is_won,
    Klondike, MoveList, RulesEngine,
    MoveOutcome, Rejection, InvariantViolation,
};

pub use crate::solver::auto_move;

pub use crate::session::{Command, GameSession, Report, SessionError, SessionStore, Summary};
