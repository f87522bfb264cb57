//! Core types: cards, piles, state, moves, RNG, configuration.
//!
//! This module contains the value types the rest of the engine passes
//! around. Nothing here enforces the rules of play; see `rules`.

pub mod card;
pub mod pile;
pub mod rng;
pub mod config;
pub mod moves;
pub mod state;

pub use card::{Card, CardId, Color, Suit, ACE, DECK_SIZE, KING, RANKS_PER_SUIT};
pub use pile::Pile;
pub use rng::GameRng;
pub use config::{DrawMode, GameConfig};
pub use moves::{Move, MoveDescriptor, MoveKind};
pub use state::{
    Foundations, GameId, GameState, GameStateBuilder, StockWaste, FOUNDATION_COUNT, TABLEAU_COLUMNS,
};
