//! Session layer: owns game state between calls.
//!
//! The engine itself is pure; sessions hold the state a caller is playing
//! and route commands through the engine.
//!
//! - `GameSession` keeps one current game, dealing draw-1 on first use
//! - `SessionStore` keeps many games by id behind a lock
//!
//! Both speak `Command` in and `Report` out.

mod command;
mod game;
mod store;

pub use command::{Command, Report, Summary, DEAL_MESSAGE, WIN_MESSAGE};
pub use game::GameSession;
pub use store::{SessionError, SessionStore};
