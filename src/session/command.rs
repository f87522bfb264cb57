//! Commands a caller can send a session, and the reports sent back.
//!
//! The wire form is one JSON object per command:
//!
//! ```json
//! {"command": "new_game", "draw": 3}
//! {"command": "apply_move", "move": {"type": "waste_to_tableau", "to": 4}}
//! {"command": "flip_stock"}
//! {"command": "auto_move"}
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Move, MoveDescriptor};
use crate::rules::{try_apply_descriptor, try_apply_move, MoveOutcome};
use crate::solver::auto_move;

/// Message attached to a freshly dealt game.
pub const DEAL_MESSAGE: &str = "New Klondike deal ready. Good luck!";

/// Message attached to every report on a won game.
pub const WIN_MESSAGE: &str = "You win!";

/// A session command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Deal a new game. An explicit `draw` is normalized (3 is draw-3,
    /// anything else draw-1); without one the session's configured mode is
    /// used.
    NewGame {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        draw: Option<u8>,
    },
    /// Validate and apply one move.
    ApplyMove {
        #[serde(rename = "move")]
        mv: MoveDescriptor,
    },
    /// Flip the stock, or recycle the waste when the stock is empty.
    FlipStock,
    /// Push every obvious card to the foundations.
    AutoMove,
}

impl Command {
    /// Run a play command against `state`.
    ///
    /// Returns `None` for `NewGame`, which needs a dealer rather than a
    /// position. `AutoMove` always yields `Applied`, possibly with the
    /// state unchanged.
    #[must_use]
    pub fn play(&self, state: &GameState) -> Option<MoveOutcome> {
        match self {
            Command::NewGame { .. } => None,
            Command::ApplyMove { mv } => Some(try_apply_descriptor(state, mv)),
            Command::FlipStock => {
                let mv = if state.stock().is_empty() {
                    Move::RecycleStock
                } else {
                    Move::FlipStock
                };
                Some(try_apply_move(state, &mv))
            }
            Command::AutoMove => Some(MoveOutcome::Applied(auto_move(state))),
        }
    }
}

/// Progress summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub move_count: u32,
    pub won: bool,
}

impl From<&GameState> for Summary {
    fn from(state: &GameState) -> Self {
        Self {
            move_count: state.move_count(),
            won: state.won(),
        }
    }
}

/// Result of a command: summary, optional messages, full state snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// True if a game was dealt or the move counter advanced.
    pub accepted: bool,

    pub summary: Summary,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Why the move was refused, when it was.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection: Option<String>,

    pub state: GameState,
}

impl Report {
    /// Report for a freshly dealt game.
    #[must_use]
    pub fn dealt(state: GameState) -> Self {
        Self {
            accepted: true,
            summary: Summary::from(&state),
            message: Some(DEAL_MESSAGE.to_string()),
            rejection: None,
            state,
        }
    }

    /// Report for a play command run against `before`.
    #[must_use]
    pub fn played(before: &GameState, outcome: MoveOutcome) -> Self {
        let rejection = outcome.rejection().map(ToString::to_string);
        let state = outcome.into_state_or(before);
        Self {
            accepted: state.move_count() != before.move_count(),
            summary: Summary::from(&state),
            message: state.won().then(|| WIN_MESSAGE.to_string()),
            rejection,
            state,
        }
    }
}
