//! Move representation.
//!
//! Two forms:
//! - `Move`: the typed move the engine works with
//! - `MoveDescriptor`: the loose wire form (`type` plus optional `from`,
//!   `to`, `count`) that callers send. Any descriptor that does not name a
//!   well-formed move resolves to `None` and is treated as an illegal move.
//!
//! ```
//! use klondike_engine::core::{Move, MoveDescriptor};
//!
//! let desc: MoveDescriptor =
//!     serde_json::from_str(r#"{"type": "tableau_to_foundation", "from": 2}"#).unwrap();
//! assert_eq!(desc.to_move(), Some(Move::TableauToFoundation { from: 2 }));
//!
//! let missing: MoveDescriptor =
//!     serde_json::from_str(r#"{"type": "waste_to_tableau"}"#).unwrap();
//! assert_eq!(missing.to_move(), None);
//! ```

use serde::{Deserialize, Serialize};

use super::state::TABLEAU_COLUMNS;

/// The six kinds of Klondike move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    FlipStock,
    RecycleStock,
    TableauToTableau,
    TableauToFoundation,
    WasteToTableau,
    WasteToFoundation,
}

/// A typed move. Column indices are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Move {
    /// Turn up to draw-mode cards from stock onto waste.
    FlipStock,
    /// Return the whole waste to an empty stock.
    RecycleStock,
    /// Move the top `count` face-up cards of one column onto another.
    TableauToTableau { from: usize, count: usize, to: usize },
    /// Move a column's top card to its foundation.
    TableauToFoundation { from: usize },
    /// Move the waste's top card onto a column.
    WasteToTableau { to: usize },
    /// Move the waste's top card to its foundation.
    WasteToFoundation,
}

impl Move {
    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        match self {
            Move::FlipStock => MoveKind::FlipStock,
            Move::RecycleStock => MoveKind::RecycleStock,
            Move::TableauToTableau { .. } => MoveKind::TableauToTableau,
            Move::TableauToFoundation { .. } => MoveKind::TableauToFoundation,
            Move::WasteToTableau { .. } => MoveKind::WasteToTableau,
            Move::WasteToFoundation => MoveKind::WasteToFoundation,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Move::FlipStock => write!(f, "flip stock"),
            Move::RecycleStock => write!(f, "recycle stock"),
            Move::TableauToTableau { from, count, to } => {
                write!(f, "column {} -> column {} ({} cards)", from, to, count)
            }
            Move::TableauToFoundation { from } => write!(f, "column {} -> foundation", from),
            Move::WasteToTableau { to } => write!(f, "waste -> column {}", to),
            Move::WasteToFoundation => write!(f, "waste -> foundation"),
        }
    }
}

/// Loose move request as received from a caller.
///
/// Fields are signed so that negative indices deserialize and are rejected
/// as moves rather than failing to parse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDescriptor {
    #[serde(rename = "type")]
    pub kind: MoveKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

impl MoveDescriptor {
    /// Descriptor with no fields set.
    #[must_use]
    pub fn new(kind: MoveKind) -> Self {
        Self {
            kind,
            from: None,
            to: None,
            count: None,
        }
    }

    #[must_use]
    pub fn with_from(mut self, from: i64) -> Self {
        self.from = Some(from);
        self
    }

    #[must_use]
    pub fn with_to(mut self, to: i64) -> Self {
        self.to = Some(to);
        self
    }

    #[must_use]
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    /// Resolve into a typed move.
    ///
    /// Returns `None` if a field the kind needs is absent, a column index is
    /// outside `0..7`, or a count is below 1. Fields the kind does not use
    /// are ignored.
    #[must_use]
    pub fn to_move(&self) -> Option<Move> {
        let column = |v: Option<i64>| {
            v.and_then(|i| usize::try_from(i).ok())
                .filter(|&i| i < TABLEAU_COLUMNS)
        };

        match self.kind {
            MoveKind::FlipStock => Some(Move::FlipStock),
            MoveKind::RecycleStock => Some(Move::RecycleStock),
            MoveKind::TableauToTableau => {
                let count = self
                    .count
                    .and_then(|c| usize::try_from(c).ok())
                    .filter(|&c| c >= 1)?;
                Some(Move::TableauToTableau {
                    from: column(self.from)?,
                    count,
                    to: column(self.to)?,
                })
            }
            MoveKind::TableauToFoundation => Some(Move::TableauToFoundation {
                from: column(self.from)?,
            }),
            MoveKind::WasteToTableau => Some(Move::WasteToTableau { to: column(self.to)? }),
            MoveKind::WasteToFoundation => Some(Move::WasteToFoundation),
        }
    }
}

impl From<Move> for MoveDescriptor {
    fn from(mv: Move) -> Self {
        let desc = MoveDescriptor::new(mv.kind());
        match mv {
            Move::TableauToTableau { from, count, to } => desc
                .with_from(from as i64)
                .with_count(count as i64)
                .with_to(to as i64),
            Move::TableauToFoundation { from } => desc.with_from(from as i64),
            Move::WasteToTableau { to } => desc.with_to(to as i64),
            Move::FlipStock | Move::RecycleStock | Move::WasteToFoundation => desc,
        }
    }
}
