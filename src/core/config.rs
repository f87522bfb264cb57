//! Game configuration types.
//!
//! - `DrawMode`: how many cards one stock flip turns over
//! - `GameConfig`: defaults used by sessions when dealing new games

use serde::{Deserialize, Serialize};

/// Number of cards turned from stock to waste per flip.
///
/// Serializes as the plain integer `1` or `3`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DrawMode {
    #[default]
    One,
    Three,
}

impl DrawMode {
    /// Cards per flip.
    #[must_use]
    pub const fn cards(self) -> usize {
        match self {
            DrawMode::One => 1,
            DrawMode::Three => 3,
        }
    }

    /// Normalize a caller-supplied draw count.
    ///
    /// `Some(3)` selects draw-3; anything else, including `None`, is draw-1.
    #[must_use]
    pub fn from_request(draw: Option<u8>) -> Self {
        match draw {
            Some(3) => DrawMode::Three,
            _ => DrawMode::One,
        }
    }
}

impl TryFrom<u8> for DrawMode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DrawMode::One),
            3 => Ok(DrawMode::Three),
            other => Err(format!("draw mode must be 1 or 3, got {}", other)),
        }
    }
}

impl From<DrawMode> for u8 {
    fn from(mode: DrawMode) -> Self {
        mode.cards() as u8
    }
}

impl std::fmt::Display for DrawMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "draw-{}", self.cards())
    }
}

/// Session-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Draw mode for games dealt without an explicit mode.
    #[serde(default)]
    pub draw: DrawMode,

    /// Seed for the dealing RNG. `None` seeds from the OS.
    /// Same seed produces the same sequence of deals.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Set the default draw mode.
    #[must_use]
    pub fn with_draw(mut self, draw: DrawMode) -> Self {
        self.draw = draw;
        self
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draw mode for a new-game request: an explicit count is normalized
    /// with `DrawMode::from_request`, an absent one falls back to `draw`.
    #[must_use]
    pub fn resolve_draw(&self, requested: Option<u8>) -> DrawMode {
        requested.map_or(self.draw, |d| DrawMode::from_request(Some(d)))
    }
}
