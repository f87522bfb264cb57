//! Game state: tableau, foundations, stock and waste.
//!
//! ## GameState
//!
//! A complete, self-contained Klondike position:
//! - Identity token and draw mode
//! - Seven tableau columns
//! - Four foundations, one per suit
//! - Stock and waste
//! - Move counter and win flag
//!
//! States are values. The engine never mutates a state it was handed; it
//! clones it (O(1) per pile thanks to `im`) and returns the changed copy.
//! Fields are crate-private so that only the deal and rules modules produce
//! new positions.

use serde::{Deserialize, Serialize};

use super::card::{Card, Suit, ACE, DECK_SIZE, RANKS_PER_SUIT};
use super::config::DrawMode;
use super::pile::Pile;

/// Number of tableau columns.
pub const TABLEAU_COLUMNS: usize = 7;

/// Number of foundations (one per suit).
pub const FOUNDATION_COUNT: usize = 4;

/// Unique identity of a dealt game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Four foundation piles indexed by `Suit::index()`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Foundations([Pile; FOUNDATION_COUNT]);

impl Foundations {
    /// The foundation for a suit.
    #[must_use]
    pub fn pile(&self, suit: Suit) -> &Pile {
        &self.0[suit.index()]
    }

    pub(crate) fn pile_mut(&mut self, suit: Suit) -> &mut Pile {
        &mut self.0[suit.index()]
    }

    /// Iterate foundations in suit order.
    pub fn iter(&self) -> impl Iterator<Item = (Suit, &Pile)> {
        Suit::ALL.into_iter().zip(self.0.iter())
    }

    /// Total cards across all foundations.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.0.iter().map(Pile::len).sum()
    }
}

/// Face-down draw pile and the face-up discard it feeds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StockWaste {
    pub stock: Pile,
    pub waste: Pile,
}

/// A complete Klondike position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) id: GameId,
    pub(crate) draw: DrawMode,
    pub(crate) tableau: [Pile; TABLEAU_COLUMNS],
    pub(crate) foundations: Foundations,
    pub(crate) stock_waste: StockWaste,
    pub(crate) move_count: u32,
    pub(crate) won: bool,
}

impl GameState {
    /// Start a positional builder. See `GameStateBuilder`.
    #[must_use]
    pub fn builder(draw: DrawMode) -> GameStateBuilder {
        GameStateBuilder::new(draw)
    }

    pub(crate) fn empty(id: GameId, draw: DrawMode) -> Self {
        Self {
            id,
            draw,
            tableau: Default::default(),
            foundations: Foundations::default(),
            stock_waste: StockWaste::default(),
            move_count: 0,
            won: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[must_use]
    pub fn draw(&self) -> DrawMode {
        self.draw
    }

    /// All seven columns.
    #[must_use]
    pub fn tableau(&self) -> &[Pile; TABLEAU_COLUMNS] {
        &self.tableau
    }

    /// A single column, or `None` if `index >= 7`.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Pile> {
        self.tableau.get(index)
    }

    #[must_use]
    pub fn foundations(&self) -> &Foundations {
        &self.foundations
    }

    #[must_use]
    pub fn foundation(&self, suit: Suit) -> &Pile {
        self.foundations.pile(suit)
    }

    #[must_use]
    pub fn stock(&self) -> &Pile {
        &self.stock_waste.stock
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.stock_waste.waste
    }

    /// Number of accepted moves so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Win flag, recomputed after every accepted move.
    #[must_use]
    pub fn won(&self) -> bool {
        self.won
    }

    /// Every card in the position: tableau, foundations, stock, waste.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.tableau
            .iter()
            .flat_map(Pile::iter)
            .chain(self.foundations.0.iter().flat_map(Pile::iter))
            .chain(self.stock_waste.stock.iter())
            .chain(self.stock_waste.waste.iter())
    }

    // === Checkpointing ===

    /// Encode as a compact binary checkpoint.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a checkpoint produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Game {} ({}), moves: {}{}", self.id, self.draw, self.move_count, if self.won { ", won" } else { "" })?;

        write!(f, "Foundations:")?;
        for (_, pile) in self.foundations.iter() {
            match pile.top() {
                Some(card) => write!(f, " [{}]", card)?,
                None => write!(f, " [--]")?,
            }
        }
        writeln!(f)?;

        let waste = &self.stock_waste.waste;
        let shown = waste.peek_top(waste.len().min(3)).unwrap_or_default();
        writeln!(f, "Stock: {}  Waste: {}", self.stock_waste.stock.len(), shown)?;

        for (i, column) in self.tableau.iter().enumerate() {
            writeln!(f, "{}: {}", i, column)?;
        }
        Ok(())
    }
}

/// Builds positions card by card.
///
/// Used to restore positions and to set up specific situations in tests.
/// It performs no validation; run `rules::invariants::check` on the result
/// when the position is meant to be a full deal.
///
/// ```
/// use klondike_engine::core::{Card, DrawMode, GameState, Suit};
///
/// let state = GameState::builder(DrawMode::One)
///     .column(0, [Card::new(Suit::Spades, 13).turned_up()])
///     .foundation(Suit::Hearts, 3)
///     .build();
///
/// assert_eq!(state.column(0).unwrap().len(), 1);
/// assert_eq!(state.foundation(Suit::Hearts).len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct GameStateBuilder {
    state: GameState,
}

impl GameStateBuilder {
    fn new(draw: DrawMode) -> Self {
        Self {
            state: GameState::empty(GameId::default(), draw),
        }
    }

    #[must_use]
    pub fn id(mut self, id: GameId) -> Self {
        self.state.id = id;
        self
    }

    /// Set a column's cards, bottom first.
    ///
    /// Panics if `index >= 7`.
    #[must_use]
    pub fn column(mut self, index: usize, cards: impl IntoIterator<Item = Card>) -> Self {
        assert!(index < TABLEAU_COLUMNS, "Column must be 0-6, got {}", index);
        self.state.tableau[index] = cards.into_iter().collect();
        self
    }

    /// Set the stock, bottom first.
    #[must_use]
    pub fn stock(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.state.stock_waste.stock = cards.into_iter().collect();
        self
    }

    /// Set the waste, bottom first.
    #[must_use]
    pub fn waste(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.state.stock_waste.waste = cards.into_iter().collect();
        self
    }

    /// Fill a foundation with Ace through `top_rank` of its suit, face-up.
    #[must_use]
    pub fn foundation(mut self, suit: Suit, top_rank: u8) -> Self {
        let top_rank = top_rank.min(RANKS_PER_SUIT as u8);
        *self.state.foundations.pile_mut(suit) =
            (ACE..=top_rank).map(|r| Card::new(suit, r).turned_up()).collect();
        self
    }

    #[must_use]
    pub fn move_count(mut self, count: u32) -> Self {
        self.state.move_count = count;
        self
    }

    /// Finish the position; the win flag is derived from the foundations.
    #[must_use]
    pub fn build(mut self) -> GameState {
        self.state.won = self.state.foundations.card_count() == DECK_SIZE;
        self.state
    }
}
