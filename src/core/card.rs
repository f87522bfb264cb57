//! Card identity, suit, rank and face orientation.
//!
//! Every card in a deal has a unique `CardId` derived from its suit and rank,
//! so identity survives serialization and can be checked for duplicates.
//!
//! ## Id Layout
//!
//! - `0..13`: Spades, Ace through King
//! - `13..26`: Hearts
//! - `26..39`: Diamonds
//! - `39..52`: Clubs
//!
//! ```
//! use klondike_engine::core::{Card, CardId, Suit};
//!
//! let ace = Card::new(Suit::Hearts, 1);
//! assert_eq!(ace.id, CardId::of(Suit::Hearts, 1));
//! assert!(ace.is_red());
//! assert!(!ace.face_up);
//! ```

use serde::{Deserialize, Serialize};

/// Lowest rank (Ace).
pub const ACE: u8 = 1;

/// Highest rank (King).
pub const KING: u8 = 13;

/// Number of ranks per suit.
pub const RANKS_PER_SUIT: usize = 13;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Card colour. Tableau runs must alternate colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Black,
}

/// One of the four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in foundation order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Index of this suit's foundation (0..4).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Unique identity of a card within a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Id of the card with the given suit and rank.
    ///
    /// `rank` must be in `1..=13`.
    #[must_use]
    pub const fn of(suit: Suit, rank: u8) -> Self {
        Self((suit.index() * RANKS_PER_SUIT) as u8 + rank - 1)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A playing card.
///
/// Suit, rank and id never change after creation. `face_up` is flipped by
/// the engine as piles are revealed or recycled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardFields")]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    /// 1 = Ace, 11 = Jack, 12 = Queen, 13 = King.
    pub rank: u8,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    ///
    /// Panics if `rank` is outside `1..=13`.
    #[must_use]
    pub fn new(suit: Suit, rank: u8) -> Self {
        assert!((ACE..=KING).contains(&rank), "Rank must be 1-13, got {}", rank);
        Self {
            id: CardId::of(suit, rank),
            suit,
            rank,
            face_up: false,
        }
    }

    /// Same card, face-up.
    #[must_use]
    pub fn turned_up(mut self) -> Self {
        self.face_up = true;
        self
    }

    /// Same card, face-down.
    #[must_use]
    pub fn turned_down(mut self) -> Self {
        self.face_up = false;
        self
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    #[must_use]
    pub const fn is_king(&self) -> bool {
        self.rank == KING
    }

    /// Rank label: `A`, `2`..`10`, `J`, `Q`, `K`; `?` for an out-of-range
    /// rank.
    #[must_use]
    pub fn rank_label(&self) -> &'static str {
        const LABELS: [&str; 13] = ["A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"];
        usize::from(self.rank)
            .checked_sub(1)
            .and_then(|i| LABELS.get(i))
            .copied()
            .unwrap_or("?")
    }
}

/// Wire shape of a `Card`, checked before it becomes one.
#[derive(Deserialize)]
struct CardFields {
    id: CardId,
    suit: Suit,
    rank: u8,
    face_up: bool,
}

impl TryFrom<CardFields> for Card {
    type Error = String;

    fn try_from(raw: CardFields) -> Result<Self, Self::Error> {
        if !(ACE..=KING).contains(&raw.rank) {
            return Err(format!("rank must be 1-13, got {}", raw.rank));
        }
        if raw.id != CardId::of(raw.suit, raw.rank) {
            return Err(format!("{} is not the id of rank {} of {}", raw.id, raw.rank, raw.suit));
        }
        Ok(Card {
            id: raw.id,
            suit: raw.suit,
            rank: raw.rank,
            face_up: raw.face_up,
        })
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.face_up {
            write!(f, "{}{}", self.rank_label(), self.suit)
        } else {
            write!(f, "##")
        }
    }
}
