//! Ordered piles of cards.
//!
//! A `Pile` is a persistent vector: cloning is O(1) and a transition that
//! touches one pile leaves the others shared with the previous state.
//! The last element is the top of the pile.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;

/// An ordered pile of cards; the top is the end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pile(Vector<Card>);

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.0.last()
    }

    /// Card at `index` counted from the bottom.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> + ExactSizeIterator {
        self.0.iter()
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) {
        self.0.push_back(card);
    }

    /// Take the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.0.pop_back()
    }

    /// Copy of the top `count` cards, bottom-most first.
    ///
    /// Returns `None` if the pile holds fewer than `count` cards.
    #[must_use]
    pub fn peek_top(&self, count: usize) -> Option<Pile> {
        let len = self.0.len();
        if count > len {
            return None;
        }
        Some(Pile(self.0.skip(len - count)))
    }

    /// Remove the top `count` cards, keeping their order.
    ///
    /// Returns `None` (and leaves the pile alone) if the pile holds fewer
    /// than `count` cards.
    pub fn take_top(&mut self, count: usize) -> Option<Pile> {
        let len = self.0.len();
        if count > len {
            return None;
        }
        Some(Pile(self.0.split_off(len - count)))
    }

    /// Place another pile on top of this one, keeping its order.
    pub fn append(&mut self, other: Pile) {
        self.0.append(other.0);
    }

    /// Turn the top card face-up if it is face-down.
    ///
    /// Returns true if a card was revealed.
    pub fn reveal_top(&mut self) -> bool {
        match self.0.back_mut() {
            Some(card) if !card.face_up => {
                card.face_up = true;
                true
            }
            _ => false,
        }
    }

    /// Number of consecutive face-up cards at the top.
    #[must_use]
    pub fn face_up_len(&self) -> usize {
        self.0.iter().rev().take_while(|c| c.face_up).count()
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = im::vector::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "--");
        }
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
