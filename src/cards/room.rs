//! The room: the working set of cards the player resolves one at a time.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{monster_total, Card};
use super::deck::Deck;

/// Cards currently face-up in front of the player.
///
/// SmallVec keeps the common four-card room inline without heap allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Room {
    cards: SmallVec<[Card; 4]>,
}

impl Room {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A room holding the given cards, in order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Remove the card at `index`, shifting later cards left.
    ///
    /// Returns `None` if the index is out of range.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Empty the room, returning its cards in order.
    pub fn clear(&mut self) -> SmallVec<[Card; 4]> {
        std::mem::take(&mut self.cards)
    }

    /// Draw from the front of `deck` until the room holds `size` cards or the
    /// deck runs out. Returns the cards drawn.
    pub fn fill_from(&mut self, deck: &mut Deck, size: usize) -> SmallVec<[Card; 4]> {
        let mut drawn = SmallVec::new();
        while self.cards.len() < size {
            let Some(card) = deck.draw() else { break };
            self.cards.push(card);
            drawn.push(card);
        }
        drawn
    }

    /// Sum of monster values in the room.
    #[must_use]
    pub fn monster_total(&self) -> i32 {
        monster_total(&self.cards)
    }
}
