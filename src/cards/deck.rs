//! The dungeon deck.
//!
//! Cards are drawn from the front. Avoided rooms go to the back. The deck is
//! shuffled exactly once, when the game is created, and never again.
//!
//! Backed by `im::Vector` so that cloning a `GameState` snapshot is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{monster_total, Card, Suit};
use crate::core::rng::GameRng;

/// Number of cards in the standard dungeon.
pub const STANDARD_DECK_SIZE: usize = 44;

/// Ordered sequence of undrawn cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The unshuffled standard dungeon: a 52-card deck without red face
    /// cards and red aces.
    ///
    /// ```
    /// use scoundrel::cards::{Deck, STANDARD_DECK_SIZE};
    ///
    /// assert_eq!(Deck::standard().len(), STANDARD_DECK_SIZE);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vector::new();
        for suit in Suit::ALL {
            let top = match suit {
                Suit::Clubs | Suit::Spades => 14,
                Suit::Hearts | Suit::Diamonds => 10,
            };
            for value in 2..=top {
                cards.push_back(Card::new(suit, value));
            }
        }
        Self { cards }
    }

    /// The standard dungeon in shuffled order.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = Self::standard().cards.into_iter().collect();
        rng.shuffle(&mut cards);
        Self::from_cards(cards)
    }

    /// A deck with the given cards, front first.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Draw the front card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Append cards to the back, preserving their order.
    pub fn place_at_bottom(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Sum of monster values still in the deck.
    #[must_use]
    pub fn monster_total(&self) -> i32 {
        monster_total(&self.cards)
    }
}
