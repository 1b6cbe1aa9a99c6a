//! Card values - suits, ranks, and the role each card plays in the dungeon.
//!
//! A Scoundrel card is a plain value: a suit and a rank from 2 to 14
//! (11 = Jack, 12 = Queen, 13 = King, 14 = Ace). The suit alone decides
//! what the card does when resolved:
//!
//! | Suit              | Type    | Effect                         |
//! |-------------------|---------|--------------------------------|
//! | Clubs, Spades     | Monster | Deals damage equal to its rank |
//! | Diamonds          | Weapon  | Reduces monster damage         |
//! | Hearts            | Potion  | Restores health                |

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest card rank.
pub const MIN_VALUE: u8 = 2;

/// Highest card rank (Ace).
pub const MAX_VALUE: u8 = 14;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Diamonds, Suit::Hearts];

    /// The dungeon role of cards in this suit.
    #[must_use]
    pub const fn card_type(self) -> CardType {
        match self {
            Suit::Hearts => CardType::Potion,
            Suit::Diamonds => CardType::Weapon,
            Suit::Clubs | Suit::Spades => CardType::Monster,
        }
    }

    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

/// What a card does when the player resolves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Monster,
    Weapon,
    Potion,
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardType::Monster => "monster",
            CardType::Weapon => "weapon",
            CardType::Potion => "potion",
        };
        f.write_str(name)
    }
}

/// Errors from building a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("card value {0} is outside {MIN_VALUE}..={MAX_VALUE}")]
    ValueOutOfRange(u8),
}

/// An immutable playing card.
///
/// ## Example
///
/// ```
/// use scoundrel::cards::{Card, CardType, Suit};
///
/// let queen = Card::new(Suit::Spades, 12);
/// assert_eq!(queen.card_type(), CardType::Monster);
/// assert_eq!(queen.to_string(), "Q♠");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    value: u8,
}

impl Card {
    /// Create a card, panicking on an out-of-range value.
    ///
    /// Use [`Card::try_new`] for untrusted input.
    #[must_use]
    pub fn new(suit: Suit, value: u8) -> Self {
        assert!(
            (MIN_VALUE..=MAX_VALUE).contains(&value),
            "Card value must be {MIN_VALUE}-{MAX_VALUE}"
        );
        Self { suit, value }
    }

    /// Create a card, rejecting values outside 2..=14.
    pub fn try_new(suit: Suit, value: u8) -> Result<Self, CardError> {
        if (MIN_VALUE..=MAX_VALUE).contains(&value) {
            Ok(Self { suit, value })
        } else {
            Err(CardError::ValueOutOfRange(value))
        }
    }

    /// A potion.
    #[must_use]
    pub fn hearts(value: u8) -> Self {
        Self::new(Suit::Hearts, value)
    }

    /// A weapon.
    #[must_use]
    pub fn diamonds(value: u8) -> Self {
        Self::new(Suit::Diamonds, value)
    }

    /// A monster.
    #[must_use]
    pub fn clubs(value: u8) -> Self {
        Self::new(Suit::Clubs, value)
    }

    /// A monster.
    #[must_use]
    pub fn spades(value: u8) -> Self {
        Self::new(Suit::Spades, value)
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Rank, 2 through 14.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.value
    }

    #[must_use]
    pub const fn card_type(self) -> CardType {
        self.suit.card_type()
    }

    #[must_use]
    pub const fn is_monster(self) -> bool {
        matches!(self.card_type(), CardType::Monster)
    }

    /// Check the value range of a card that bypassed the constructors
    /// (for example one decoded from storage).
    pub fn validate(self) -> Result<(), CardError> {
        Self::try_new(self.suit, self.value).map(|_| ())
    }

    fn rank_label(self) -> String {
        match self.value {
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            14 => "A".to_string(),
            v => v.to_string(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}

/// Sum of monster values in a sequence of cards.
pub fn monster_total<'a>(cards: impl IntoIterator<Item = &'a Card>) -> i32 {
    cards
        .into_iter()
        .filter(|c| c.is_monster())
        .map(|c| i32::from(c.value()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_types_by_suit() {
        assert_eq!(Card::hearts(5).card_type(), CardType::Potion);
        assert_eq!(Card::diamonds(5).card_type(), CardType::Weapon);
        assert_eq!(Card::clubs(5).card_type(), CardType::Monster);
        assert_eq!(Card::spades(5).card_type(), CardType::Monster);
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert_eq!(Card::try_new(Suit::Clubs, 1), Err(CardError::ValueOutOfRange(1)));
        assert_eq!(Card::try_new(Suit::Clubs, 15), Err(CardError::ValueOutOfRange(15)));
        assert!(Card::try_new(Suit::Clubs, 2).is_ok());
        assert!(Card::try_new(Suit::Clubs, 14).is_ok());
    }

    #[test]
    #[should_panic(expected = "Card value must be")]
    fn test_new_panics_out_of_range() {
        let _ = Card::new(Suit::Hearts, 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::clubs(10).to_string(), "10♣");
        assert_eq!(Card::spades(11).to_string(), "J♠");
        assert_eq!(Card::spades(14).to_string(), "A♠");
        assert_eq!(Card::hearts(2).to_string(), "2♥");
        assert_eq!(Card::diamonds(7).to_string(), "7♦");
    }

    #[test]
    fn test_monster_total_ignores_other_types() {
        let cards = [Card::clubs(7), Card::hearts(9), Card::spades(3), Card::diamonds(4)];
        assert_eq!(monster_total(&cards), 10);
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::spades(13);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"suit":"spades","value":13}"#);

        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }

    #[test]
    fn test_validate_catches_decoded_garbage() {
        let bad: Card = serde_json::from_str(r#"{"suit":"clubs","value":99}"#).unwrap();
        assert_eq!(bad.validate(), Err(CardError::ValueOutOfRange(99)));
    }
}
