//! Card types and the card collections a dungeon is made of.
//!
//! - `Card`: immutable suit + value; the suit decides its `CardType`
//! - `Deck`: the undrawn dungeon, drawn from the front
//! - `Room`: the up-to-four cards in play
//! - `WeaponStack`: equipped weapon plus slain monsters

pub mod card;
pub mod deck;
pub mod room;
pub mod weapon;

pub use card::{Card, CardError, CardType, Suit, MAX_VALUE, MIN_VALUE};
pub use deck::{Deck, STANDARD_DECK_SIZE};
pub use room::Room;
pub use weapon::WeaponStack;
