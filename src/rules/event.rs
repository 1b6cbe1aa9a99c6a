//! Events emitted by a transition.
//!
//! Events describe what happened so presentation code can narrate a move
//! ("Fought J♠ with 5♦, took 6 damage") without redoing any rules math.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::GameOutcome;

/// How a monster was fought.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combat {
    /// No weapon equipped.
    Barehanded,
    /// Equipped weapon used; the monster joined its stack.
    Armed { weapon: Card },
    /// A weapon is equipped but the monster outranks the last one it slew,
    /// so the fight happens barehanded.
    WeaponBlocked { weapon: Card, last_slain: Card },
}

impl Combat {
    /// Whether the equipped weapon took part.
    #[must_use]
    pub fn used_weapon(&self) -> bool {
        matches!(self, Combat::Armed { .. })
    }
}

/// Something that happened while applying an action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEvent {
    MonsterFought {
        monster: Card,
        combat: Combat,
        damage: i32,
    },
    /// The equipped weapon could not be used against `monster`.
    IllegalCombat { monster: Card, last_slain: Card },
    WeaponEquipped {
        weapon: Card,
        /// Previous weapon followed by its slain monsters.
        discarded: Vec<Card>,
    },
    PotionDrunk { potion: Card, healed: i32 },
    /// Second potion in the same room.
    PotionWasted { potion: Card },
    /// Cards sent to the back of the deck.
    RoomAvoided { requeued: Vec<Card> },
    /// Cards drawn into the room.
    RoomDealt { drawn: Vec<Card> },
    GameOver(GameOutcome),
}

/// Events from one transition, in order.
pub type Events = SmallVec<[GameEvent; 4]>;
