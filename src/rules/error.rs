//! Rejection reasons.
//!
//! Every rejection is recoverable: the engine returns the error and the
//! caller's state is exactly what it was before the action.

use thiserror::Error;

use crate::cards::CardError;

/// Why an action was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("illegal action: {0}")]
    IllegalAction(#[from] ActionViolation),

    #[error("cannot avoid room: {0}")]
    IllegalAvoid(#[from] AvoidViolation),
}

/// Actions that are never legal in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionViolation {
    #[error("card index {index} is out of range for a room of {room_len}")]
    IndexOutOfRange { index: usize, room_len: usize },

    #[error("the game is over")]
    GameOver,
}

/// Reasons a room cannot be avoided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AvoidViolation {
    #[error("only a full room can be avoided ({room_len} of {room_size} cards left)")]
    RoomNotFull { room_len: usize, room_size: usize },

    #[error("the previous room was already avoided")]
    ConsecutiveAvoid,
}

/// A state that breaks the model invariants, typically one read back from
/// storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("health {health} is outside 0..={max_health}")]
    HealthOutOfRange { health: i32, max_health: i32 },

    #[error("max health {max_health} does not match the configured {configured}")]
    ConfigMismatch { max_health: i32, configured: i32 },

    #[error("room is empty but {deck_len} cards remain in the deck")]
    EmptyRoom { deck_len: usize },

    #[error("room holds {room_len} cards, more than {room_size}")]
    RoomOverflow { room_len: usize, room_size: usize },

    #[error("invalid card: {0}")]
    Card(#[from] CardError),

    #[error("equipped weapon {0} is not a diamond")]
    WeaponNotDiamond(String),

    #[error("{0} slain monsters with no weapon equipped")]
    SlainWithoutWeapon(usize),

    #[error("slain stack holds non-monster {0}")]
    SlainNotMonster(String),

    #[error("slain monster {later} is stronger than {earlier} slain before it")]
    SlainOutOfOrder { earlier: String, later: String },

    #[error("outcome {recorded:?} does not match the position ({expected:?})")]
    OutcomeMismatch {
        recorded: Option<crate::core::GameOutcome>,
        expected: Option<crate::core::GameOutcome>,
    },
}
