//! Player actions.
//!
//! The whole action surface is two verbs: resolve one card in the room, or
//! avoid the room. These are also the two request shapes a remote host
//! accepts, so `Action` doubles as the transport request type.

use serde::{Deserialize, Serialize};

/// A player action.
///
/// Serializes with snake_case tags:
///
/// ```
/// use scoundrel::core::Action;
///
/// let json = serde_json::to_string(&Action::SelectCard { index: 2 }).unwrap();
/// assert_eq!(json, r#"{"select_card":{"index":2}}"#);
/// assert_eq!(serde_json::to_string(&Action::AvoidRoom).unwrap(), r#""avoid_room""#);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Resolve the card at `index` in the current room.
    SelectCard { index: usize },
    /// Skip the current room, sending its cards to the back of the deck.
    AvoidRoom,
}

impl Action {
    /// Shorthand for `Action::SelectCard { index }`.
    #[must_use]
    pub const fn select(index: usize) -> Self {
        Action::SelectCard { index }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::SelectCard { index } => write!(f, "select card {index}"),
            Action::AvoidRoom => f.write_str("avoid room"),
        }
    }
}

/// An accepted action with its position in the game.
///
/// Used for:
/// - Replaying a game from its seed
/// - Debugging and session audit
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Zero-based position in the game's action sequence.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, sequence: u32) -> Self {
        Self { action, sequence }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_equality() {
        assert_eq!(Action::select(1), Action::SelectCard { index: 1 });
        assert_ne!(Action::select(1), Action::select(2));
        assert_ne!(Action::select(0), Action::AvoidRoom);
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::select(3).to_string(), "select card 3");
        assert_eq!(Action::AvoidRoom.to_string(), "avoid room");
    }

    #[test]
    fn test_action_deserialization() {
        let select: Action = serde_json::from_str(r#"{"select_card":{"index":0}}"#).unwrap();
        let avoid: Action = serde_json::from_str(r#""avoid_room""#).unwrap();

        assert_eq!(select, Action::select(0));
        assert_eq!(avoid, Action::AvoidRoom);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(Action::select(2), 7);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
