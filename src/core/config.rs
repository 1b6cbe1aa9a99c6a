//! Game configuration.
//!
//! The defaults are the published Scoundrel rules: 20 health and rooms of
//! four cards. Variants (harder starts, bigger rooms) only need a different
//! `GameConfig`; the rules engine reads every limit from here.

use serde::{Deserialize, Serialize};

/// Starting and maximum health under the standard rules.
pub const DEFAULT_MAX_HEALTH: i32 = 20;

/// Cards dealt per room under the standard rules.
pub const DEFAULT_ROOM_SIZE: usize = 4;

/// Rules configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Health at game start, and the healing cap.
    pub max_health: i32,

    /// Cards in a full room. A room is refilled once it is down to one card,
    /// and only a full room can be avoided.
    pub room_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_health: DEFAULT_MAX_HEALTH,
            room_size: DEFAULT_ROOM_SIZE,
        }
    }
}

impl GameConfig {
    /// Set maximum (and starting) health.
    #[must_use]
    pub fn with_max_health(mut self, max_health: i32) -> Self {
        assert!(max_health > 0, "Max health must be positive");
        self.max_health = max_health;
        self
    }

    /// Set the room size.
    #[must_use]
    pub fn with_room_size(mut self, room_size: usize) -> Self {
        assert!(room_size >= 2, "A room needs at least 2 cards");
        self.room_size = room_size;
        self
    }
}
