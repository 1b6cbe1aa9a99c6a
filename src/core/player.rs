//! Player state: health and the per-room flags.

use serde::{Deserialize, Serialize};

/// The adventurer.
///
/// Health is clamped to `[0, max_health]` by every mutator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    /// Current health.
    pub health: i32,

    /// Healing cap.
    pub max_health: i32,

    /// A potion has already been drunk in the current room.
    pub used_potion_this_room: bool,

    /// The room before this one was avoided.
    pub avoided_previous_room: bool,
}

impl PlayerState {
    /// A fresh player at full health.
    #[must_use]
    pub fn new(max_health: i32) -> Self {
        assert!(max_health > 0, "Max health must be positive");
        Self {
            health: max_health,
            max_health,
            used_potion_this_room: false,
            avoided_previous_room: false,
        }
    }

    /// Apply damage, flooring health at zero. Returns the health lost.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = (self.health - amount.max(0)).max(0);
        before - self.health
    }

    /// Heal up to `max_health`. Returns the health restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let restored = amount.max(0).min(self.max_health - self.health);
        self.health += restored;
        restored
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    #[must_use]
    pub fn at_full_health(&self) -> bool {
        self.health == self.max_health
    }

    /// Clear the per-room flags that reset when a new room is dealt.
    pub fn enter_room(&mut self) {
        self.used_potion_this_room = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_full_health() {
        let player = PlayerState::new(20);
        assert_eq!(player.health, 20);
        assert!(player.at_full_health());
        assert!(player.is_alive());
    }

    #[test]
    fn test_damage_floors_at_zero() {
        let mut player = PlayerState::new(20);

        assert_eq!(player.take_damage(8), 8);
        assert_eq!(player.health, 12);

        assert_eq!(player.take_damage(14), 12);
        assert_eq!(player.health, 0);
        assert!(!player.is_alive());
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut player = PlayerState::new(20);
        player.take_damage(3);

        assert_eq!(player.heal(10), 3);
        assert_eq!(player.health, 20);
        assert_eq!(player.heal(5), 0);
    }

    #[test]
    fn test_enter_room_resets_potion_flag() {
        let mut player = PlayerState::new(20);
        player.used_potion_this_room = true;
        player.avoided_previous_room = true;

        player.enter_room();

        assert!(!player.used_potion_this_room);
        assert!(player.avoided_previous_room);
    }
}
