//! Monster combat.
//!
//! Barehanded: take the monster's full value.
//! Armed: take `max(0, monster - weapon)`, and the monster joins the stack.
//! A used weapon only works on monsters no stronger than the last one it slew;
//! anything stronger is fought barehanded and the stack is left alone.

use crate::cards::{Card, WeaponStack};

use super::event::Combat;

/// Decide how `monster` will be fought with the current weapon stack.
#[must_use]
pub fn plan(weapon: &WeaponStack, monster: Card) -> Combat {
    let Some(equipped) = weapon.weapon() else {
        return Combat::Barehanded;
    };
    match weapon.last_slain() {
        Some(last) if monster.value() > last.value() => Combat::WeaponBlocked {
            weapon: equipped,
            last_slain: last,
        },
        _ => Combat::Armed { weapon: equipped },
    }
}

/// Damage dealt to the player by `monster` under `combat`.
#[must_use]
pub fn damage(combat: Combat, monster: Card) -> i32 {
    let value = i32::from(monster.value());
    match combat {
        Combat::Armed { weapon } => (value - i32::from(weapon.value())).max(0),
        Combat::Barehanded | Combat::WeaponBlocked { .. } => value,
    }
}
