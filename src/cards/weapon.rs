//! Equipped weapon and the monsters it has slain.
//!
//! A weapon degrades as it is used: once it has slain a monster, it can only
//! be used against monsters of equal or lower value than the last one slain.
//! An unused weapon has no ceiling.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// The equipped weapon plus its slain-monster stack, in slaying order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeaponStack {
    weapon: Option<Card>,
    slain: Vec<Card>,
}

impl WeaponStack {
    /// No weapon equipped.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A stack with a weapon and pre-slain monsters. Used to restore positions;
    /// the caller is responsible for the ordering invariant.
    #[must_use]
    pub fn with_slain(weapon: Card, slain: impl IntoIterator<Item = Card>) -> Self {
        Self {
            weapon: Some(weapon),
            slain: slain.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn weapon(&self) -> Option<Card> {
        self.weapon
    }

    /// Slain monsters, oldest first.
    #[must_use]
    pub fn slain(&self) -> &[Card] {
        &self.slain
    }

    #[must_use]
    pub fn last_slain(&self) -> Option<Card> {
        self.slain.last().copied()
    }

    /// Total cards held: the weapon plus its stack.
    #[must_use]
    pub fn card_count(&self) -> usize {
        usize::from(self.weapon.is_some()) + self.slain.len()
    }

    /// Can the equipped weapon be used against `monster`?
    ///
    /// False with no weapon. With an empty stack any monster qualifies.
    #[must_use]
    pub fn can_slay(&self, monster: Card) -> bool {
        match (self.weapon, self.last_slain()) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(_), Some(last)) => monster.value() <= last.value(),
        }
    }

    /// Push a monster onto the stack.
    pub fn slay(&mut self, monster: Card) {
        debug_assert!(self.can_slay(monster), "weapon cannot slay {monster}");
        self.slain.push(monster);
    }

    /// Equip `weapon`, returning the previous weapon followed by its slain
    /// monsters (empty if nothing was equipped).
    pub fn equip(&mut self, weapon: Card) -> Vec<Card> {
        let previous = std::mem::replace(
            self,
            Self {
                weapon: Some(weapon),
                slain: Vec::new(),
            },
        );
        previous.weapon.into_iter().chain(previous.slain).collect()
    }
}
