//! The Scoundrel rules.
//!
//! Each turn the player either resolves one card from the room or avoids the
//! whole room. Card behavior is a single `match` on `CardType`:
//!
//! - Monster: fight it, barehanded or with the equipped weapon
//! - Weapon: equip it, discarding the old weapon and everything it slew
//! - Potion: heal, at most once per room; later potions are wasted
//!
//! When the room is down to one card, that card stays and the room is
//! refilled from the deck. Avoiding sends a full room to the back of the
//! deck and deals a new one; it cannot be done twice in a row.

use crate::cards::{Card, CardType, Deck};
use crate::core::{Action, GameConfig, GameRng, GameState};

use super::combat;
use super::engine::{RulesEngine, Transition};
use super::error::{ActionViolation, AvoidViolation, RuleError, StateError};
use super::event::{Combat, Events, GameEvent};
use super::scoring;

/// Rules engine for Scoundrel.
///
/// Stateless apart from its configuration; every operation takes a state and
/// returns a new one.
///
/// ## Example
///
/// ```
/// use scoundrel::core::Action;
/// use scoundrel::rules::{RulesEngine, ScoundrelRules};
///
/// let rules = ScoundrelRules::default();
/// let state = rules.new_game(42);
/// assert_eq!(state.room().len(), 4);
/// assert_eq!(state.cards_remaining(), 40);
///
/// let next = rules.apply(&state, &Action::select(0)).unwrap().state;
/// assert_eq!(next.room().len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScoundrelRules {
    config: GameConfig,
}

impl ScoundrelRules {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Resolve the card at `index` in the current room.
    pub fn select_card(&self, state: &GameState, index: usize) -> Result<Transition, RuleError> {
        ensure_in_progress(state)?;

        let mut next = state.clone();
        let card = next.room.take(index).ok_or(ActionViolation::IndexOutOfRange {
            index,
            room_len: state.room.len(),
        })?;
        next.resolved_this_room = next.resolved_this_room.saturating_add(1);
        next.last_resolved = Some(card);
        next.record_action(Action::select(index));

        let mut events = Events::new();
        match card.card_type() {
            CardType::Monster => fight(&mut next, card, &mut events),
            CardType::Weapon => {
                let discarded = next.weapon.equip(card);
                next.discard_cards(discarded.iter().copied());
                events.push(GameEvent::WeaponEquipped {
                    weapon: card,
                    discarded,
                });
            }
            CardType::Potion => drink(&mut next, card, &mut events),
        }

        if next.player.is_alive() && next.room.len() <= 1 && !next.deck.is_empty() {
            self.deal_room(&mut next, &mut events);
            next.player.avoided_previous_room = false;
        }

        Ok(settle(next, events))
    }

    /// Skip the current room.
    pub fn avoid_room(&self, state: &GameState) -> Result<Transition, RuleError> {
        ensure_in_progress(state)?;

        if state.room.len() != self.config.room_size {
            return Err(AvoidViolation::RoomNotFull {
                room_len: state.room.len(),
                room_size: self.config.room_size,
            }
            .into());
        }
        if state.player.avoided_previous_room {
            return Err(AvoidViolation::ConsecutiveAvoid.into());
        }

        let mut next = state.clone();
        let requeued = next.room.clear();
        next.deck.place_at_bottom(requeued.iter().copied());
        next.player.avoided_previous_room = true;
        next.record_action(Action::AvoidRoom);

        let mut events = Events::new();
        events.push(GameEvent::RoomAvoided {
            requeued: requeued.to_vec(),
        });
        self.deal_room(&mut next, &mut events);

        Ok(settle(next, events))
    }

    /// Whether `avoid_room` would be accepted.
    #[must_use]
    pub fn can_avoid_room(&self, state: &GameState) -> bool {
        !state.is_terminal()
            && state.room.len() == self.config.room_size
            && !state.player.avoided_previous_room
    }

    /// Check a state against the model invariants.
    ///
    /// Meant for positions from outside the engine, such as a restored
    /// session. States produced by `apply` always pass.
    pub fn validate(&self, state: &GameState) -> Result<(), StateError> {
        let player = &state.player;
        if player.max_health <= 0 || !(0..=player.max_health).contains(&player.health) {
            return Err(StateError::HealthOutOfRange {
                health: player.health,
                max_health: player.max_health,
            });
        }
        if player.max_health != self.config.max_health {
            return Err(StateError::ConfigMismatch {
                max_health: player.max_health,
                configured: self.config.max_health,
            });
        }
        if state.room.len() > self.config.room_size {
            return Err(StateError::RoomOverflow {
                room_len: state.room.len(),
                room_size: self.config.room_size,
            });
        }

        let all_cards = state
            .deck
            .iter()
            .chain(state.room.iter())
            .chain(state.weapon.slain())
            .chain(state.discard.iter())
            .copied()
            .chain(state.weapon.weapon())
            .chain(state.last_resolved);
        for card in all_cards {
            card.validate()?;
        }

        if let Some(weapon) = state.weapon.weapon() {
            if weapon.card_type() != CardType::Weapon {
                return Err(StateError::WeaponNotDiamond(weapon.to_string()));
            }
        }
        if state.weapon.weapon().is_none() && !state.weapon.slain().is_empty() {
            return Err(StateError::SlainWithoutWeapon(state.weapon.slain().len()));
        }
        if let Some(card) = state.weapon.slain().iter().find(|c| !c.is_monster()) {
            return Err(StateError::SlainNotMonster(card.to_string()));
        }
        if let Some(pair) = state
            .weapon
            .slain()
            .windows(2)
            .find(|pair| pair[1].value() > pair[0].value())
        {
            return Err(StateError::SlainOutOfOrder {
                earlier: pair[0].to_string(),
                later: pair[1].to_string(),
            });
        }

        let expected = scoring::evaluate(state);
        if state.outcome != expected {
            return Err(StateError::OutcomeMismatch {
                recorded: state.outcome,
                expected,
            });
        }

        // An unfinished game needs a card to play
        if expected.is_none() && state.room.is_empty() && !state.deck.is_empty() {
            return Err(StateError::EmptyRoom {
                deck_len: state.deck.len(),
            });
        }
        Ok(())
    }

    /// Refill the room from the deck and reset the per-room flags.
    fn deal_room(&self, state: &mut GameState, events: &mut Events) {
        let drawn = state.room.fill_from(&mut state.deck, self.config.room_size);
        state.player.enter_room();
        state.resolved_this_room = 0;
        events.push(GameEvent::RoomDealt {
            drawn: drawn.to_vec(),
        });
    }
}

impl RulesEngine for ScoundrelRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn new_game(&self, seed: u64) -> GameState {
        let mut rng = GameRng::new(seed);
        let mut state = GameState::builder()
            .seed(seed)
            .max_health(self.config.max_health)
            .build();
        state.deck = Deck::shuffled(&mut rng);
        state.room.fill_from(&mut state.deck, self.config.room_size);
        state
    }

    fn apply(&self, state: &GameState, action: &Action) -> Result<Transition, RuleError> {
        match *action {
            Action::SelectCard { index } => self.select_card(state, index),
            Action::AvoidRoom => self.avoid_room(state),
        }
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        if state.is_terminal() {
            return Vec::new();
        }
        let mut actions: Vec<Action> = (0..state.room.len()).map(Action::select).collect();
        if self.can_avoid_room(state) {
            actions.push(Action::AvoidRoom);
        }
        actions
    }
}

fn ensure_in_progress(state: &GameState) -> Result<(), RuleError> {
    if state.is_terminal() {
        return Err(ActionViolation::GameOver.into());
    }
    Ok(())
}

fn fight(state: &mut GameState, monster: Card, events: &mut Events) {
    let combat = combat::plan(&state.weapon, monster);
    let damage = combat::damage(combat, monster);

    if let Combat::WeaponBlocked { last_slain, .. } = combat {
        events.push(GameEvent::IllegalCombat {
            monster,
            last_slain,
        });
    }

    state.player.take_damage(damage);
    if combat.used_weapon() {
        state.weapon.slay(monster);
    } else {
        state.discard_cards([monster]);
    }

    events.push(GameEvent::MonsterFought {
        monster,
        combat,
        damage,
    });
}

fn drink(state: &mut GameState, potion: Card, events: &mut Events) {
    state.discard_cards([potion]);
    if state.player.used_potion_this_room {
        events.push(GameEvent::PotionWasted { potion });
        return;
    }
    let healed = state.player.heal(i32::from(potion.value()));
    state.player.used_potion_this_room = true;
    events.push(GameEvent::PotionDrunk { potion, healed });
}

/// Stamp the outcome on a terminal state.
fn settle(mut state: GameState, mut events: Events) -> Transition {
    if let Some(outcome) = scoring::evaluate(&state) {
        state.outcome = Some(outcome);
        events.push(GameEvent::GameOver(outcome));
    }
    Transition { state, events }
}
