//! Game state: the complete, serializable position of one game.
//!
//! ## GameState
//!
//! - Deck, room, weapon stack, player
//! - Discard pile and the last card resolved (for the victory bonus)
//! - Outcome (victory/defeat + score) once the game is over
//! - Seed and action history, so a game can be replayed
//!
//! Uses `im` persistent vectors, so every transition works on an O(1) clone
//! and a rejected action leaves the original snapshot untouched.
//!
//! Only the rules engine mutates a `GameState`; everything else reads it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::config::DEFAULT_MAX_HEALTH;
use super::player::PlayerState;
use crate::cards::{Card, Deck, Room, WeaponStack};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// The dungeon was cleared.
    Victory,
    /// Health reached zero.
    Defeat,
}

/// Final result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameOutcome {
    pub kind: OutcomeKind,
    pub score: i32,
}

impl GameOutcome {
    #[must_use]
    pub const fn victory(score: i32) -> Self {
        Self {
            kind: OutcomeKind::Victory,
            score,
        }
    }

    #[must_use]
    pub const fn defeat(score: i32) -> Self {
        Self {
            kind: OutcomeKind::Defeat,
            score,
        }
    }

    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.kind == OutcomeKind::Victory
    }
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Shuffle seed captured at game start.
    pub(crate) seed: u64,

    /// Undrawn cards, front first.
    pub(crate) deck: Deck,

    /// Cards available to resolve.
    pub(crate) room: Room,

    /// Equipped weapon and the monsters it has slain.
    pub(crate) weapon: WeaponStack,

    pub(crate) player: PlayerState,

    /// Cards permanently out of play, oldest first.
    pub(crate) discard: Vector<Card>,

    /// Most recently selected card.
    pub(crate) last_resolved: Option<Card>,

    /// Cards selected since the current room was dealt.
    pub(crate) resolved_this_room: u8,

    /// Set once the game is over.
    pub(crate) outcome: Option<GameOutcome>,

    /// Accepted actions in order.
    pub(crate) history: Vector<ActionRecord>,
}

impl GameState {
    /// Start building a position by hand.
    ///
    /// ```
    /// use scoundrel::cards::Card;
    /// use scoundrel::core::GameState;
    ///
    /// let state = GameState::builder()
    ///     .room([Card::clubs(10), Card::hearts(4)])
    ///     .health(12)
    ///     .build();
    ///
    /// assert_eq!(state.health(), 12);
    /// assert_eq!(state.room().len(), 2);
    /// assert!(!state.is_terminal());
    /// ```
    #[must_use]
    pub fn builder() -> GameStateBuilder {
        GameStateBuilder::default()
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn room(&self) -> &Room {
        &self.room
    }

    #[must_use]
    pub fn weapon(&self) -> &WeaponStack {
        &self.weapon
    }

    #[must_use]
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.player.health
    }

    #[must_use]
    pub fn max_health(&self) -> i32 {
        self.player.max_health
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    pub fn discard(&self) -> impl Iterator<Item = &Card> {
        self.discard.iter()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    #[must_use]
    pub fn last_resolved(&self) -> Option<Card> {
        self.last_resolved
    }

    #[must_use]
    pub fn resolved_this_room(&self) -> u8 {
        self.resolved_this_room
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Final score, `None` while the game is in progress.
    #[must_use]
    pub fn score(&self) -> Option<i32> {
        self.outcome.map(|o| o.score)
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn history(&self) -> impl Iterator<Item = &ActionRecord> {
        self.history.iter()
    }

    /// Number of accepted actions so far.
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.history.len()
    }

    /// Every card the game knows about, in any location.
    ///
    /// Constant for the lifetime of a game.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.room.len() + self.weapon.card_count() + self.discard.len()
    }

    // === Mutation helpers (rules engine only) ===

    /// Record an accepted action.
    pub(crate) fn record_action(&mut self, action: crate::core::Action) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(action, sequence));
    }

    /// Put cards on the discard pile.
    pub(crate) fn discard_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.discard.extend(cards);
    }
}

/// Builder for arbitrary positions.
///
/// Produces an in-progress state (no outcome). Positions built this way are
/// not checked; run `ScoundrelRules::validate` when the input is untrusted.
#[derive(Clone, Debug)]
pub struct GameStateBuilder {
    seed: u64,
    deck: Vec<Card>,
    room: Vec<Card>,
    weapon: Option<Card>,
    slain: Vec<Card>,
    discard: Vec<Card>,
    max_health: i32,
    health: Option<i32>,
    used_potion_this_room: bool,
    avoided_previous_room: bool,
    last_resolved: Option<Card>,
}

impl Default for GameStateBuilder {
    fn default() -> Self {
        Self {
            seed: 0,
            deck: Vec::new(),
            room: Vec::new(),
            weapon: None,
            slain: Vec::new(),
            discard: Vec::new(),
            max_health: DEFAULT_MAX_HEALTH,
            health: None,
            used_potion_this_room: false,
            avoided_previous_room: false,
            last_resolved: None,
        }
    }
}

impl GameStateBuilder {
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Deck contents, front first.
    pub fn deck(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.deck = cards.into_iter().collect();
        self
    }

    pub fn room(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.room = cards.into_iter().collect();
        self
    }

    pub fn weapon(mut self, weapon: Card) -> Self {
        self.weapon = Some(weapon);
        self
    }

    /// Monsters already slain by the weapon, oldest first.
    pub fn slain(mut self, monsters: impl IntoIterator<Item = Card>) -> Self {
        self.slain = monsters.into_iter().collect();
        self
    }

    pub fn discard(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.discard = cards.into_iter().collect();
        self
    }

    /// Maximum health. Current health defaults to this.
    pub fn max_health(mut self, max_health: i32) -> Self {
        self.max_health = max_health;
        self
    }

    pub fn health(mut self, health: i32) -> Self {
        self.health = Some(health);
        self
    }

    pub fn used_potion_this_room(mut self, used: bool) -> Self {
        self.used_potion_this_room = used;
        self
    }

    pub fn avoided_previous_room(mut self, avoided: bool) -> Self {
        self.avoided_previous_room = avoided;
        self
    }

    pub fn last_resolved(mut self, card: Card) -> Self {
        self.last_resolved = Some(card);
        self
    }

    #[must_use]
    pub fn build(self) -> GameState {
        let mut player = PlayerState::new(self.max_health);
        player.health = self.health.unwrap_or(self.max_health);
        player.used_potion_this_room = self.used_potion_this_room;
        player.avoided_previous_room = self.avoided_previous_room;

        let weapon = match self.weapon {
            Some(weapon) => WeaponStack::with_slain(weapon, self.slain),
            None => WeaponStack::new(),
        };

        GameState {
            seed: self.seed,
            deck: Deck::from_cards(self.deck),
            room: Room::from_cards(self.room),
            weapon,
            player,
            discard: self.discard.into_iter().collect(),
            last_resolved: self.last_resolved,
            resolved_this_room: 0,
            outcome: None,
            history: Vector::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Action;

    #[test]
    fn test_builder_defaults() {
        let state = GameState::builder().build();

        assert_eq!(state.health(), 20);
        assert_eq!(state.max_health(), 20);
        assert_eq!(state.cards_remaining(), 0);
        assert!(state.room().is_empty());
        assert!(state.weapon().weapon().is_none());
        assert_eq!(state.score(), None);
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_builder_position() {
        let state = GameState::builder()
            .deck([Card::spades(7)])
            .room([Card::clubs(3), Card::hearts(5)])
            .weapon(Card::diamonds(6))
            .slain([Card::clubs(9)])
            .health(4)
            .avoided_previous_room(true)
            .build();

        assert_eq!(state.health(), 4);
        assert_eq!(state.cards_remaining(), 1);
        assert_eq!(state.weapon().last_slain(), Some(Card::clubs(9)));
        assert!(state.player().avoided_previous_room);
        assert_eq!(state.total_cards(), 5);
    }

    #[test]
    fn test_builder_ignores_slain_without_weapon() {
        let state = GameState::builder().slain([Card::clubs(9)]).build();
        assert_eq!(state.weapon().card_count(), 0);
    }

    #[test]
    fn test_record_action_sequences() {
        let mut state = GameState::builder().build();
        state.record_action(Action::AvoidRoom);
        state.record_action(Action::select(1));

        let sequences: Vec<_> = state.history().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![0, 1]);
        assert_eq!(state.action_count(), 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = GameState::builder().room([Card::clubs(3)]).build();
        let mut copy = original.clone();
        copy.discard_cards([Card::hearts(2)]);

        assert_eq!(original.discard_len(), 0);
        assert_eq!(copy.discard_len(), 1);
    }

    #[test]
    fn test_state_serde() {
        let mut state = GameState::builder()
            .seed(99)
            .deck([Card::spades(7), Card::hearts(2)])
            .room([Card::clubs(3)])
            .weapon(Card::diamonds(4))
            .build();
        state.record_action(Action::select(0));
        state.outcome = Some(GameOutcome::defeat(-10));

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
