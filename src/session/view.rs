//! Read-only views for presentation and transport.
//!
//! A `GameView` carries everything a screen needs to draw the game, with no
//! rules math left for the client: whether the room can be avoided, the
//! outcome, and each card's type are all precomputed.

use serde::{Deserialize, Serialize};

use super::id::SessionId;
use crate::cards::{Card, CardType, Suit};
use crate::core::{GameOutcome, GameState};

/// A card as shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub suit: Suit,
    pub value: u8,
    #[serde(rename = "type")]
    pub card_type: CardType,
    /// Display label, e.g. `"Q♠"`.
    pub label: String,
}

impl From<Card> for CardView {
    fn from(card: Card) -> Self {
        Self {
            suit: card.suit(),
            value: card.value(),
            card_type: card.card_type(),
            label: card.to_string(),
        }
    }
}

/// Presentation snapshot of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub session_id: SessionId,
    pub health: i32,
    pub max_health: i32,
    pub current_room: Vec<CardView>,
    pub equipped_weapon: Option<CardView>,
    pub slain_monsters: Vec<CardView>,
    pub cards_remaining: usize,
    pub avoided_previous_room: bool,
    pub used_potion_this_room: bool,
    pub cards_chosen_this_room: u8,
    pub can_avoid_room: bool,
    pub game_over: bool,
    pub outcome: Option<GameOutcome>,
    pub score: Option<i32>,
}

impl GameView {
    /// Build a view. `can_avoid_room` comes from the rules engine.
    #[must_use]
    pub fn new(session_id: SessionId, state: &GameState, can_avoid_room: bool) -> Self {
        let player = state.player();
        Self {
            session_id,
            health: player.health,
            max_health: player.max_health,
            current_room: state.room().iter().copied().map(CardView::from).collect(),
            equipped_weapon: state.weapon().weapon().map(CardView::from),
            slain_monsters: state.weapon().slain().iter().copied().map(CardView::from).collect(),
            cards_remaining: state.cards_remaining(),
            avoided_previous_room: player.avoided_previous_room,
            used_potion_this_room: player.used_potion_this_room,
            cards_chosen_this_room: state.resolved_this_room(),
            can_avoid_room,
            game_over: state.is_terminal(),
            outcome: state.outcome(),
            score: state.score(),
        }
    }
}

/// Reply to a transport request.
///
/// ```json
/// { "status": "ok", "state": { ... } }
/// { "status": "rejected", "reason": "cannot avoid room: ..." }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    Ok { state: Box<GameView> },
    Rejected { reason: String },
}

impl Response {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Ok { .. })
    }
}
