//! Terminal detection and scoring.
//!
//! - Defeat (health ≤ 0): `-(|health| + monsters left in deck and room)`.
//!   Monsters already slain or discarded do not count.
//! - Victory (deck empty, room down to one card or fewer): remaining health,
//!   plus the potion's value if the last card resolved was a potion and the
//!   player is at full health.
//!
//! Defeat is checked first: dying on the final card is still a defeat.

use crate::cards::CardType;
use crate::core::{GameOutcome, GameState};

/// Outcome of `state` if it is terminal.
#[must_use]
pub fn evaluate(state: &GameState) -> Option<GameOutcome> {
    if state.health() <= 0 {
        return Some(GameOutcome::defeat(defeat_score(state)));
    }
    if state.deck().is_empty() && state.room().len() <= 1 {
        return Some(GameOutcome::victory(victory_score(state)));
    }
    None
}

/// Score for a player who has died in `state`.
#[must_use]
pub fn defeat_score(state: &GameState) -> i32 {
    let remaining = state.deck().monster_total() + state.room().monster_total();
    -(state.health().abs() + remaining)
}

/// Score for a player who has cleared the dungeon in `state`.
#[must_use]
pub fn victory_score(state: &GameState) -> i32 {
    let bonus = match state.last_resolved() {
        Some(card) if card.card_type() == CardType::Potion && state.player().at_full_health() => {
            i32::from(card.value())
        }
        _ => 0,
    };
    state.health() + bonus
}
