//! Rules engine trait.
//!
//! A `RulesEngine` is a pure transition function over `GameState`:
//! - Building the opening position from a seed
//! - Listing legal actions
//! - Applying an action to produce the next state (or a rejection)
//!
//! ## Implementation Notes
//!
//! - `apply` must never mutate its input; it returns a new snapshot
//! - `apply` must be deterministic so games can be replayed
//! - Terminal detection runs inside `apply`, so callers only ever see
//!   states whose `outcome` is up to date

use crate::core::{Action, GameConfig, GameOutcome, GameState};

use super::error::RuleError;
use super::event::Events;

/// Result of a successful action: the new state and what happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub events: Events,
}

impl Transition {
    /// The outcome, if this transition ended the game.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }
}

/// Rules engine trait.
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Build the opening position for `seed`.
    fn new_game(&self, seed: u64) -> GameState;

    /// Apply an action to the game state.
    ///
    /// On error the caller's state is unchanged.
    fn apply(&self, state: &GameState, action: &Action) -> Result<Transition, RuleError>;

    /// Enumerate all legal actions. Empty once the game is over.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    // === Convenience Methods ===

    /// Check whether `action` would be accepted.
    fn is_legal(&self, state: &GameState, action: &Action) -> bool {
        self.legal_actions(state).contains(action)
    }

    /// Rebuild a game from its seed and a list of actions.
    ///
    /// Fails on the first rejected action.
    fn replay<'a>(
        &self,
        seed: u64,
        actions: impl IntoIterator<Item = &'a Action>,
    ) -> Result<GameState, RuleError>
    where
        Self: Sized,
    {
        let mut state = self.new_game(seed);
        for action in actions {
            state = self.apply(&state, action)?.state;
        }
        Ok(state)
    }
}
