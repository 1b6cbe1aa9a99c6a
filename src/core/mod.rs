//! Core engine types: configuration, RNG, actions, player, and game state.
//!
//! Nothing in here knows the rules. The `rules` module reads and transforms
//! these types; the `session` module stores and exposes them.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{GameConfig, DEFAULT_MAX_HEALTH, DEFAULT_ROOM_SIZE};
pub use player::PlayerState;
pub use rng::GameRng;
pub use state::{GameOutcome, GameState, GameStateBuilder, OutcomeKind};
