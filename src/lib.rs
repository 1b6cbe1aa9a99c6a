//! # scoundrel
//!
//! Rules engine and session state machine for Scoundrel, the solo
//! dungeon-crawl card game.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: the rules engine maps `(GameState, Action)` to a
//!    new `GameState` or a typed rejection. It performs no I/O.
//!
//! 2. **Deterministic**: a game is fully described by its seed and its action
//!    history. Same seed, same dungeon.
//!
//! 3. **Explicit ownership**: one `SessionController` owns one live game.
//!    Nothing else mutates it.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) snapshot cloning via `im-rs`, so a
//!   rejected action provably leaves the previous state intact.
//!
//! - **Tagged card behavior**: monsters, weapons, and potions are a
//!   `CardType` enum dispatched in one place inside the rules engine.
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG, actions, player, game state
//! - `cards`: Cards, deck, room, weapon stack
//! - `rules`: RulesEngine trait, Scoundrel rules, combat, scoring, events
//! - `session`: Session controller, registry, persistence, presentation views
//!
//! ## Example
//!
//! ```
//! use scoundrel::{Action, GameConfig, SessionController};
//!
//! let mut session = SessionController::with_seed(GameConfig::default(), 42);
//! while !session.is_game_over() {
//!     // Always resolve the first card
//!     session.apply(Action::select(0)).unwrap();
//! }
//! assert!(session.score().is_some());
//! ```

pub mod cards;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord,
    GameConfig, GameRng,
    GameOutcome, GameState, GameStateBuilder, OutcomeKind, PlayerState,
};

pub use crate::cards::{Card, CardType, Deck, Room, Suit, WeaponStack};

pub use crate::rules::{
    ActionViolation, AvoidViolation, Combat, GameEvent, RuleError, RulesEngine,
    ScoundrelRules, StateError, Transition,
};

pub use crate::session::{
    FileStore, GameView, MemoryStore, RegistryError, Response, SessionController, SessionId,
    SessionRegistry, SessionSnapshot, SessionStore, SharedSession, StoreError,
};
