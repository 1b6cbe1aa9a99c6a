//! Rules engine: legality, transitions, combat, and scoring.
//!
//! `RulesEngine` is the seam the session layer talks to; `ScoundrelRules`
//! is the implementation. Every transition is a pure function from one
//! `GameState` snapshot to the next, so a rejected action can never leave a
//! half-applied state behind.

pub mod combat;
pub mod engine;
pub mod error;
pub mod event;
pub mod scoring;
pub mod scoundrel;

pub use engine::{RulesEngine, Transition};
pub use error::{ActionViolation, AvoidViolation, RuleError, StateError};
pub use event::{Combat, Events, GameEvent};
pub use scoundrel::ScoundrelRules;
