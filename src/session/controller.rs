//! Session controller: owns the live game and serializes actions against it.
//!
//! ## SessionController
//!
//! - Holds exactly one `GameState` at a time, never absent
//! - Delegates every action to the rules engine and keeps the result only
//!   on success
//! - Saves each new state through an optional `SessionStore`
//!
//! ## SharedSession
//!
//! A cloneable handle around `Arc<Mutex<SessionController>>` for hosts with
//! concurrent callers (UI event loops, request handlers). Every call takes
//! the lock, so actions on one session are linearized.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use super::id::SessionId;
use super::store::{SessionSnapshot, SessionStore};
use super::view::{GameView, Response};
use crate::core::{Action, GameConfig, GameRng, GameState};
use crate::rules::{Events, RuleError, RulesEngine, ScoundrelRules};

/// Owner of the live game.
///
/// ## Example
///
/// ```
/// use scoundrel::core::{Action, GameConfig};
/// use scoundrel::session::SessionController;
///
/// let mut session = SessionController::with_seed(GameConfig::default(), 7);
/// assert!(session.can_avoid_room());
///
/// session.apply(Action::AvoidRoom).unwrap();
/// assert!(!session.can_avoid_room());
/// assert!(session.apply(Action::AvoidRoom).is_err());
/// ```
pub struct SessionController {
    rules: ScoundrelRules,
    id: SessionId,
    state: GameState,
    last_events: Events,
    seeds: GameRng,
    store: Option<Box<dyn SessionStore>>,
}

impl SessionController {
    /// Start a session with a random seed.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::from_seed_source(config, GameRng::from_entropy())
    }

    /// Start a session whose games are all derived from `seed`.
    ///
    /// Two controllers built with the same seed deal the same sequence of
    /// games.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::from_seed_source(config, GameRng::new(seed))
    }

    /// Resume the session saved in `store`, or start a fresh one.
    ///
    /// A missing, unreadable, or invalid snapshot is never propagated: it is
    /// logged and replaced by a new game, which is then saved.
    #[must_use]
    pub fn resume(config: GameConfig, mut store: impl SessionStore + 'static) -> Self {
        let rules = ScoundrelRules::new(config);
        let restored = store.load().and_then(|snapshot| match snapshot {
            Some(snapshot) => {
                rules.validate(&snapshot.state)?;
                Ok(Some(snapshot))
            }
            None => Ok(None),
        });

        match restored {
            Ok(Some(snapshot)) => {
                info!(session = %snapshot.id, actions = snapshot.state.action_count(), "Resumed session");
                Self {
                    rules,
                    id: snapshot.id,
                    state: snapshot.state,
                    last_events: Events::new(),
                    seeds: GameRng::from_entropy(),
                    store: Some(Box::new(store)),
                }
            }
            Ok(None) => Self::new(config).with_store(store),
            Err(error) => {
                warn!(%error, "Discarding unusable saved session");
                Self::new(config).with_store(store)
            }
        }
    }

    fn from_seed_source(config: GameConfig, mut seeds: GameRng) -> Self {
        let rules = ScoundrelRules::new(config);
        let seed = seeds.next_seed();
        let id = SessionId::new();
        info!(session = %id, seed, "Starting new game");
        Self {
            state: rules.new_game(seed),
            rules,
            id,
            last_events: Events::new(),
            seeds,
            store: None,
        }
    }

    /// Attach a store and save the current state to it.
    #[must_use]
    pub fn with_store(mut self, store: impl SessionStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self.persist();
        self
    }

    // === Actions ===

    /// Discard the current game and deal a new one.
    pub fn start_new_game(&mut self) -> &GameState {
        let seed = self.seeds.next_seed();
        self.start_new_game_with_seed(seed)
    }

    /// Discard the current game and deal the game for `seed`.
    pub fn start_new_game_with_seed(&mut self, seed: u64) -> &GameState {
        self.id = SessionId::new();
        self.state = self.rules.new_game(seed);
        self.last_events.clear();
        info!(session = %self.id, seed, "Starting new game");
        self.persist();
        &self.state
    }

    /// Apply `action` to the live game.
    ///
    /// On error the held state is untouched.
    pub fn apply(&mut self, action: Action) -> Result<&GameState, RuleError> {
        let transition = match self.rules.apply(&self.state, &action) {
            Ok(transition) => transition,
            Err(error) => {
                debug!(session = %self.id, %action, %error, "Rejected action");
                return Err(error);
            }
        };

        self.state = transition.state;
        self.last_events = transition.events;
        debug!(
            session = %self.id,
            sequence = self.state.action_count(),
            %action,
            health = self.state.health(),
            room = self.state.room().len(),
            "Applied action"
        );
        if let Some(outcome) = self.state.outcome() {
            info!(session = %self.id, kind = ?outcome.kind, score = outcome.score, "Game over");
        }

        self.persist();
        Ok(&self.state)
    }

    /// Apply `action` and answer in transport form.
    pub fn handle(&mut self, action: Action) -> Response {
        match self.apply(action) {
            Ok(_) => Response::Ok {
                state: Box::new(self.view()),
            },
            Err(error) => Response::Rejected {
                reason: error.to_string(),
            },
        }
    }

    // === Views ===

    /// The live game.
    #[must_use]
    pub fn current(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.rules.config()
    }

    /// Events from the last accepted action.
    #[must_use]
    pub fn last_events(&self) -> &Events {
        &self.last_events
    }

    #[must_use]
    pub fn can_avoid_room(&self) -> bool {
        self.rules.can_avoid_room(&self.state)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_terminal()
    }

    #[must_use]
    pub fn score(&self) -> Option<i32> {
        self.state.score()
    }

    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        self.rules.legal_actions(&self.state)
    }

    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::new(self.id, &self.state, self.can_avoid_room())
    }

    /// Snapshot for persistence.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            state: self.state.clone(),
        }
    }

    fn persist(&mut self) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        let snapshot = SessionSnapshot {
            id: self.id,
            state: self.state.clone(),
        };
        if let Err(error) = store.save(&snapshot) {
            warn!(session = %self.id, %error, "Failed to save session");
        }
    }
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("persistent", &self.store.is_some())
            .finish()
    }
}

/// Thread-safe handle to one session.
#[derive(Clone, Debug)]
pub struct SharedSession {
    inner: Arc<Mutex<SessionController>>,
}

impl SharedSession {
    #[must_use]
    pub fn new(controller: SessionController) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    /// Apply `action` under the session lock, returning the new state.
    pub fn apply(&self, action: Action) -> Result<GameState, RuleError> {
        self.inner.lock().apply(action).cloned()
    }

    pub fn handle(&self, action: Action) -> Response {
        self.inner.lock().handle(action)
    }

    pub fn start_new_game(&self) -> GameState {
        self.inner.lock().start_new_game().clone()
    }

    /// Copy of the live game.
    #[must_use]
    pub fn current(&self) -> GameState {
        self.inner.lock().current().clone()
    }

    #[must_use]
    pub fn view(&self) -> GameView {
        self.inner.lock().view()
    }

    /// Run `f` with exclusive access to the controller.
    pub fn with<T>(&self, f: impl FnOnce(&mut SessionController) -> T) -> T {
        f(&mut self.inner.lock())
    }
}

impl From<SessionController> for SharedSession {
    fn from(controller: SessionController) -> Self {
        Self::new(controller)
    }
}
