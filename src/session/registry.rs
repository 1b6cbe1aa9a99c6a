//! Registry of live sessions keyed by id.
//!
//! Hosts that serve more than one player (an HTTP backend, a lobby) create
//! sessions here and look them up by the id handed back to the client.
//! An unknown id is a `RegistryError::NotFound`, never a panic.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, info};

use super::controller::{SessionController, SharedSession};
use super::id::SessionId;
use super::view::Response;
use crate::core::{Action, GameConfig};

/// Lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("session {0} not found")]
    NotFound(SessionId),
}

/// Shared table of sessions.
///
/// Clones share the same table. Keys are fixed when a session is
/// registered; a new game for a client is a new `create`.
///
/// ## Example
///
/// ```
/// use scoundrel::core::{Action, GameConfig};
/// use scoundrel::session::SessionRegistry;
///
/// let registry = SessionRegistry::new(GameConfig::default());
/// let id = registry.create();
///
/// let response = registry.handle(id, Action::select(0)).unwrap();
/// assert!(response.is_ok());
///
/// registry.remove(id);
/// assert!(registry.get(id).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SessionRegistry {
    config: GameConfig,
    sessions: Arc<RwLock<FxHashMap<SessionId, SharedSession>>>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            sessions: Arc::default(),
        }
    }

    /// Start a session with a random seed and register it.
    pub fn create(&self) -> SessionId {
        self.insert(SessionController::new(self.config))
    }

    /// Start a session for `seed` and register it.
    pub fn create_with_seed(&self, seed: u64) -> SessionId {
        self.insert(SessionController::with_seed(self.config, seed))
    }

    /// Register an existing controller under its current id.
    pub fn insert(&self, controller: SessionController) -> SessionId {
        let id = controller.id();
        self.sessions.write().insert(id, controller.into());
        info!(session = %id, "Registered session");
        id
    }

    /// Handle to the session registered as `id`.
    pub fn get(&self, id: SessionId) -> Result<SharedSession, RegistryError> {
        self.sessions
            .read()
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotFound(id))
    }

    /// Apply `action` to the session registered as `id`.
    ///
    /// The table lock is released before the session lock is taken, so a
    /// slow session never blocks lookups of the others.
    pub fn handle(&self, id: SessionId, action: Action) -> Result<Response, RegistryError> {
        let session = self.get(id)?;
        Ok(session.handle(action))
    }

    /// Drop the session registered as `id`, returning it if present.
    pub fn remove(&self, id: SessionId) -> Option<SharedSession> {
        let removed = self.sessions.write().remove(&id);
        if removed.is_some() {
            debug!(session = %id, "Removed session");
        }
        removed
    }

    #[must_use]
    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.read().contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let registry = SessionRegistry::new(GameConfig::default());
        let id = registry.create_with_seed(3);

        let session = registry.get(id).unwrap();

        assert_eq!(session.view().session_id, id);
        assert_eq!(session.current().room().len(), 4);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_id_not_found() {
        let registry = SessionRegistry::new(GameConfig::default());
        let missing = SessionId::new();

        assert_eq!(registry.get(missing).unwrap_err(), RegistryError::NotFound(missing));
        assert_eq!(
            registry.handle(missing, Action::AvoidRoom).unwrap_err().to_string(),
            format!("session {missing} not found")
        );
    }

    #[test]
    fn test_sessions_are_independent() {
        let registry = SessionRegistry::new(GameConfig::default());
        let a = registry.create_with_seed(10);
        let b = registry.create_with_seed(10);
        assert_ne!(a, b);

        assert!(registry.handle(a, Action::AvoidRoom).unwrap().is_ok());

        assert_eq!(registry.get(a).unwrap().current().action_count(), 1);
        assert_eq!(registry.get(b).unwrap().current().action_count(), 0);
    }

    #[test]
    fn test_rejection_is_a_response() {
        let registry = SessionRegistry::new(GameConfig::default());
        let id = registry.create_with_seed(4);

        registry.handle(id, Action::AvoidRoom).unwrap();
        let response = registry.handle(id, Action::AvoidRoom).unwrap();

        assert!(!response.is_ok());
    }

    #[test]
    fn test_remove() {
        let registry = SessionRegistry::new(GameConfig::default());
        let id = registry.create();
        let shared = registry.clone();

        assert!(shared.remove(id).is_some());
        assert!(!registry.contains(id));
        assert!(registry.is_empty());
        assert!(registry.remove(id).is_none());
    }
}
