//! Session persistence.
//!
//! The controller hands every new state to a `SessionStore` and asks it for
//! the last saved session at startup. Stores only promise the round trip:
//! `save(s); load()` yields a snapshot equal to `s`. The byte layout is an
//! implementation detail of `codec`.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::codec;
use super::id::SessionId;
use crate::core::GameState;
use crate::rules::StateError;

/// A saved session: its identifier and the state it was in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub state: GameState,
}

/// Persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("snapshot encoding failed: {0}")]
    Codec(#[from] bincode::Error),

    #[error("snapshot io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot is empty")]
    Empty,

    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u8),

    #[error("snapshot holds an invalid game: {0}")]
    Invalid(#[from] StateError),
}

/// Durable storage for one session.
pub trait SessionStore: Send {
    /// Persist `snapshot`, replacing whatever was saved before.
    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), StoreError>;

    /// The last saved snapshot, or `None` if nothing has been saved.
    fn load(&mut self) -> Result<Option<SessionSnapshot>, StoreError>;
}

/// In-memory store holding the encoded snapshot.
///
/// Clones share the same buffer, so a test (or an embedding app) can keep a
/// handle while the controller owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    bytes: Arc<Mutex<Option<Vec<u8>>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw saved bytes, if any.
    #[must_use]
    pub fn bytes(&self) -> Option<Vec<u8>> {
        self.bytes.lock().clone()
    }

    /// Overwrite the saved bytes directly.
    pub fn set_bytes(&self, bytes: Vec<u8>) {
        *self.bytes.lock() = Some(bytes);
    }
}

impl SessionStore for MemoryStore {
    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        let bytes = codec::encode(snapshot)?;
        *self.bytes.lock() = Some(bytes);
        Ok(())
    }

    fn load(&mut self) -> Result<Option<SessionSnapshot>, StoreError> {
        self.bytes
            .lock()
            .as_deref()
            .map(codec::decode)
            .transpose()
    }
}

/// Store backed by a single file.
///
/// Writes go to a sibling temp file that is renamed over the target, so a
/// crash mid-save leaves the previous snapshot intact.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl SessionStore for FileStore {
    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        let bytes = codec::encode(snapshot)?;
        let temp = self.temp_path();
        let written = write_synced(&temp, &bytes).and_then(|()| fs::rename(&temp, &self.path));
        if let Err(e) = written {
            // Best effort: the previous snapshot at `path` is still intact
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }
        Ok(())
    }

    fn load(&mut self) -> Result<Option<SessionSnapshot>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => codec::decode(&bytes).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Write `bytes` to `path` and flush them to disk before returning.
fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
