//! Session layer: the single owner of a live game.
//!
//! - `SessionController`: holds one `GameState`, applies actions, derives views
//! - `SharedSession`: mutex-guarded handle for concurrent callers
//! - `SessionRegistry`: sessions keyed by id for multi-player hosts
//! - `SessionStore`: persistence seam, with in-memory and file stores
//! - `GameView` / `Response`: what presentation and transport read
//!
//! There is no global session. Hosts create a controller and pass it (or a
//! `SharedSession` handle) to whatever needs it.

pub mod codec;
pub mod controller;
pub mod id;
pub mod registry;
pub mod store;
pub mod view;

pub use controller::{SessionController, SharedSession};
pub use id::SessionId;
pub use registry::{RegistryError, SessionRegistry};
pub use store::{FileStore, MemoryStore, SessionSnapshot, SessionStore, StoreError};
pub use view::{CardView, GameView, Response};
