//! Binary snapshot codec.
//!
//! Layout: one version byte followed by the bincode encoding of a
//! `SessionSnapshot`. Decoding validates the version; validating the game
//! inside is the controller's job.

use super::store::{SessionSnapshot, StoreError};

/// Current snapshot format version.
pub const FORMAT_VERSION: u8 = 1;

/// Encode a snapshot.
pub fn encode(snapshot: &SessionSnapshot) -> Result<Vec<u8>, StoreError> {
    let mut bytes = vec![FORMAT_VERSION];
    bytes.extend(bincode::serialize(snapshot)?);
    Ok(bytes)
}

/// Decode a snapshot written by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<SessionSnapshot, StoreError> {
    let (&version, body) = bytes.split_first().ok_or(StoreError::Empty)?;
    if version != FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion(version));
    }
    Ok(bincode::deserialize(body)?)
}
