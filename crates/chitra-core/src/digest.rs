//! Content digests for deterministic export verification.
//!
//! An exported scene graph is a pure function of its storyboard literals, so
//! two exports of the same scene must be byte-identical. The digest is a
//! SHA-256 hash over the canonical JSON serialization and is logged next to
//! each export.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::ChitraResult;

/// A scene digest (SHA-256, 32 bytes).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneDigest {
    bytes: [u8; 32],
}

impl SceneDigest {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Get the digest as a hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }
}

impl std::fmt::Display for SceneDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Compute the digest of any serializable scene-graph node.
pub fn digest_of<T: Serialize>(value: &T) -> ChitraResult<SceneDigest> {
    let canonical = serde_json::to_vec(value)?;
    let mut hasher = Sha256::new();
    hasher.update((canonical.len() as u64).to_le_bytes());
    hasher.update(&canonical);
    let result = hasher.finalize();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&result);
    Ok(SceneDigest::from_bytes(bytes))
}
