//! # SHA-256 Digest
//!
//! The one-way digest behind System addresses. Wraps `sha2` so the rest of
//! the crate deals in a fixed 32-byte [`Digest32`] rather than generic
//! array types.

use sha2::{Digest, Sha256};

/// A 32-byte SHA-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest32(pub [u8; 32]);

impl Digest32 {
    /// Return the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// Compute the SHA-256 digest of arbitrary bytes.
pub fn sha256_digest(data: &[u8]) -> Digest32 {
    let hash = Sha256::digest(data);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    Digest32(bytes)
}
