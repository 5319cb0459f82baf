//! # Cryptographic Error Types
//!
//! Errors for key parsing in `pha-crypto`. Address-level failures (including
//! every WIF rejection) stay as [`AddressError`] and convert in via `From`.

use pha_core::AddressError;
use thiserror::Error;

/// Errors from key handling in the toolkit.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Invalid Ed25519 public key.
    #[error("invalid Ed25519 public key: {0}")]
    InvalidPublicKey(String),

    /// Hex decoding error.
    #[error("hex decode error: {0}")]
    HexDecode(String),

    /// Address construction or WIF decoding failed.
    #[error(transparent)]
    Address(#[from] AddressError),
}
