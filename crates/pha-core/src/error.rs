//! # Error Types
//!
//! One error enum covers every way address construction can fail. All
//! variants use `thiserror` for derive-based `Display` and `Error`.
//!
//! ## Design
//!
//! - Each variant names a single reason so callers can tell a wrong text
//!   length from a bad Base58 digit from an unknown kind.
//! - No variant carries key material. WIF failures report only that the
//!   format was wrong, never which bytes were read.

use thiserror::Error;

/// Errors produced while constructing, decoding or unpacking an address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Raw input was not exactly 34 bytes.
    #[error("invalid address length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required byte length.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Public key was neither 32 nor 33 bytes (or not 33 for interop).
    #[error("invalid public key length: {actual} bytes")]
    InvalidPublicKeyLength {
        /// Length that was supplied.
        actual: usize,
    },

    /// Address text had the wrong number of characters.
    #[error("invalid address text: expected {expected} characters, got {actual}")]
    InvalidAddressText {
        /// Required character count.
        expected: usize,
        /// Character count that was supplied.
        actual: usize,
    },

    /// Address text was not valid Base58 or did not decode to 34 bytes.
    #[error("invalid address encoding: {0}")]
    InvalidAddressEncoding(String),

    /// Prefix character or discriminator did not name a known kind.
    #[error("invalid address kind: {0}")]
    InvalidAddressKind(String),

    /// WIF string failed checksum, length, version or compression checks.
    #[error("invalid WIF format")]
    InvalidWifFormat,

    /// Required input was empty.
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    /// Interop platform identifier outside `1..=253`.
    #[error("invalid platform id: {platform}")]
    InvalidPlatformId {
        /// Identifier that was supplied.
        platform: u8,
    },

    /// Caller-provided output buffer cannot hold the interop payload.
    #[error("insufficient buffer space: need {required} bytes, have {available}")]
    InsufficientBufferSpace {
        /// Bytes the payload needs.
        required: usize,
        /// Bytes the buffer offers.
        available: usize,
    },
}
