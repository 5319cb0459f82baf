//! # pha-crypto — Key Material for Addresses
//!
//! Provides the key-side building blocks that turn secrets into
//! [`Address`](pha_core::Address) values:
//!
//! - **Ed25519** key pairs and public keys, usable anywhere a
//!   [`PublicKeySource`](pha_core::PublicKeySource) is expected.
//! - **WIF** (Wallet Import Format) decoding straight to a User address,
//!   plus export of a key pair back to WIF.
//!
//! ## Crate Policy
//!
//! - Depends only on `pha-core` internally.
//! - Secret bytes live in `Zeroizing` buffers or in `ed25519_dalek`
//!   signing keys, both wiped on drop.
//! - Secrets never appear in `Debug`, `Display`, errors or log lines.

pub mod ed25519;
pub mod error;
pub mod wif;

pub use ed25519::{Ed25519KeyPair, Ed25519PublicKey};
pub use error::CryptoError;
pub use wif::address_from_wif;
