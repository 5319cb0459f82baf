//! # pha-core — Address Primitives
//!
//! This crate is the leaf of the workspace. It defines the [`Address`]
//! value type shared by every other crate: a fixed 34-byte layout whose
//! first byte discriminates the kind of principal and whose remaining 33
//! bytes carry a public key, a compressed public key, or a digest.
//!
//! ## Key Design Principles
//!
//! 1. **One layout, fixed width.** Every address is exactly 34 bytes. There
//!    is no variable-length binary form and no length prefix on the wire.
//!
//! 2. **Tagged kind at the boundary.** Callers see [`AddressKind`] with the
//!    interop platform carried as a [`PlatformId`]. The raw discriminator
//!    arithmetic lives in exactly one place, [`kind`].
//!
//! 3. **Bytes are authoritative.** Equality, ordering and hashing compare the
//!    34 bytes. The text form is a memoized projection and never an input
//!    to comparison.
//!
//! 4. **`Result` everywhere.** Fallible constructors never hand back a Null
//!    address together with an error. Callers that want the inert Null value
//!    ask for it with `unwrap_or_default()`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `pha-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod address;
pub mod digest;
pub mod error;
pub mod interop;
pub mod kind;
pub mod text;
mod serde_impl;

// Re-export primary types for ergonomic imports.
pub use address::{Address, PublicKeySource};
pub use digest::{sha256_digest, Digest32};
pub use error::AddressError;
pub use kind::{AddressKind, KindTag, PlatformId, INTEROP_BASE};
