//! # Address — 34-Byte Binary Layout
//!
//! Defines [`Address`] together with its byte-level constructors and
//! predicates. Text encoding lives in [`crate::text`] and interop packing in
//! [`crate::interop`]; both operate on the layout defined here.
//!
//! ## Layout
//!
//! | Offset | Size | Meaning |
//! |---|---|---|
//! | 0 | 1 | kind discriminator (see [`crate::kind`]) |
//! | 1 | 33 | payload: pad byte + 32-byte key or digest, or a 33-byte key |
//!
//! ## Invariants
//!
//! - Always exactly [`Address::LENGTH`] bytes.
//! - Null means all 34 bytes are zero, not merely a zero discriminator.
//! - Equality, ordering and hashing use the bytes only. The memoized text
//!   is never compared.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::io::{Read, Write};
use std::sync::OnceLock;

use crate::digest::sha256_digest;
use crate::error::AddressError;
use crate::kind::{AddressKind, KindTag};

/// Source of public key bytes for [`Address::from_key`].
///
/// The key length is the slice length: 32 for raw keys, 33 for keys that
/// already carry a one-byte prefix.
pub trait PublicKeySource {
    /// The encoded public key.
    fn public_key_bytes(&self) -> &[u8];
}

impl PublicKeySource for [u8] {
    fn public_key_bytes(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> PublicKeySource for [u8; N] {
    fn public_key_bytes(&self) -> &[u8] {
        self
    }
}

impl PublicKeySource for Vec<u8> {
    fn public_key_bytes(&self) -> &[u8] {
        self
    }
}

/// A fixed-size, self-describing account identity.
///
/// Construct with [`Address::from_key`], [`Address::from_hash`],
/// [`Address::from_text`], [`Address::from_interop`] or
/// [`Address::from_bytes`]. [`Address::default()`] is the Null address.
#[derive(Clone)]
pub struct Address {
    pub(crate) bytes: [u8; Address::LENGTH],
    pub(crate) text: OnceLock<String>,
}

impl Address {
    /// Size of the binary layout.
    pub const LENGTH: usize = 34;
    /// Size of the payload following the discriminator.
    pub const PAYLOAD_LENGTH: usize = Self::LENGTH - 1;

    /// The Null address.
    pub fn null() -> Self {
        Self::default()
    }

    /// Wrap a 34-byte layout. Every byte pattern is a valid address.
    pub fn from_array(bytes: [u8; Self::LENGTH]) -> Self {
        Self {
            bytes,
            text: OnceLock::new(),
        }
    }

    /// Build an address from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::InvalidLength`] unless `bytes` is exactly 34
    /// bytes long. Use `unwrap_or_default()` where an inert Null address is
    /// the desired fallback.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        let array: [u8; Self::LENGTH] =
            bytes.try_into().map_err(|_| AddressError::InvalidLength {
                expected: Self::LENGTH,
                actual: bytes.len(),
            })?;
        Ok(Self::from_array(array))
    }

    /// Build a User address from a public key.
    ///
    /// A 32-byte key is stored after a zero pad byte; a 33-byte key fills
    /// the payload directly. The two meet when the 33-byte key is the
    /// 32-byte key with a leading `0x00`.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::InvalidPublicKeyLength`] for any other key
    /// length.
    pub fn from_key<K: PublicKeySource + ?Sized>(key: &K) -> Result<Self, AddressError> {
        let public_key = key.public_key_bytes();
        let mut bytes = [0u8; Self::LENGTH];
        bytes[0] = AddressKind::User.discriminator();
        match public_key.len() {
            32 => bytes[2..].copy_from_slice(public_key),
            33 => bytes[1..].copy_from_slice(public_key),
            actual => return Err(AddressError::InvalidPublicKeyLength { actual }),
        }
        Ok(Self::from_array(bytes))
    }

    /// Infallible form of [`Address::from_key`] for keys typed as 32 bytes.
    pub fn from_raw_key(public_key: &[u8; 32]) -> Self {
        let mut bytes = [0u8; Self::LENGTH];
        bytes[0] = AddressKind::User.discriminator();
        bytes[2..].copy_from_slice(public_key);
        Self::from_array(bytes)
    }

    /// Build a System address from the SHA-256 digest of `input`.
    pub fn from_hash(input: impl AsRef<[u8]>) -> Self {
        let digest = sha256_digest(input.as_ref());
        let mut bytes = [0u8; Self::LENGTH];
        bytes[0] = AddressKind::System.discriminator();
        bytes[2..].copy_from_slice(digest.as_bytes());
        Self::from_array(bytes)
    }

    /// System address for a named protocol account.
    pub fn from_name(name: &str) -> Self {
        Self::from_hash(name.as_bytes())
    }

    /// The kind encoded in the discriminator byte.
    pub fn kind(&self) -> AddressKind {
        AddressKind::from_discriminator(self.bytes[0])
    }

    /// True when every byte is zero.
    pub fn is_null(&self) -> bool {
        self.bytes == [0u8; Self::LENGTH]
    }

    /// True for Null and System addresses.
    pub fn is_system(&self) -> bool {
        matches!(self.kind().tag(), KindTag::Null | KindTag::System)
    }

    /// True for User addresses.
    pub fn is_user(&self) -> bool {
        self.kind() == AddressKind::User
    }

    /// True for Interop addresses of any platform.
    pub fn is_interop(&self) -> bool {
        self.kind().tag() == KindTag::Interop
    }

    /// Borrow the 34-byte layout.
    pub fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.bytes
    }

    /// Copy out the 34-byte layout.
    pub fn to_bytes(&self) -> [u8; Self::LENGTH] {
        self.bytes
    }

    /// Copy out bytes 1..34.
    pub fn payload(&self) -> [u8; Self::PAYLOAD_LENGTH] {
        let mut payload = [0u8; Self::PAYLOAD_LENGTH];
        payload.copy_from_slice(&self.bytes[1..]);
        payload
    }

    /// Render the layout as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Write the 34-byte layout with no length prefix.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.bytes)
    }

    /// Read exactly 34 bytes and wrap them.
    pub fn read_from<R: Read + ?Sized>(reader: &mut R) -> std::io::Result<Self> {
        let mut bytes = [0u8; Self::LENGTH];
        reader.read_exact(&mut bytes)?;
        Ok(Self::from_array(bytes))
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::from_array([0u8; Self::LENGTH])
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bytes.cmp(&other.bytes)
    }
}

impl From<[u8; Address::LENGTH]> for Address {
    fn from(bytes: [u8; Address::LENGTH]) -> Self {
        Self::from_array(bytes)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = AddressError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
