//! # Ed25519 Keys
//!
//! Ed25519 key pairs and public keys as sources of User addresses. A
//! 32-byte Ed25519 public key lands in the address layout after the zero
//! pad byte.
//!
//! ## Security Invariant
//!
//! - `Ed25519KeyPair` does not implement `Serialize` and never prints its
//!   seed. Export is explicit, through [`Ed25519KeyPair::to_wif`].
//! - The wrapped `ed25519_dalek::SigningKey` is zeroized on drop.

use pha_core::{Address, AddressError, PublicKeySource};
use zeroize::Zeroizing;

use crate::error::CryptoError;
use crate::wif;

/// An Ed25519 public key (32 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ed25519PublicKey(pub [u8; 32]);

/// An Ed25519 key pair.
///
/// Does not implement `Serialize`: the seed must not be accidentally
/// written into logs, responses, or artifacts.
pub struct Ed25519KeyPair {
    signing_key: ed25519_dalek::SigningKey,
    public_key: [u8; 32],
}

// ---------------------------------------------------------------------------
// Ed25519PublicKey impls
// ---------------------------------------------------------------------------

impl Ed25519PublicKey {
    /// Create a public key from raw 32 bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Return the raw 32-byte public key.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render the public key as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a raw 32-byte public key from hex.
    ///
    /// # Errors
    ///
    /// [`CryptoError::HexDecode`] for malformed hex, and
    /// [`CryptoError::InvalidPublicKey`] when it decodes to anything other
    /// than 32 bytes.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let bytes: [u8; 32] = hex_to_bytes(hex)?.try_into().map_err(|v: Vec<u8>| {
            CryptoError::InvalidPublicKey(format!("expected 32 bytes, got {}", v.len()))
        })?;
        Ok(Self(bytes))
    }

    /// The User address for this key.
    pub fn address(&self) -> Address {
        Address::from_raw_key(&self.0)
    }
}

impl PublicKeySource for Ed25519PublicKey {
    fn public_key_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ed25519PublicKey({}...)", hex_prefix(&self.0))
    }
}

impl std::fmt::Display for Ed25519PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// Ed25519KeyPair impls
// ---------------------------------------------------------------------------

impl Ed25519KeyPair {
    /// Generate a new random Ed25519 key pair.
    pub fn generate() -> Self {
        let mut csprng = rand::rngs::OsRng;
        Self::from_signing_key(ed25519_dalek::SigningKey::generate(&mut csprng))
    }

    /// Create a key pair from a raw 32-byte private key seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self::from_signing_key(ed25519_dalek::SigningKey::from_bytes(seed))
    }

    fn from_signing_key(signing_key: ed25519_dalek::SigningKey) -> Self {
        let public_key = signing_key.verifying_key().to_bytes();
        Self {
            signing_key,
            public_key,
        }
    }

    /// Import a key pair from a WIF string.
    ///
    /// # Errors
    ///
    /// Same as [`wif::address_from_wif`].
    pub fn from_wif(wif_text: &str) -> Result<Self, AddressError> {
        wif::with_seed(wif_text, Self::from_seed)
    }

    /// Export the seed as a WIF string. The result is wiped on drop.
    pub fn to_wif(&self) -> Zeroizing<String> {
        wif::encode_seed(self.signing_key.as_bytes())
    }

    /// Get the public key from this key pair.
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.public_key)
    }

    /// The User address for this key pair.
    pub fn address(&self) -> Address {
        self.public_key().address()
    }
}

impl PublicKeySource for Ed25519KeyPair {
    fn public_key_bytes(&self) -> &[u8] {
        &self.public_key
    }
}

impl std::fmt::Debug for Ed25519KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ed25519KeyPair(<private>)")
    }
}

// ---------------------------------------------------------------------------
// Hex utilities (no external hex crate dependency)
// ---------------------------------------------------------------------------

fn hex_prefix(bytes: &[u8]) -> String {
    bytes.iter().take(4).map(|b| format!("{b:02x}")).collect()
}

/// Decode an even-length hex string into bytes.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, CryptoError> {
    let hex = hex.trim();
    if hex.len() % 2 != 0 {
        return Err(CryptoError::HexDecode(
            "hex string must have even length".to_string(),
        ));
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            hex.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| CryptoError::HexDecode(format!("invalid hex at position {i}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8032 §7.1, TEST 1.
    const RFC8032_SEED: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    const RFC8032_PUBLIC: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

    fn rfc_seed() -> [u8; 32] {
        let mut seed = [0u8; 32];
        seed.copy_from_slice(&hex_to_bytes(RFC8032_SEED).unwrap());
        seed
    }

    #[test]
    fn test_keypair_generation() {
        let kp = Ed25519KeyPair::generate();
        let pk = kp.public_key();
        assert_eq!(pk.as_bytes().len(), 32);
    }

    #[test]
    fn test_known_public_key_vector() {
        let kp = Ed25519KeyPair::from_seed(&rfc_seed());
        assert_eq!(kp.public_key().to_hex(), RFC8032_PUBLIC);
    }

    #[test]
    fn test_address_matches_from_key() {
        let kp = Ed25519KeyPair::from_seed(&rfc_seed());
        let via_trait = Address::from_key(&kp).unwrap();
        assert_eq!(kp.address(), via_trait);
        assert_eq!(kp.public_key().address(), via_trait);
        assert_eq!(&via_trait.as_bytes()[2..], kp.public_key().as_bytes());
        assert!(via_trait.is_user());
    }

    #[test]
    fn test_deterministic_from_seed() {
        let seed = [42u8; 32];
        let kp1 = Ed25519KeyPair::from_seed(&seed);
        let kp2 = Ed25519KeyPair::from_seed(&seed);
        assert_eq!(kp1.public_key(), kp2.public_key());
        assert_eq!(kp1.address(), kp2.address());
    }

    #[test]
    fn test_public_key_hex_roundtrip() {
        let kp = Ed25519KeyPair::generate();
        let pk = kp.public_key();
        let hex = pk.to_hex();
        assert_eq!(hex.len(), 64);
        let pk2 = Ed25519PublicKey::from_hex(&hex).unwrap();
        assert_eq!(pk, pk2);
    }

    #[test]
    fn test_public_key_invalid_hex() {
        assert!(Ed25519PublicKey::from_hex("not-hex").is_err());
        assert!(Ed25519PublicKey::from_hex("aabb").is_err());
        assert!(Ed25519PublicKey::from_hex(&"zz".repeat(32)).is_err());
    }

    #[test]
    fn test_public_key_wrong_width_names_byte_count() {
        let err = Ed25519PublicKey::from_hex(&"ab".repeat(33)).unwrap_err();
        assert!(matches!(err, CryptoError::InvalidPublicKey(_)));
        assert!(format!("{err}").contains("got 33"));
    }

    #[test]
    fn test_hex_to_bytes_rejects_multibyte_input() {
        assert!(hex_to_bytes("é0").is_err());
        assert!(hex_to_bytes("abc").is_err());
        assert_eq!(hex_to_bytes("00ff").unwrap(), vec![0x00, 0xff]);
    }

    #[test]
    fn test_debug_does_not_leak_private_key() {
        let kp = Ed25519KeyPair::generate();
        let debug = format!("{kp:?}");
        assert_eq!(debug, "Ed25519KeyPair(<private>)");
        assert!(!debug.contains("SigningKey"));
    }

    #[test]
    fn test_debug_public_key_shows_prefix() {
        let kp = Ed25519KeyPair::generate();
        let pk = kp.public_key();
        let debug = format!("{pk:?}");
        assert!(debug.starts_with("Ed25519PublicKey("));
        assert!(debug.ends_with("...)"));
    }
}
