//! # Wallet Import Format
//!
//! A WIF string is the Base58Check encoding of
//!
//! ```text
//! [0x80][32-byte Ed25519 seed][0x01]
//! ```
//!
//! Decoding goes straight to a User address. The decoded bytes sit in a
//! `Zeroizing` buffer owned by [`with_seed`] and are wiped when it returns,
//! whichever path it returns by. Rejections are logged at `debug` with the
//! reason only.

use pha_core::{Address, AddressError};
use zeroize::Zeroizing;

/// Version marker in byte 0.
const WIF_VERSION: u8 = 0x80;
/// Compression marker in the last byte.
const WIF_COMPRESSED: u8 = 0x01;
/// Decoded payload: version + seed + compression marker.
const WIF_PAYLOAD_LENGTH: usize = 34;
/// Base58Check checksum trailing the payload during decode.
const CHECKSUM_LENGTH: usize = 4;

/// Recover the User address for the key exported in `wif`.
///
/// # Errors
///
/// - [`AddressError::MissingInput`] for an empty string.
/// - [`AddressError::InvalidWifFormat`] for a bad Base58 digit, a checksum
///   mismatch, a payload that is not 34 bytes, or wrong version or
///   compression markers.
pub fn address_from_wif(wif: &str) -> Result<Address, AddressError> {
    let public_key = with_seed(wif, |seed| {
        ed25519_dalek::SigningKey::from_bytes(seed)
            .verifying_key()
            .to_bytes()
    })?;
    Ok(Address::from_raw_key(&public_key))
}

/// Decode `wif` and hand the 32-byte seed to `derive`.
///
/// The seed reference cannot outlive this call and the buffer behind it is
/// zeroized before returning.
pub(crate) fn with_seed<T>(
    wif: &str,
    derive: impl FnOnce(&[u8; 32]) -> T,
) -> Result<T, AddressError> {
    if wif.is_empty() {
        return Err(AddressError::MissingInput("WIF"));
    }

    let mut buf = Zeroizing::new([0u8; WIF_PAYLOAD_LENGTH + CHECKSUM_LENGTH]);
    let len = bs58::decode(wif)
        .with_check(None)
        .onto(&mut buf[..])
        .map_err(|e| {
            tracing::debug!(reason = %e, "rejected WIF: Base58Check decode failed");
            AddressError::InvalidWifFormat
        })?;

    if len != WIF_PAYLOAD_LENGTH {
        tracing::debug!(len, "rejected WIF: wrong payload length");
        return Err(AddressError::InvalidWifFormat);
    }
    if buf[0] != WIF_VERSION || buf[WIF_PAYLOAD_LENGTH - 1] != WIF_COMPRESSED {
        tracing::debug!("rejected WIF: version or compression marker mismatch");
        return Err(AddressError::InvalidWifFormat);
    }

    let seed: &[u8; 32] = buf[1..WIF_PAYLOAD_LENGTH - 1]
        .try_into()
        .map_err(|_| AddressError::InvalidWifFormat)?;
    Ok(derive(seed))
}

/// Base58Check-encode a seed as WIF.
pub(crate) fn encode_seed(seed: &[u8; 32]) -> Zeroizing<String> {
    let mut payload = Zeroizing::new([0u8; WIF_PAYLOAD_LENGTH]);
    payload[0] = WIF_VERSION;
    payload[1..WIF_PAYLOAD_LENGTH - 1].copy_from_slice(seed);
    payload[WIF_PAYLOAD_LENGTH - 1] = WIF_COMPRESSED;
    Zeroizing::new(bs58::encode(&payload[..]).with_check().into_string())
}
