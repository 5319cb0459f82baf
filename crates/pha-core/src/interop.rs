//! # Interop Addresses
//!
//! Packs a foreign platform identifier and a 33-byte foreign public key
//! into the address layout, and unpacks them again:
//!
//! ```text
//! [INTEROP_BASE + platform - 1][33-byte key]
//! ```

use crate::address::Address;
use crate::error::AddressError;
use crate::kind::{AddressKind, PlatformId};

impl Address {
    /// Build an Interop address for `platform` from a 33-byte foreign key.
    ///
    /// # Errors
    ///
    /// - [`AddressError::InvalidPublicKeyLength`] unless `public_key` is 33
    ///   bytes.
    /// - [`AddressError::InvalidPlatformId`] for platform 0 or above
    ///   [`PlatformId::MAX`].
    pub fn from_interop(platform: u8, public_key: &[u8]) -> Result<Self, AddressError> {
        if public_key.len() != Self::PAYLOAD_LENGTH {
            return Err(AddressError::InvalidPublicKeyLength {
                actual: public_key.len(),
            });
        }
        let platform = PlatformId::new(platform)?;

        let mut bytes = [0u8; Self::LENGTH];
        bytes[0] = AddressKind::Interop(platform).discriminator();
        bytes[1..].copy_from_slice(public_key);
        Ok(Self::from_array(bytes))
    }

    /// Copy the foreign key into `out` and return the platform.
    ///
    /// # Errors
    ///
    /// - [`AddressError::InvalidAddressKind`] if this is not an Interop
    ///   address.
    /// - [`AddressError::InsufficientBufferSpace`] if `out` is shorter than
    ///   33 bytes. `out` is left untouched.
    pub fn decode_interop(&self, out: &mut [u8]) -> Result<PlatformId, AddressError> {
        let platform = self.kind().platform().ok_or_else(|| {
            AddressError::InvalidAddressKind(format!("{} address is not interop", self.kind()))
        })?;
        if out.len() < Self::PAYLOAD_LENGTH {
            return Err(AddressError::InsufficientBufferSpace {
                required: Self::PAYLOAD_LENGTH,
                available: out.len(),
            });
        }
        out[..Self::PAYLOAD_LENGTH].copy_from_slice(&self.bytes[1..]);
        Ok(platform)
    }

    /// Owned form of [`Address::decode_interop`]; `None` for non-interop
    /// addresses.
    pub fn interop_parts(&self) -> Option<(PlatformId, [u8; Self::PAYLOAD_LENGTH])> {
        self.kind()
            .platform()
            .map(|platform| (platform, self.payload()))
    }
}
