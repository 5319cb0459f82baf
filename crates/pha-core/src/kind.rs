//! # Address Kind
//!
//! Maps the first byte of the layout to a tagged [`AddressKind`] and back.
//! This is the only module that does discriminator arithmetic; everything
//! else goes through [`AddressKind::from_discriminator`] and
//! [`AddressKind::discriminator`].
//!
//! Discriminator values:
//!
//! | Byte | Kind |
//! |---|---|
//! | 0 | Null |
//! | 1 | User |
//! | 2 | System |
//! | 3.. | Interop, platform `byte - 3 + 1` |

use serde::{Deserialize, Serialize};

use crate::error::AddressError;

/// Discriminator of the first interop platform.
pub const INTEROP_BASE: u8 = 3;

/// Identifier of a foreign platform embedded in an interop address.
///
/// Valid values are `1..=253`, the range whose discriminator
/// `INTEROP_BASE + platform - 1` still fits in one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlatformId(u8);

impl PlatformId {
    /// Smallest valid platform identifier.
    pub const MIN: u8 = 1;
    /// Largest valid platform identifier.
    pub const MAX: u8 = u8::MAX - INTEROP_BASE + 1;

    /// Validate and wrap a platform identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::InvalidPlatformId`] for 0 or anything above
    /// [`PlatformId::MAX`].
    pub fn new(platform: u8) -> Result<Self, AddressError> {
        if (Self::MIN..=Self::MAX).contains(&platform) {
            Ok(Self(platform))
        } else {
            Err(AddressError::InvalidPlatformId { platform })
        }
    }

    /// The raw platform number.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PlatformId {
    type Error = AddressError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlatformId> for u8 {
    fn from(id: PlatformId) -> Self {
        id.0
    }
}

impl std::fmt::Display for PlatformId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of principal an address names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// The all-zero sentinel address.
    Null,
    /// Ordinary account derived from a key pair.
    User,
    /// Protocol-owned account derived from a name hash.
    System,
    /// Foreign-chain account on the given platform.
    Interop(PlatformId),
}

/// Four-way classification of an address without the interop platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindTag {
    /// See [`AddressKind::Null`].
    Null,
    /// See [`AddressKind::User`].
    User,
    /// See [`AddressKind::System`].
    System,
    /// See [`AddressKind::Interop`].
    Interop,
}

impl AddressKind {
    /// Decode a discriminator byte. Every byte value maps to a kind.
    pub fn from_discriminator(byte: u8) -> Self {
        match byte {
            0 => Self::Null,
            1 => Self::User,
            2 => Self::System,
            b => Self::Interop(PlatformId(b - INTEROP_BASE + 1)),
        }
    }

    /// Encode this kind as its discriminator byte.
    pub fn discriminator(self) -> u8 {
        match self {
            Self::Null => 0,
            Self::User => 1,
            Self::System => 2,
            // Offset first: 3 + 253 does not fit in u8, 253 + 2 does.
            Self::Interop(platform) => platform.get() + (INTEROP_BASE - 1),
        }
    }

    /// Drop the platform and return the four-way class.
    pub fn tag(self) -> KindTag {
        match self {
            Self::Null => KindTag::Null,
            Self::User => KindTag::User,
            Self::System => KindTag::System,
            Self::Interop(_) => KindTag::Interop,
        }
    }

    /// The interop platform, if any.
    pub fn platform(self) -> Option<PlatformId> {
        match self {
            Self::Interop(platform) => Some(platform),
            _ => None,
        }
    }
}

impl KindTag {
    /// Lowercase name used in logs and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::User => "user",
            Self::System => "system",
            Self::Interop => "interop",
        }
    }
}

impl std::fmt::Display for KindTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for AddressKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interop(platform) => write!(f, "interop:{platform}"),
            other => f.write_str(other.tag().as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_discriminators() {
        assert_eq!(AddressKind::from_discriminator(0), AddressKind::Null);
        assert_eq!(AddressKind::from_discriminator(1), AddressKind::User);
        assert_eq!(AddressKind::from_discriminator(2), AddressKind::System);
    }

    #[test]
    fn first_interop_discriminator_is_platform_one() {
        let kind = AddressKind::from_discriminator(INTEROP_BASE);
        assert_eq!(kind.platform().map(PlatformId::get), Some(1));
    }

    #[test]
    fn every_byte_round_trips_through_kind() {
        for byte in 0..=u8::MAX {
            let kind = AddressKind::from_discriminator(byte);
            assert_eq!(kind.discriminator(), byte, "byte {byte}");
            let expected = match byte {
                0 => KindTag::Null,
                1 => KindTag::User,
                2 => KindTag::System,
                _ => KindTag::Interop,
            };
            assert_eq!(kind.tag(), expected, "byte {byte}");
        }
    }

    #[test]
    fn highest_discriminator_is_max_platform() {
        let kind = AddressKind::from_discriminator(u8::MAX);
        assert_eq!(kind.platform().map(PlatformId::get), Some(PlatformId::MAX));
        assert_eq!(PlatformId::MAX, 253);
    }

    #[test]
    fn max_platform_encodes_to_last_byte() {
        let kind = AddressKind::Interop(PlatformId::new(PlatformId::MAX).unwrap());
        assert_eq!(kind.discriminator(), u8::MAX);
        assert_eq!(AddressKind::from_discriminator(u8::MAX).discriminator(), u8::MAX);
    }

    #[test]
    fn platform_id_range() {
        assert!(PlatformId::new(0).is_err());
        assert!(PlatformId::new(1).is_ok());
        assert!(PlatformId::new(253).is_ok());
        assert_eq!(
            PlatformId::new(254),
            Err(AddressError::InvalidPlatformId { platform: 254 })
        );
    }

    #[test]
    fn display_forms() {
        assert_eq!(AddressKind::User.to_string(), "user");
        let interop = AddressKind::Interop(PlatformId::new(7).unwrap());
        assert_eq!(interop.to_string(), "interop:7");
    }

    #[test]
    fn kind_tag_serializes_lowercase() {
        let json = serde_json::to_string(&KindTag::System).unwrap();
        assert_eq!(json, "\"system\"");
    }

    #[test]
    fn platform_id_deserialize_validates() {
        let ok: PlatformId = serde_json::from_str("5").unwrap();
        assert_eq!(ok.get(), 5);
        assert!(serde_json::from_str::<PlatformId>("0").is_err());
    }
}
