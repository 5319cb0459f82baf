//! # Text Codec — Prefixed Base58
//!
//! Converts the 34-byte layout to and from its fixed-width text form:
//!
//! ```text
//! <prefix><47 Base58 digits>
//! ```
//!
//! The prefix is `P` for User, `X` for Interop and `S` for everything else.
//! The Base58 body (Bitcoin alphabet) carries all 34 bytes, discriminator
//! included, left-padded with the zero digit `1` to 47 characters. Every
//! address therefore renders as exactly [`TEXT_LENGTH`] characters and
//! interop addresses keep their platform through a text round-trip.
//!
//! Decoding checks, in order: total length, Base58 digits and width,
//! then that the prefix agrees with the decoded discriminator. Each step
//! has its own [`AddressError`] variant.

use std::str::FromStr;

use crate::address::Address;
use crate::error::AddressError;
use crate::kind::{AddressKind, KindTag};

/// Characters in every address text.
pub const TEXT_LENGTH: usize = 48;

/// Base58 digits after the prefix.
const BODY_LENGTH: usize = TEXT_LENGTH - 1;

/// The Base58 zero digit, used for left padding.
const ZERO_DIGIT: char = '1';

/// Prefix character for a kind.
pub fn prefix_for(kind: KindTag) -> char {
    match kind {
        KindTag::User => 'P',
        KindTag::Interop => 'X',
        KindTag::Null | KindTag::System => 'S',
    }
}

/// Encode a layout into its text form.
pub fn encode(bytes: &[u8; Address::LENGTH]) -> String {
    let kind = AddressKind::from_discriminator(bytes[0]);
    // 58^47 > 2^272, so the body never exceeds BODY_LENGTH digits.
    let body = bs58::encode(bytes).into_string();
    let mut text = String::with_capacity(TEXT_LENGTH);
    text.push(prefix_for(kind.tag()));
    text.extend(std::iter::repeat(ZERO_DIGIT).take(BODY_LENGTH.saturating_sub(body.len())));
    text.push_str(&body);
    text
}

/// Decode a text form into its layout.
///
/// # Errors
///
/// - [`AddressError::InvalidAddressText`] when the text is not
///   [`TEXT_LENGTH`] characters. Checked before any Base58 work.
/// - [`AddressError::InvalidAddressEncoding`] for a bad Base58 digit or a
///   value that does not fit in 34 bytes.
/// - [`AddressError::InvalidAddressKind`] for an unknown prefix or one
///   that disagrees with the discriminator.
pub fn decode(text: &str) -> Result<[u8; Address::LENGTH], AddressError> {
    if text.len() != TEXT_LENGTH {
        return Err(AddressError::InvalidAddressText {
            expected: TEXT_LENGTH,
            actual: text.chars().count(),
        });
    }

    let mut chars = text.chars();
    let prefix = chars.next();
    let body = chars.as_str();

    let decoded = bs58::decode(body)
        .into_vec()
        .map_err(|e| AddressError::InvalidAddressEncoding(e.to_string()))?;

    let split = decoded.len().checked_sub(Address::LENGTH).ok_or_else(|| {
        AddressError::InvalidAddressEncoding(format!("decoded to {} bytes", decoded.len()))
    })?;
    let (padding, layout) = decoded.split_at(split);
    if padding.iter().any(|&b| b != 0) {
        return Err(AddressError::InvalidAddressEncoding(
            "value exceeds 34 bytes".to_string(),
        ));
    }
    let bytes: [u8; Address::LENGTH] = layout
        .try_into()
        .map_err(|_| AddressError::InvalidAddressEncoding("bad layout width".to_string()))?;

    let kind = AddressKind::from_discriminator(bytes[0]);
    let expected = prefix_for(kind.tag());
    match prefix {
        Some(c) if c == expected => Ok(bytes),
        Some(c @ ('P' | 'S' | 'X')) => Err(AddressError::InvalidAddressKind(format!(
            "prefix '{c}' does not match {kind} discriminator"
        ))),
        Some(c) => Err(AddressError::InvalidAddressKind(format!(
            "unknown prefix '{c}'"
        ))),
        None => Err(AddressError::MissingInput("address text")),
    }
}

impl Address {
    /// Characters in every address text.
    pub const TEXT_LENGTH: usize = TEXT_LENGTH;

    /// The text form, computed on first use and cached.
    ///
    /// The cache is a `OnceLock`, so concurrent first reads are safe and
    /// all observe the same string.
    pub fn text(&self) -> &str {
        self.text.get_or_init(|| encode(&self.bytes))
    }

    /// Parse an address from its text form.
    ///
    /// # Errors
    ///
    /// See [`decode`].
    pub fn from_text(text: &str) -> Result<Self, AddressError> {
        match decode(text) {
            Ok(bytes) => Ok(Self::from_array(bytes)),
            Err(err) => {
                tracing::debug!(%err, "rejected address text");
                Err(err)
            }
        }
    }

    /// True when `text` decodes to an address. Never fails.
    pub fn is_valid_text(text: &str) -> bool {
        decode(text).is_ok()
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            f.write_str("[Null address]")
        } else {
            f.write_str(self.text())
        }
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Address({})", self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::sha256_digest;
    use crate::kind::PlatformId;

    #[test]
    fn user_text_from_aa_key() {
        let addr = Address::from_key(&[0xAAu8; 32]).unwrap();
        let text = addr.text();
        assert!(text.starts_with('P'));
        assert_eq!(text.len(), TEXT_LENGTH);

        let back = Address::from_text(text).unwrap();
        let bytes = back.as_bytes();
        assert_eq!(bytes[0], 1);
        assert_eq!(bytes[1], 0);
        assert!(bytes[2..].iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn system_and_null_use_s_prefix() {
        assert!(Address::from_name("gas").text().starts_with('S'));
        let null = Address::null();
        assert!(null.text().starts_with('S'));
        assert_eq!(null.text(), format!("S{}", "1".repeat(47)));
    }

    #[test]
    fn null_round_trips() {
        let null = Address::null();
        let back = Address::from_text(null.text()).unwrap();
        assert!(back.is_null());
    }

    #[test]
    fn interop_uses_x_prefix_and_keeps_platform() {
        let key = [0x03u8; 33];
        for platform in [1u8, 2, 42, 253] {
            let addr = Address::from_interop(platform, &key).unwrap();
            assert!(addr.text().starts_with('X'));
            let back = Address::from_text(addr.text()).unwrap();
            assert_eq!(back, addr);
            assert_eq!(back.kind().platform(), Some(PlatformId::new(platform).unwrap()));
        }
    }

    #[test]
    fn empty_hash_address_round_trips() {
        let addr = Address::from_hash(b"");
        let back: Address = addr.text().parse().unwrap();
        assert_eq!(&back.as_bytes()[2..], sha256_digest(b"").as_bytes());
    }

    #[test]
    fn wrong_length_rejected_before_decoding() {
        // '0' is outside the Base58 alphabet; length must fail first.
        let short = "0".repeat(47);
        let long = "0".repeat(49);
        for text in ["", "P", "P0", short.as_str(), long.as_str()] {
            match Address::from_text(text) {
                Err(AddressError::InvalidAddressText { expected, .. }) => {
                    assert_eq!(expected, 48)
                }
                other => panic!("unexpected result for {text:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn bad_alphabet_is_encoding_error() {
        let mut text = Address::from_name("x").text().to_string();
        text.replace_range(10..11, "0");
        assert!(matches!(
            Address::from_text(&text),
            Err(AddressError::InvalidAddressEncoding(_))
        ));
    }

    #[test]
    fn overflowing_body_is_encoding_error() {
        let text = format!("X{}", "z".repeat(47));
        assert!(matches!(
            Address::from_text(&text),
            Err(AddressError::InvalidAddressEncoding(_))
        ));
    }

    #[test]
    fn mismatched_prefix_is_kind_error() {
        let addr = Address::from_key(&[7u8; 32]).unwrap();
        let swapped = format!("S{}", &addr.text()[1..]);
        assert!(matches!(
            Address::from_text(&swapped),
            Err(AddressError::InvalidAddressKind(_))
        ));
        let unknown = format!("Q{}", &addr.text()[1..]);
        assert!(matches!(
            Address::from_text(&unknown),
            Err(AddressError::InvalidAddressKind(_))
        ));
    }

    #[test]
    fn is_valid_text_is_total() {
        let addr = Address::from_key(&[9u8; 32]).unwrap();
        assert!(Address::is_valid_text(addr.text()));
        assert!(!Address::is_valid_text(""));
        assert!(!Address::is_valid_text("not an address"));
        assert!(!Address::is_valid_text(&"é".repeat(24)));
        assert!(!Address::is_valid_text(&format!("P{}", "é".repeat(23))));
    }

    #[test]
    fn display_null_and_debug() {
        assert_eq!(Address::null().to_string(), "[Null address]");
        let addr = Address::from_name("stake");
        assert_eq!(addr.to_string(), addr.text());
        assert!(format!("{addr:?}").starts_with("Address(S"));
    }

    #[test]
    fn text_cache_is_stable() {
        let addr = Address::from_name("cache");
        let first = addr.text().to_string();
        assert_eq!(addr.text(), first);
        assert_eq!(addr.clone().text(), first);
    }

    #[test]
    fn concurrent_first_reads_agree() {
        let addr = std::sync::Arc::new(Address::from_key(&[0x42u8; 32]).unwrap());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let addr = std::sync::Arc::clone(&addr);
                std::thread::spawn(move || addr.text().to_string())
            })
            .collect();
        let texts: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(texts.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(texts[0], encode(addr.as_bytes()));
    }
}
