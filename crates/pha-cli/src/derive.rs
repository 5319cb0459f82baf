//! # Derivation Subcommands
//!
//! Build addresses from raw layouts, public keys, hashed names and interop
//! keys.
//!
//! ## Usage
//!
//! ```bash
//! pha from-key d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a
//! pha from-hash stake
//! pha interop --platform 1 --key 02aabb...   # 33-byte key, 66 hex chars
//! pha from-bytes 0100d75a98...               # 34-byte layout, 68 hex chars
//! ```

use anyhow::{Context, Result};
use clap::Args;

use pha_core::Address;
use pha_crypto::ed25519::hex_to_bytes;
use pha_crypto::Ed25519PublicKey;

use crate::report::AddressReport;

/// Arguments for `from-bytes`.
#[derive(Args, Debug)]
pub struct FromBytesArgs {
    /// The 34-byte address layout as hex.
    pub hex: String,
}

/// Arguments for `from-key`.
#[derive(Args, Debug)]
pub struct FromKeyArgs {
    /// Public key as hex: 32 bytes, or 33 bytes with a prefix byte.
    pub public_key: String,
}

/// Arguments for `from-hash`.
#[derive(Args, Debug)]
pub struct FromHashArgs {
    /// Input to hash. UTF-8 text unless `--hex` is set.
    pub input: String,

    /// Treat the input as hex-encoded bytes.
    #[arg(long)]
    pub hex: bool,
}

/// Arguments for `interop`.
#[derive(Args, Debug)]
pub struct InteropArgs {
    /// Foreign platform identifier (1-253).
    #[arg(long)]
    pub platform: u8,

    /// Foreign 33-byte public key as hex.
    #[arg(long)]
    pub key: String,
}

/// Execute `from-bytes`.
pub fn run_from_bytes(args: &FromBytesArgs) -> Result<AddressReport> {
    let bytes = hex_to_bytes(&args.hex).context("address bytes must be hex")?;
    let addr = Address::from_bytes(&bytes)?;
    Ok(AddressReport::new(&addr))
}

/// Execute `from-key`.
pub fn run_from_key(args: &FromKeyArgs) -> Result<AddressReport> {
    let hex = args.public_key.trim();
    let addr = if hex.len() == 64 {
        Ed25519PublicKey::from_hex(hex)?.address()
    } else {
        Address::from_key(&hex_to_bytes(hex).context("public key must be hex")?)?
    };
    Ok(AddressReport::new(&addr))
}

/// Execute `from-hash`.
pub fn run_from_hash(args: &FromHashArgs) -> Result<AddressReport> {
    let addr = if args.hex {
        Address::from_hash(hex_to_bytes(&args.input).context("input must be hex")?)
    } else {
        Address::from_name(&args.input)
    };
    Ok(AddressReport::new(&addr))
}

/// Execute `interop`.
pub fn run_interop(args: &InteropArgs) -> Result<AddressReport> {
    let key = hex_to_bytes(&args.key).context("interop key must be hex")?;
    let addr = Address::from_interop(args.platform, &key)?;
    tracing::debug!(platform = args.platform, "built interop address");
    Ok(AddressReport::new(&addr))
}
