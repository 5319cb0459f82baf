//! # Key Subcommands
//!
//! User addresses backed by Ed25519 keys: import a WIF export, or generate
//! a fresh key pair.
//!
//! ## Security Invariant
//!
//! The WIF is read from an environment variable, never from argv, so it
//! does not land in shell history or process listings. It is only printed
//! back when `generate --show-wif` asks for it.

use anyhow::{Context, Result};
use clap::Args;

use pha_crypto::{address_from_wif, Ed25519KeyPair};
use zeroize::Zeroizing;

use crate::report::AddressReport;

/// Environment variable consulted by `wif` when `--env` is not given.
pub const DEFAULT_WIF_VAR: &str = "PHA_WIF";

/// Arguments for `wif`.
#[derive(Args, Debug)]
pub struct WifArgs {
    /// Environment variable holding the WIF string.
    #[arg(long = "env", default_value = DEFAULT_WIF_VAR)]
    pub var_name: String,
}

/// Arguments for `generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Include the WIF export of the new key in the output.
    #[arg(long)]
    pub show_wif: bool,
}

/// Execute `wif`.
pub fn run_wif(args: &WifArgs) -> Result<AddressReport> {
    let wif = Zeroizing::new(
        std::env::var(&args.var_name)
            .with_context(|| format!("environment variable {} not set", args.var_name))?,
    );
    report_from_wif(&wif)
}

/// Import a WIF string and summarize its address. Surrounding whitespace,
/// such as a trailing newline from a shell export, is ignored.
pub fn report_from_wif(wif: &str) -> Result<AddressReport> {
    let addr = address_from_wif(wif.trim())?;
    tracing::info!(kind = %addr.kind(), "imported WIF");
    Ok(AddressReport::new(&addr))
}

/// Execute `generate`.
pub fn run_generate(args: &GenerateArgs) -> Result<AddressReport> {
    let kp = Ed25519KeyPair::generate();
    let mut report = AddressReport::new(&kp.address());
    if args.show_wif {
        report.wif = Some(kp.to_wif());
    }
    tracing::info!(public_key = %kp.public_key(), "generated key pair");
    Ok(report)
}
