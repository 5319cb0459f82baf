//! # Inspect and Validate Subcommands
//!
//! Decode address text and report what it names, or just say whether it
//! decodes at all.

use anyhow::Result;
use clap::Args;

use pha_core::Address;

use crate::report::AddressReport;

/// Arguments for `inspect`.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Address text (48 characters).
    pub address: String,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Address text to check.
    pub address: String,
}

/// Execute `inspect`.
pub fn run_inspect(args: &InspectArgs) -> Result<AddressReport> {
    let addr = Address::from_text(args.address.trim())?;
    Ok(AddressReport::new(&addr))
}

/// Execute `validate`. Returns the process exit code: 0 valid, 1 invalid.
pub fn run_validate(args: &ValidateArgs) -> u8 {
    if Address::is_valid_text(args.address.trim()) {
        0
    } else {
        1
    }
}
