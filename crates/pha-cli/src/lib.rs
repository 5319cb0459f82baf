//! # pha-cli — Address Toolkit Command-Line Interface
//!
//! A clap-based front end over `pha-core` and `pha-crypto`.
//!
//! ## Subcommands
//!
//! - `inspect` / `validate`: Decode and check address text
//! - `from-bytes` / `from-key` / `from-hash` / `interop`: Derive addresses
//! - `wif` / `generate`: Key-backed User addresses
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handlers return an [`report::AddressReport`]; `main` decides how to print it.
//! - Secrets are read from the environment, never from argv.

pub mod derive;
pub mod inspect;
pub mod keys;
pub mod report;
