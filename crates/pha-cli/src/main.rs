//! # pha CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pha_cli::derive::{
    run_from_bytes, run_from_hash, run_from_key, run_interop, FromBytesArgs, FromHashArgs,
    FromKeyArgs, InteropArgs,
};
use pha_cli::inspect::{run_inspect, run_validate, InspectArgs, ValidateArgs};
use pha_cli::keys::{run_generate, run_wif, GenerateArgs, WifArgs};
use pha_cli::report::AddressReport;

/// Phantasma address toolkit.
///
/// Derives 34-byte addresses from public keys, hashed names, WIF exports and
/// foreign-chain keys, and decodes or validates their 48-character text form.
#[derive(Parser, Debug)]
#[command(name = "pha", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode address text and show its kind and bytes.
    Inspect(InspectArgs),

    /// Check address text. Exits 0 when valid, 1 otherwise.
    Validate(ValidateArgs),

    /// Wrap a raw 34-byte layout.
    FromBytes(FromBytesArgs),

    /// User address from a 32- or 33-byte public key.
    FromKey(FromKeyArgs),

    /// System address from the SHA-256 of a name or byte string.
    FromHash(FromHashArgs),

    /// Interop address from a platform id and a 33-byte foreign key.
    Interop(InteropArgs),

    /// User address for a WIF export read from the environment.
    Wif(WifArgs),

    /// Generate a fresh Ed25519 key pair and show its address.
    Generate(GenerateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("pha CLI starting");

    match dispatch(cli.command, cli.json) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn dispatch(command: Commands, json: bool) -> anyhow::Result<u8> {
    let report = match command {
        Commands::Validate(args) => {
            let code = run_validate(&args);
            if json {
                println!("{}", serde_json::json!({ "valid": code == 0 }));
            } else {
                println!("{}", if code == 0 { "valid" } else { "invalid" });
            }
            return Ok(code);
        }
        Commands::Inspect(args) => run_inspect(&args)?,
        Commands::FromBytes(args) => run_from_bytes(&args)?,
        Commands::FromKey(args) => run_from_key(&args)?,
        Commands::FromHash(args) => run_from_hash(&args)?,
        Commands::Interop(args) => run_interop(&args)?,
        Commands::Wif(args) => run_wif(&args)?,
        Commands::Generate(args) => run_generate(&args)?,
    };
    print_report(&report, json)?;
    Ok(0)
}

fn print_report(report: &AddressReport, json: bool) -> anyhow::Result<()> {
    println!("{}", report.render(json)?.as_str());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_inspect() {
        let cli = Cli::try_parse_from(["pha", "inspect", "Pabc"]).unwrap();
        if let Commands::Inspect(args) = cli.command {
            assert_eq!(args.address, "Pabc");
        } else {
            panic!("expected Inspect");
        }
        assert!(!cli.json);
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pha", "from-hash", "gas", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        if let Commands::FromHash(args) = cli.command {
            assert_eq!(args.input, "gas");
            assert!(!args.hex);
        } else {
            panic!("expected FromHash");
        }
    }

    #[test]
    fn cli_parse_interop() {
        let cli = Cli::try_parse_from(["pha", "interop", "--platform", "3", "--key", "02ff"])
            .unwrap();
        if let Commands::Interop(args) = cli.command {
            assert_eq!(args.platform, 3);
            assert_eq!(args.key, "02ff");
        } else {
            panic!("expected Interop");
        }
    }

    #[test]
    fn cli_parse_interop_rejects_out_of_range_u8() {
        let parsed = Cli::try_parse_from(["pha", "interop", "--platform", "300", "--key", "00"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn cli_parse_wif_default_env() {
        let cli = Cli::try_parse_from(["pha", "wif"]).unwrap();
        if let Commands::Wif(args) = cli.command {
            assert_eq!(args.var_name, "PHA_WIF");
        } else {
            panic!("expected Wif");
        }
    }

    #[test]
    fn cli_parse_generate_show_wif() {
        let cli = Cli::try_parse_from(["pha", "generate", "--show-wif"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Generate(GenerateArgs { show_wif: true })
        ));
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["pha"]).is_err());
    }

    #[test]
    fn dispatch_validate_returns_exit_code() {
        let args = ValidateArgs {
            address: "short".to_string(),
        };
        assert_eq!(dispatch(Commands::Validate(args), false).unwrap(), 1);
    }

    #[test]
    fn dispatch_surfaces_handler_errors() {
        let args = FromKeyArgs {
            public_key: "zz".to_string(),
        };
        assert!(dispatch(Commands::FromKey(args), false).is_err());
    }
}
