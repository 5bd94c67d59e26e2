//! Command-line driver for computing commitments and digests.

use clap::{Parser, Subcommand};
use poseidon_commit::{commit, hash_many, Fp, PoseidonResult};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "poseidon-commit")]
#[command(about = "Poseidon commitments over the STARK field", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Commit to a (value, secret) pair
    Commit {
        /// Value to commit to, decimal or 0x-hex
        value: String,
        /// Blinding secret, decimal or 0x-hex
        secret: String,
    },

    /// Hash a sequence of field elements
    Hash {
        /// Elements to hash, decimal or 0x-hex
        elements: Vec<String>,
    },
}

/// Parse a CLI argument as decimal, or as hex when 0x-prefixed.
fn parse_element(s: &str) -> PoseidonResult<Fp> {
    if s.starts_with("0x") || s.starts_with("0X") {
        Fp::from_hex(s)
    } else {
        Fp::from_dec(s)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Commit { value, secret }) => {
            match (parse_element(&value), parse_element(&secret)) {
                (Ok(value), Ok(secret)) => {
                    let commitment = commit(value, secret);
                    println!("commitment (decimal): {}", commitment.to_decimal());
                    println!("commitment (hex):     {}", commitment.to_hex());
                    ExitCode::SUCCESS
                }
                (Err(e), _) | (_, Err(e)) => {
                    eprintln!("error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Some(Commands::Hash { elements }) => {
            let parsed: PoseidonResult<Vec<Fp>> =
                elements.iter().map(|s| parse_element(s)).collect();
            match parsed {
                Ok(elements) => {
                    let digest = hash_many(&elements);
                    println!("digest (decimal): {}", digest.to_decimal());
                    println!("digest (hex):     {}", digest.to_hex());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        None => {
            println!("poseidon-commit: use --help for usage");
            ExitCode::SUCCESS
        }
    }
}
