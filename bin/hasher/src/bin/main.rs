//! CLI tool to compute withdrawal encodings and hashes.
//!
//! - `hash`: print the withdrawal hash (and legacy hash) of every withdrawal
//! - `encode`: print the v1 or legacy encoding of every withdrawal
//! - `slot`: print the message passer storage slot of every withdrawal
//! - `predeploys`: list the predeploy registry

use clap::{Parser, Subcommand};
use config::Predeploy;
use hasher::{config::Config, encode_withdrawals, hash_withdrawals};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "withdrawal-hash")]
#[command(about = "Compute OP Stack withdrawal encodings and hashes")]
struct Cli {
    /// Path to the TOML file listing withdrawals
    #[arg(short, long, default_value = "withdrawals.toml", env = "WITHDRAWALS_FILE")]
    file: PathBuf,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the withdrawal hash of every withdrawal
    Hash {
        /// Also compute the pre-Bedrock legacy hash
        #[arg(long)]
        legacy: bool,
    },

    /// Print the encoded withdrawal that gets hashed
    Encode {
        /// Use the pre-Bedrock legacy encoding
        #[arg(long)]
        legacy: bool,
    },

    /// Compute the L2ToL1MessagePasser storage slot of every withdrawal
    Slot,

    /// List the known predeploy addresses
    Predeploys,
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Predeploys => {
            for predeploy in Predeploy::ALL {
                println!("{} {}", predeploy.address(), predeploy.name());
            }
        }
        Command::Hash { legacy } => {
            let config = load_config(&cli.file)?;
            let reports = hash_withdrawals(&config.withdrawals, legacy)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in reports {
                    match report.legacy_hash {
                        Some(legacy_hash) => println!("{} {}", report.hash, legacy_hash),
                        None => println!("{}", report.hash),
                    }
                }
            }
        }
        Command::Encode { legacy } => {
            let config = load_config(&cli.file)?;
            let encoded = encode_withdrawals(&config.withdrawals, legacy)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&encoded)?);
            } else {
                for bytes in encoded {
                    println!("{bytes}");
                }
            }
        }
        Command::Slot => {
            let config = load_config(&cli.file)?;
            let reports = hash_withdrawals(&config.withdrawals, false)?;
            if cli.json {
                let slots: Vec<_> = reports.iter().map(|r| r.storage_slot).collect();
                println!("{}", serde_json::to_string_pretty(&slots)?);
            } else {
                for report in reports {
                    println!("{} {}", report.hash, report.storage_slot);
                }
            }
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> eyre::Result<Config> {
    info!("Loading withdrawals: {}", path.display());
    let config = Config::from_file(path)?;
    info!(count = config.withdrawals.len(), "Loaded withdrawals");

    Ok(config)
}
