//! Developer tool: split a hex-encoded secret into share files.
//!
//! Produces the share encoding `recovery --shard` consumes, for test fixtures and
//! recovery drills.
use anyhow::{Context, Result};
use clap::Parser;
use custody_recovery::security::SecretVec;
use custody_recovery::shamir::split_secret;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "split-shares", about = "Split a secret into Shamir share files")]
struct Args {
    /// File holding the secret as hex text
    #[arg(long)]
    secret_file: PathBuf,

    /// Shares required to reconstruct
    #[arg(long, default_value = "2")]
    threshold: u8,

    /// Shares to produce
    #[arg(long, default_value = "3")]
    shares: u8,

    /// Directory receiving share-1.bin, share-2.bin, ...
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let hex_text = SecretVec::new(
        fs::read(&args.secret_file)
            .with_context(|| format!("Failed to read {}", args.secret_file.display()))?,
    );
    let hex_str = std::str::from_utf8(&hex_text).context("Secret file is not UTF-8")?;
    let secret = SecretVec::new(hex::decode(hex_str.trim()).context("Secret file is not hex")?);

    let shares = split_secret(&secret, args.threshold, args.shares)?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;
    for (idx, share) in shares.iter().enumerate() {
        let path = args.out_dir.join(format!("share-{}.bin", idx + 1));
        fs::write(&path, share.as_slice())
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    info!(
        threshold = args.threshold,
        shares = shares.len(),
        out_dir = %args.out_dir.display(),
        "Shares written"
    );
    Ok(())
}
