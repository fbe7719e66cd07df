// src/main.rs
//! Recovery entry point: reads shares and key map, writes the recovered keys as CSV.
use anyhow::{Context, Result};
use clap::Parser;
use custody_recovery::cli::Cli;
use custody_recovery::core::config::RecoveryConfig;
use custody_recovery::manifest::KeyMap;
use custody_recovery::recovery::{write_csv, Recovery};
use custody_recovery::registry::GeneratorRegistry;
use custody_recovery::security::{vec_to_secret, SecretVec};
use std::fs::{self, File};
use std::io::BufWriter;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let base = match cli.config.as_deref() {
        Some(path) => RecoveryConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RecoveryConfig::default(),
    };
    let config = cli.merge_into(base);
    config.validate().context("Invalid parameters")?;

    info!("Initiating recovery");
    debug!(
        shares = ?config.shares,
        keymap = ?config.keymap,
        target = %config.target.display(),
        "Parameters in use"
    );

    let mut shares: Vec<SecretVec> = Vec::with_capacity(config.shares.len());
    for (idx, path) in config.shares.iter().enumerate() {
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read share {} ({})", idx + 1, path.display()))?;
        shares.push(vec_to_secret(bytes));
    }

    // validate() guarantees the key map path
    let keymap_path = config.keymap.as_deref().context("keymap is required")?;
    let keymap_file = File::open(keymap_path)
        .with_context(|| format!("Failed to open keymap {}", keymap_path.display()))?;
    let keymap = KeyMap::from_reader(keymap_file).context("Failed to parse keymap")?;

    let registry = GeneratorRegistry::with_default_curves();
    let rows = Recovery::new(&registry)
        .with_onchain_wallet(config.onchain_wallet.as_str())
        .recover(&shares, &keymap)
        .context("Failed to recover")?;

    let target = File::create(&config.target)
        .with_context(|| format!("Failed to create target {}", config.target.display()))?;
    write_csv(BufWriter::new(target), &rows).context("Failed to write output")?;

    info!(accounts = rows.len(), "Recovery complete. Results saved to {}", config.target.display());
    Ok(())
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
