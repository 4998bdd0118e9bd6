//! # EventCluster Node Runtime
//!
//! Entry point of an EventCluster node.
//!
//! Settings are resolved from an optional TOML file plus `EC_*` environment
//! overrides, validated once, and logged. A node with invalid settings exits
//! non-zero before any subsystem starts; `--check` stops right after
//! validation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use node_runtime::{init_tracing, load_input, NodeRuntime};

/// EventCluster node
#[derive(Parser, Debug)]
#[command(name = "node-runtime")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML settings file
    #[arg(short, long, env = "EC_CONFIG")]
    config: Option<PathBuf>,

    /// Validate the settings and exit
    #[arg(long)]
    check: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(&args.log_level, args.json_logs).context("Failed to initialise logging")?;

    let input = load_input(args.config.as_deref(), |name| std::env::var(name).ok())
        .context("Failed to load cluster settings")?;
    let runtime = NodeRuntime::new(input).context("Cluster settings failed validation")?;

    if args.check {
        info!("Settings are valid");
        return Ok(());
    }

    runtime.run().await.context("Failed to wait for shutdown signal")?;
    Ok(())
}
