// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use odf_cli::cli::Cli;
use odf_cli::commands;
use odf_cli::config::Config;
use odf_cli::kubernetes::create_client;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_cli(&cli);
    debug!(
        "Configuration loaded: storage_cluster_namespace={}",
        config.storage_cluster_namespace
    );

    let client = create_client(&config).await?;

    let message = commands::execute(&client, &config, &cli.command).await?;
    info!("{}", message);

    Ok(())
}
