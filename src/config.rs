// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::cli::Cli;
use std::path::PathBuf;
use std::time::Duration;

/// Settings shared by every command, resolved from flags and environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace holding the StorageCluster
    pub storage_cluster_namespace: String,
    /// Explicit kubeconfig file; falls back to the inferred configuration
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
    /// Deadline for the whole command, if any
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Config {
            storage_cluster_namespace: cli.namespace.clone(),
            kubeconfig: cli.kubeconfig.clone(),
            context: cli.context.clone(),
            timeout: cli.timeout.filter(|secs| *secs > 0).map(Duration::from_secs),
        }
    }
}
