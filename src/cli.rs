// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command line arguments

use crate::constants::DEFAULT_STORAGE_CLUSTER_NAMESPACE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Manage OpenShift Data Foundation storage clusters
#[derive(Parser, Debug)]
#[command(name = "odf", version)]
pub struct Cli {
    /// Namespace of the StorageCluster
    #[arg(
        short = 'n',
        long,
        global = true,
        env = "STORAGE_CLUSTER_NAMESPACE",
        default_value = DEFAULT_STORAGE_CLUSTER_NAMESPACE
    )]
    pub namespace: String,

    /// Path to a kubeconfig file
    #[arg(long, global = true)]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use
    #[arg(long, global = true)]
    pub context: Option<String>,

    /// Abort the command after this many seconds (0 disables the deadline)
    #[arg(long, global = true, env = "ODF_TIMEOUT")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Change settings of the storage cluster
    #[command(subcommand)]
    Set(SetCommand),
}

#[derive(Subcommand, Debug)]
pub enum SetCommand {
    /// Enable MultiClusterService for StorageCluster
    #[command(
        name = "multiclusterservice",
        after_help = "Example:\n  odf set multiclusterservice <ClusterID> --namespace <StorageClusterNamespace>"
    )]
    MultiClusterService {
        /// ClusterID to register with MultiClusterService
        #[arg(value_name = "ClusterID")]
        cluster_id: String,
    },
}
