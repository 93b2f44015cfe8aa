// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation

use crate::config::Config;
use crate::error::{OdfError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, instrument};

/// Create a Kubernetes client from the configured kubeconfig, or the
/// inferred configuration (in-cluster or `KUBECONFIG`) when none is given.
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<Client> {
    let options = KubeConfigOptions {
        context: config.context.clone(),
        ..Default::default()
    };

    let client_config = match (&config.kubeconfig, &config.context) {
        (Some(path), _) => {
            let kubeconfig = read_kubeconfig(path).await?;
            KConfig::from_custom_kubeconfig(kubeconfig, &options)
                .await
                .map_err(|e| OdfError::KubeconfigError(format!("Failed to create config: {}", e)))?
        }
        (None, Some(_)) => KConfig::from_kubeconfig(&options)
            .await
            .map_err(|e| OdfError::KubeconfigError(format!("Failed to create config: {}", e)))?,
        (None, None) => KConfig::infer()
            .await
            .map_err(|e| OdfError::KubeconfigError(format!("Failed to infer config: {}", e)))?,
    };

    debug!("Using cluster {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| OdfError::KubeconfigError(format!("Failed to create client: {}", e)))
}

async fn read_kubeconfig(path: &Path) -> Result<Kubeconfig> {
    let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
        OdfError::KubeconfigError(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_kubeconfig(&contents)
}

fn parse_kubeconfig(contents: &str) -> Result<Kubeconfig> {
    serde_yaml::from_str(contents)
        .map_err(|e| OdfError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))
}
