// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OdfError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("API discovery failed: {0}")]
    DiscoveryError(#[source] kube::Error),

    #[error(
        "{resource} ({group_version}) API is not available on this cluster. \
         Please ensure that Submariner is installed and Globalnet is enabled."
    )]
    CapabilityUnavailable {
        group_version: String,
        resource: String,
    },

    #[error("No StorageCluster found in namespace {namespace:?}.")]
    StorageClusterNotFound { namespace: String },

    #[error("Multiple StorageClusters found in namespace {namespace:?}. Expected 1 but found {count}.")]
    StorageClusterAmbiguous { namespace: String, count: usize },

    #[error("ClusterID for MultiClusterService is already set to {cluster_id:?}.")]
    AlreadyConfigured {
        namespace: String,
        name: String,
        cluster_id: String,
    },

    #[error("StorageCluster {namespace}/{name} was modified concurrently: {source}")]
    UpdateConflict {
        namespace: String,
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("Invalid cluster ID: {0}")]
    InvalidClusterId(String),

    #[error("Failed to parse kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

pub type Result<T> = std::result::Result<T, OdfError>;
