// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! `odf set multiclusterservice`: register the StorageCluster with a
//! MultiClusterService ClusterID.

use crate::constants::mcs;
use crate::error::{OdfError, Result};
use crate::kubernetes::{is_capability_available, GroupVersion};
use crate::types::StorageCluster;
use kube::{
    api::{ListParams, PostParams},
    Api, Client, ResourceExt,
};
use std::fmt;
use tracing::{debug, info, instrument};

/// Success report for a StorageCluster that now has MultiClusterService enabled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiClusterServiceEnabled {
    pub namespace: String,
    pub name: String,
    pub cluster_id: String,
}

impl fmt::Display for MultiClusterServiceEnabled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Successfully set 'multiClusterService' on StorageCluster {:?} in namespace {:?}.",
            self.name, self.namespace
        )
    }
}

/// Check that the MultiClusterService API is served, then enable it on the
/// StorageCluster in `namespace`.
pub async fn run(client: &Client, namespace: &str, cluster_id: &str) -> Result<MultiClusterServiceEnabled> {
    let group_version = GroupVersion::new(mcs::GROUP, mcs::VERSION);
    if !is_capability_available(client, &group_version, mcs::SERVICE_EXPORTS).await? {
        return Err(OdfError::CapabilityUnavailable {
            group_version: group_version.to_string(),
            resource: mcs::SERVICE_EXPORTS.to_string(),
        });
    }

    enable_multi_cluster_service(client, namespace, cluster_id).await
}

/// Enable MultiClusterService on the single StorageCluster in `namespace`.
///
/// Refuses to act on zero or several StorageClusters and never overwrites a
/// ClusterID that is already set. The update carries the resourceVersion of
/// the object read here, so a concurrent write surfaces as `UpdateConflict`.
#[instrument(skip(client))]
pub async fn enable_multi_cluster_service(
    client: &Client,
    namespace: &str,
    cluster_id: &str,
) -> Result<MultiClusterServiceEnabled> {
    if cluster_id.trim().is_empty() {
        return Err(OdfError::InvalidClusterId("ClusterID must not be empty".to_string()));
    }

    let storage_clusters: Api<StorageCluster> = Api::namespaced(client.clone(), namespace);
    let list = storage_clusters.list(&ListParams::default()).await?;

    let name = match list.items.as_slice() {
        [] => {
            return Err(OdfError::StorageClusterNotFound {
                namespace: namespace.to_string(),
            })
        }
        [storage_cluster] => storage_cluster.name_any(),
        items => {
            return Err(OdfError::StorageClusterAmbiguous {
                namespace: namespace.to_string(),
                count: items.len(),
            })
        }
    };

    // Re-read by name before mutating
    let mut storage_cluster = storage_clusters.get(&name).await?;

    if let Some(existing) = storage_cluster.multi_cluster_service_cluster_id() {
        return Err(OdfError::AlreadyConfigured {
            namespace: namespace.to_string(),
            name,
            cluster_id: existing.to_string(),
        });
    }

    storage_cluster.enable_multi_cluster_service(cluster_id);
    debug!(
        "Updating StorageCluster {}/{} at resourceVersion {:?}",
        namespace,
        name,
        storage_cluster.resource_version()
    );

    storage_clusters
        .replace(&name, &PostParams::default(), &storage_cluster)
        .await
        .map_err(|e| {
            if is_conflict(&e) {
                OdfError::UpdateConflict {
                    namespace: namespace.to_string(),
                    name: name.clone(),
                    source: e,
                }
            } else {
                OdfError::KubeError(e)
            }
        })?;

    info!("Enabled MultiClusterService on StorageCluster {}/{}", namespace, name);

    Ok(MultiClusterServiceEnabled {
        namespace: namespace.to_string(),
        name,
        cluster_id: cluster_id.to_string(),
    })
}

fn is_conflict(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(e) if e.code == 409)
}
