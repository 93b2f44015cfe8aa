// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// StorageCluster as served by the OCS operator.
///
/// Only the fields this tool touches are typed. Everything else is kept in
/// `other` so a full-object update writes it back unchanged.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "ocs.openshift.io", version = "v1", kind = "StorageCluster")]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct StorageClusterSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkSpec>,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSpec {
    #[serde(default)]
    pub multi_cluster_service: MultiClusterServiceSpec,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
pub struct MultiClusterServiceSpec {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, rename = "clusterID", skip_serializing_if = "String::is_empty")]
    pub cluster_id: String,
}

impl StorageCluster {
    /// The ClusterID assigned to MultiClusterService, if one is set
    pub fn multi_cluster_service_cluster_id(&self) -> Option<&str> {
        self.spec
            .network
            .as_ref()
            .map(|n| n.multi_cluster_service.cluster_id.as_str())
            .filter(|id| !id.is_empty())
    }

    /// Turn on MultiClusterService with the given ClusterID.
    /// A missing network section is created rather than treated as an error.
    pub fn enable_multi_cluster_service(&mut self, cluster_id: &str) {
        let network = self.spec.network.get_or_insert_with(NetworkSpec::default);
        network.multi_cluster_service.enabled = true;
        network.multi_cluster_service.cluster_id = cluster_id.to_string();
    }
}
