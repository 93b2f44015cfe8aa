// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Namespace the StorageCluster lives in unless overridden
pub const DEFAULT_STORAGE_CLUSTER_NAMESPACE: &str = "openshift-storage";

/// Multi-cluster services API (installed by Submariner)
pub mod mcs {
    pub const GROUP: &str = "multicluster.x-k8s.io";
    pub const VERSION: &str = "v1alpha1";
    /// Resource whose presence signals a usable MultiClusterService API
    pub const SERVICE_EXPORTS: &str = "serviceexports";
}
